use super::{
  deployment::{default_sender_name, DeploymentEnvironment},
  transport::{HttpTransport, MailTransport},
  types::{Customer, DisplayAddress, MailerConfig, SendRequest, MAILGUN_API_URL, MESSAGES_SUFFIX},
};
use crate::error::MailerResult;

const NEW_COMMENT_SUBJECT: &str = "A comment on task ";

pub struct Mailer<T = HttpTransport> {
  api_key: String,
  domain: String,
  default_name: String,
  default_email: String,
  api_base_url: String,
  transport: T,
}

impl Mailer<HttpTransport> {
  pub fn new(config: MailerConfig, deployment: &impl DeploymentEnvironment) -> MailerResult<Self> {
    Ok(Self::with_transport(config, deployment, HttpTransport::new()?))
  }
}

impl<T> Mailer<T>
where
  T: MailTransport,
{
  /// Falls back to the deployment's sender name when the config has none.
  pub fn with_transport(config: MailerConfig, deployment: &impl DeploymentEnvironment, transport: T) -> Self {
    let default_name = match config.default_name {
      Some(name) if !name.is_empty() => name,
      _ => default_sender_name(deployment),
    };

    Mailer {
      api_key: config.api_key,
      domain: config.domain,
      default_name,
      default_email: config.default_email,
      api_base_url: config
        .api_base_url
        .unwrap_or_else(|| MAILGUN_API_URL.to_string()),
      transport,
    }
  }

  pub fn domain(&self) -> &str {
    &self.domain
  }

  pub fn default_name(&self) -> &str {
    &self.default_name
  }

  pub fn default_sender(&self) -> DisplayAddress {
    DisplayAddress::new(&self.default_name, &self.default_email)
  }

  pub fn messages_url(&self) -> String {
    format!(
      "{}/{}/{}",
      self.api_base_url.trim_end_matches('/'),
      self.domain,
      MESSAGES_SUFFIX
    )
  }

  /// `recipient` is expected as `Name <email@domain.com>`.
  pub async fn send_comment_on_task(
    &self,
    service: &str,
    task_id: &str,
    recipient: &str,
    message: &str,
  ) -> MailerResult<String> {
    let from_email = format!("{}-{}-comment@{}", service, task_id, self.domain);
    let subject = format!("{} {}.", NEW_COMMENT_SUBJECT, task_id);

    self
      .send_email_as_named_sender(&from_email, recipient, &subject, message)
      .await
  }

  pub async fn send_email_to_customer(
    &self,
    customer: &impl Customer,
    subject: &str,
    body_text: &str,
  ) -> MailerResult<String> {
    let recipient = DisplayAddress::new(customer.full_name(), customer.email());
    self
      .send_email_from_default_sender(&recipient, subject, body_text)
      .await
  }

  pub async fn send_internal_email_from_service(
    &self,
    service: &str,
    id: &str,
    subject: &str,
    body_text: &str,
  ) -> MailerResult<String> {
    let recipient = format!("{}-{}@{}", service, id, self.domain);
    self
      .send_email_from_default_sender(&recipient, subject, body_text)
      .await
  }

  pub async fn send_email_from_default_sender(
    &self,
    recipient: &str,
    subject: &str,
    body: &str,
  ) -> MailerResult<String> {
    self
      .send_email(&self.default_sender(), recipient, subject, body)
      .await
  }

  pub async fn send_email_as_named_sender(
    &self,
    sender_email: &str,
    recipient: &str,
    subject: &str,
    body: &str,
  ) -> MailerResult<String> {
    let sender = DisplayAddress::new(&self.default_name, sender_email);
    self.send_email(&sender, recipient, subject, body).await
  }

  /// Posts the message and returns the provider's response body as-is, whatever the status.
  pub async fn send_email(&self, sender: &str, recipient: &str, subject: &str, body: &str) -> MailerResult<String> {
    tracing::info!(%sender, %recipient, %subject, "Sending email");

    let request = SendRequest::new(sender, recipient, subject, body);
    self
      .transport
      .post_message(&self.messages_url(), &self.api_key, &request)
      .await
  }
}

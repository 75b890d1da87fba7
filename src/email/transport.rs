use async_trait::async_trait;

use super::{inbound::API_USER, types::SendRequest};
use crate::error::{MailerError, MailerResult};

/// Delivers one message to the provider and hands back whatever it answered.
#[async_trait]
pub trait MailTransport: Send + Sync {
  async fn post_message(&self, url: &str, api_key: &str, request: &SendRequest) -> MailerResult<String>;
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
  client: reqwest::Client,
}

impl HttpTransport {
  pub fn new() -> MailerResult<Self> {
    let client = reqwest::Client::builder()
      .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
      .build()
      .map_err(|e| MailerError::Config(format!("Failed to build HTTP client: {}", e)))?;

    Ok(HttpTransport { client })
  }

  pub fn with_client(client: reqwest::Client) -> Self {
    HttpTransport { client }
  }
}

#[async_trait]
impl MailTransport for HttpTransport {
  async fn post_message(&self, url: &str, api_key: &str, request: &SendRequest) -> MailerResult<String> {
    let response = self
      .client
      .post(url)
      .basic_auth(API_USER, Some(api_key))
      .form(&request.form_fields())
      .send()
      .await?;

    let status = response.status();
    if !status.is_success() {
      tracing::warn!(%status, %url, "Mail provider rejected message");
    }

    Ok(response.text().await?)
  }
}

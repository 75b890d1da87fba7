use std::{fmt, ops::Deref};

use serde::{Deserialize, Serialize};

use super::inbound::{InboundField, TEXT_FIELD};

pub const MAILGUN_API_URL: &str = "https://api.mailgun.net/v2";
pub const MESSAGES_SUFFIX: &str = "messages";

#[derive(Debug, Clone, Deserialize)]
pub struct MailerConfig {
  pub api_key: String,
  pub domain: String,
  pub default_email: String,
  #[serde(default)]
  pub default_name: Option<String>,
  /// Overrides [`MAILGUN_API_URL`], e.g. to point at a local fake provider.
  #[serde(default)]
  pub api_base_url: Option<String>,
}

impl MailerConfig {
  pub fn new(api_key: impl Into<String>, domain: impl Into<String>, default_email: impl Into<String>) -> Self {
    MailerConfig {
      api_key: api_key.into(),
      domain: domain.into(),
      default_email: default_email.into(),
      default_name: None,
      api_base_url: None,
    }
  }

  pub fn with_name(mut self, name: impl Into<String>) -> Self {
    self.default_name = Some(name.into());
    self
  }

  pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
    self.api_base_url = Some(url.into());
    self
  }
}

/// A `Name <email>` string. Neither half is validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DisplayAddress(String);

impl DisplayAddress {
  pub fn new(name: &str, email: &str) -> Self {
    DisplayAddress(format!("{} <{}>", name, email))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl Deref for DisplayAddress {
  type Target = str;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl fmt::Display for DisplayAddress {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl From<DisplayAddress> for String {
  fn from(address: DisplayAddress) -> Self {
    address.0
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendRequest {
  pub from: String,
  pub to: Vec<String>,
  pub subject: String,
  pub text: String,
}

impl SendRequest {
  pub fn new(from: &str, recipient: &str, subject: &str, text: &str) -> Self {
    SendRequest {
      from: from.to_string(),
      to: vec![recipient.to_string()],
      subject: subject.to_string(),
      text: text.to_string(),
    }
  }

  /// Form pairs in wire order; list values repeat their key once per entry.
  pub fn form_fields(&self) -> Vec<(&'static str, &str)> {
    let mut fields = Vec::with_capacity(3 + self.to.len());
    fields.push((InboundField::From.as_str(), self.from.as_str()));
    for recipient in &self.to {
      fields.push((InboundField::To.as_str(), recipient.as_str()));
    }
    fields.push((InboundField::Subject.as_str(), self.subject.as_str()));
    fields.push((TEXT_FIELD, self.text.as_str()));
    fields
  }
}

/// Anything that can be addressed as a customer.
pub trait Customer {
  fn full_name(&self) -> &str;
  fn email(&self) -> &str;
}

//! Field names Mailgun uses when it posts a received message to a webhook.
//!
//! See <http://documentation.mailgun.net/user_manual.html#receiving-messages>.
//! Nothing in this crate parses inbound payloads; the table exists for receivers
//! built on top of it.

use std::{fmt, str::FromStr};

/// Outbound plain-text body field.
pub const TEXT_FIELD: &str = "text";

/// Basic-auth username the messages API expects.
pub const API_USER: &str = "api";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InboundField {
  Recipient,
  Sender,
  From,
  To,
  Subject,
  BodyText,
  BodyHtml,
  BodyTextStripped,
  BodyHtmlStripped,
  StrippedSignature,
  AttachmentCount,
  AttachmentX,
  Timestamp,
  Token,
  Signature,
  MessageHeaders,
  ContentIdMap,
}

impl InboundField {
  pub const ALL: [InboundField; 17] = [
    InboundField::Recipient,
    InboundField::Sender,
    InboundField::From,
    InboundField::To,
    InboundField::Subject,
    InboundField::BodyText,
    InboundField::BodyHtml,
    InboundField::BodyTextStripped,
    InboundField::BodyHtmlStripped,
    InboundField::StrippedSignature,
    InboundField::AttachmentCount,
    InboundField::AttachmentX,
    InboundField::Timestamp,
    InboundField::Token,
    InboundField::Signature,
    InboundField::MessageHeaders,
    InboundField::ContentIdMap,
  ];

  pub const fn as_str(self) -> &'static str {
    match self {
      InboundField::Recipient => "recipient",
      InboundField::Sender => "sender",
      InboundField::From => "from",
      InboundField::To => "to",
      InboundField::Subject => "subject",
      InboundField::BodyText => "body-plain",
      InboundField::BodyHtml => "body-html",
      InboundField::BodyTextStripped => "stripped-text",
      InboundField::BodyHtmlStripped => "stripped-html",
      InboundField::StrippedSignature => "stripped-signature",
      InboundField::AttachmentCount => "attachment-count",
      InboundField::AttachmentX => "attachment-x",
      InboundField::Timestamp => "timestamp",
      InboundField::Token => "token",
      InboundField::Signature => "signature",
      InboundField::MessageHeaders => "message-headers",
      InboundField::ContentIdMap => "content-id-map",
    }
  }
}

impl fmt::Display for InboundField {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownInboundField(pub String);

impl fmt::Display for UnknownInboundField {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Unknown inbound field: {}", self.0)
  }
}

impl std::error::Error for UnknownInboundField {}

impl FromStr for InboundField {
  type Err = UnknownInboundField;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    InboundField::ALL
      .into_iter()
      .find(|field| field.as_str() == s)
      .ok_or_else(|| UnknownInboundField(s.to_string()))
  }
}

//! Outbound transactional email over the Mailgun messages API.
//!
//! [`Mailer`] owns the provider credentials and default sender identity; every
//! send is one authenticated POST whose raw reply is handed back to the caller.

mod deployment;
mod inbound;
mod service;
mod transport;
mod types;

pub use deployment::{default_sender_name, Deployment, DeploymentEnvironment, DEPLOYMENT_VAR};
pub use inbound::{InboundField, UnknownInboundField, API_USER, TEXT_FIELD};
pub use service::Mailer;
pub use transport::{HttpTransport, MailTransport};
pub use types::{Customer, DisplayAddress, MailerConfig, SendRequest, MAILGUN_API_URL};

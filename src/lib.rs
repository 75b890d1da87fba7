pub mod email;
pub mod error;
pub mod utils;

#[cfg(test)]
mod test_support;

pub use email::Mailer;
pub use error::{MailerError, MailerResult};

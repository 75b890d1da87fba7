use std::error::Error;

pub type MailerResult<T> = Result<T, MailerError>;

#[derive(Debug)]
pub enum MailerError {
  /// The request never produced a provider response (DNS, connect, timeout, body read).
  Transport(reqwest::Error),
  Config(String),
}

impl Error for MailerError {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    match self {
      MailerError::Transport(err) => Some(err),
      MailerError::Config(_) => None,
    }
  }
}

impl std::fmt::Display for MailerError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      MailerError::Transport(err) => write!(f, "Transport Error: {}", err),
      MailerError::Config(msg) => write!(f, "Config Error: {}", msg),
    }
  }
}

impl From<reqwest::Error> for MailerError {
  fn from(err: reqwest::Error) -> Self {
    MailerError::Transport(err)
  }
}

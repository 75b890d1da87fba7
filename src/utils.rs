use std::env;

use crate::{
  email::{Deployment, Mailer, MailerConfig},
  error::{MailerError, MailerResult},
};

pub const API_KEY_VAR: &str = "MAILGUN_API_KEY";
pub const DOMAIN_VAR: &str = "MAILGUN_DOMAIN";
pub const API_URL_VAR: &str = "MAILGUN_API_URL";
pub const FROM_EMAIL_VAR: &str = "MAILER_FROM_EMAIL";
pub const FROM_NAME_VAR: &str = "MAILER_FROM_NAME";

fn required_var(name: &str) -> MailerResult<String> {
  env::var(name).map_err(|_| MailerError::Config(format!("{} environment variable must be set.", name)))
}

pub fn load_config_from_env() -> MailerResult<MailerConfig> {
  let mut config = MailerConfig::new(
    required_var(API_KEY_VAR)?,
    required_var(DOMAIN_VAR)?,
    required_var(FROM_EMAIL_VAR)?,
  );
  config.default_name = env::var(FROM_NAME_VAR).ok();
  config.api_base_url = env::var(API_URL_VAR).ok();

  Ok(config)
}

pub fn init_mailer() -> anyhow::Result<Mailer> {
  let config = load_config_from_env()?;
  let deployment = Deployment::from_env();
  let mailer = Mailer::new(config, &deployment)?;

  tracing::debug!(?deployment, domain = %mailer.domain(), sender = %mailer.default_sender(), "Mailer initialized");
  Ok(mailer)
}

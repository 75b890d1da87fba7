use std::env;

pub const DEPLOYMENT_VAR: &str = "DEPLOYMENT";

pub trait DeploymentEnvironment {
  fn is_production(&self) -> bool;
  fn is_staging(&self) -> bool;
  fn is_development(&self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Deployment {
  Production,
  Staging,
  Development,
  #[default]
  Unknown,
}

impl Deployment {
  pub fn parse(value: &str) -> Self {
    match value.trim().to_ascii_lowercase().as_str() {
      "prod" | "production" => Deployment::Production,
      "staging" | "stage" => Deployment::Staging,
      "dev" | "development" => Deployment::Development,
      _ => Deployment::Unknown,
    }
  }

  /// Reads `DEPLOYMENT`; unset or unrecognized values map to `Unknown`.
  pub fn from_env() -> Self {
    env::var(DEPLOYMENT_VAR)
      .map(|value| Deployment::parse(&value))
      .unwrap_or_default()
  }
}

impl DeploymentEnvironment for Deployment {
  fn is_production(&self) -> bool {
    *self == Deployment::Production
  }

  fn is_staging(&self) -> bool {
    *self == Deployment::Staging
  }

  fn is_development(&self) -> bool {
    *self == Deployment::Development
  }
}

pub fn default_sender_name(deployment: &impl DeploymentEnvironment) -> String {
  let name = if deployment.is_production() {
    "Jack Lope"
  } else if deployment.is_staging() {
    "Jack Staging"
  } else if deployment.is_development() {
    "Jack Dev"
  } else {
    ""
  };

  name.to_string()
}

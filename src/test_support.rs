use crate::email::{Customer, MailerConfig};

pub fn test_config() -> MailerConfig {
  MailerConfig::new("key-123", "example.com", "jack@example.com")
}

pub struct TestCustomer {
  full_name: String,
  email: String,
}

impl TestCustomer {
  pub fn new(full_name: &str, email: &str) -> Self {
    TestCustomer {
      full_name: full_name.to_string(),
      email: email.to_string(),
    }
  }
}

impl Customer for TestCustomer {
  fn full_name(&self) -> &str {
    &self.full_name
  }

  fn email(&self) -> &str {
    &self.email
  }
}

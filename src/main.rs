use std::env;

use anyhow::bail;
use dotenvy::dotenv;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use koko_mailer::utils::init_mailer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  dotenv().ok();

  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let args: Vec<String> = env::args().skip(1).collect();
  let [service, id, subject, body] = args.as_slice() else {
    bail!("usage: koko-mailer <service> <id> <subject> <body>");
  };

  let mailer = init_mailer()?;
  let response = mailer
    .send_internal_email_from_service(service, id, subject, body)
    .await?;

  println!("{}", response);

  Ok(())
}

use std::{
  net::SocketAddr,
  sync::{Arc, Mutex},
};

use axum::{
  extract::{Path, State},
  http::{HeaderMap, StatusCode},
  routing::post,
  Form, Json, Router,
};
use koko_mailer::{
  email::{Customer, Deployment, MailerConfig},
  Mailer, MailerError,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

const VALID_AUTH: &str = "Basic YXBpOmtleS0xMjM=";

#[derive(Debug, Clone)]
struct ReceivedMessage {
  domain: String,
  authorization: Option<String>,
  fields: Vec<(String, String)>,
}

impl ReceivedMessage {
  fn values(&self, key: &str) -> Vec<&str> {
    self
      .fields
      .iter()
      .filter(|(k, _)| k == key)
      .map(|(_, v)| v.as_str())
      .collect()
  }
}

type Inbox = Arc<Mutex<Vec<ReceivedMessage>>>;

async fn messages(
  State(inbox): State<Inbox>,
  Path(domain): Path<String>,
  headers: HeaderMap,
  Form(fields): Form<Vec<(String, String)>>,
) -> (StatusCode, Json<Value>) {
  let authorization = headers
    .get("authorization")
    .and_then(|value| value.to_str().ok())
    .map(str::to_string);
  let authorized = authorization.as_deref() == Some(VALID_AUTH);

  inbox.lock().unwrap().push(ReceivedMessage {
    domain,
    authorization,
    fields,
  });

  if authorized {
    (
      StatusCode::OK,
      Json(json!({ "id": "<20240101.1@example.com>", "message": "Queued. Thank you." })),
    )
  } else {
    (StatusCode::UNAUTHORIZED, Json(json!({ "message": "Invalid private key" })))
  }
}

async fn start_fake_provider() -> (SocketAddr, Inbox) {
  let inbox = Inbox::default();
  let router = Router::new()
    .route("/v2/{domain}/messages", post(messages))
    .with_state(inbox.clone());

  let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
  let addr = listener.local_addr().unwrap();
  tokio::spawn(async move {
    axum::serve(listener, router).await.unwrap();
  });

  (addr, inbox)
}

fn mailer_for(addr: SocketAddr, api_key: &str) -> Mailer {
  let config = MailerConfig::new(api_key, "example.com", "jack@example.com")
    .with_api_base_url(format!("http://{}/v2", addr));
  Mailer::new(config, &Deployment::Production).unwrap()
}

struct Customer42;

impl Customer for Customer42 {
  fn full_name(&self) -> &str {
    "Grace Hopper"
  }

  fn email(&self) -> &str {
    "grace@example.org"
  }
}

#[tokio::test]
async fn test_send_internal_email_posts_form() {
  let (addr, inbox) = start_fake_provider().await;
  let mailer = mailer_for(addr, "key-123");

  let response = mailer
    .send_internal_email_from_service("billing", "42", "Invoice", "body")
    .await
    .unwrap();

  let body: Value = serde_json::from_str(&response).unwrap();
  assert_eq!(body["message"], "Queued. Thank you.");

  let received = inbox.lock().unwrap();
  assert_eq!(received.len(), 1);
  let message = &received[0];
  assert_eq!(message.domain, "example.com");
  assert_eq!(message.authorization.as_deref(), Some(VALID_AUTH));
  assert_eq!(message.values("from"), vec!["Jack Lope <jack@example.com>"]);
  assert_eq!(message.values("to"), vec!["billing-42@example.com"]);
  assert_eq!(message.values("subject"), vec!["Invoice"]);
  assert_eq!(message.values("text"), vec!["body"]);
}

#[tokio::test]
async fn test_send_comment_on_task_uses_synthetic_sender() {
  let (addr, inbox) = start_fake_provider().await;
  let mailer = mailer_for(addr, "key-123");

  mailer
    .send_comment_on_task("tasks", "99", "Bob <bob@x.com>", "hi")
    .await
    .unwrap();

  let received = inbox.lock().unwrap();
  let message = &received[0];
  assert_eq!(message.values("from"), vec!["Jack Lope <tasks-99-comment@example.com>"]);
  assert_eq!(message.values("to"), vec!["Bob <bob@x.com>"]);
  assert!(message.values("subject")[0].contains("99"));
}

#[tokio::test]
async fn test_send_email_to_customer() {
  let (addr, inbox) = start_fake_provider().await;
  let mailer = mailer_for(addr, "key-123");

  mailer
    .send_email_to_customer(&Customer42, "Welcome", "Hello Grace")
    .await
    .unwrap();

  let received = inbox.lock().unwrap();
  assert_eq!(received[0].values("to"), vec!["Grace Hopper <grace@example.org>"]);
}

#[tokio::test]
async fn test_rejected_request_returns_raw_body() {
  let (addr, inbox) = start_fake_provider().await;
  let mailer = mailer_for(addr, "wrong");

  let response = mailer
    .send_email("Jack <jack@example.com>", "ops@example.com", "Subject", "Body")
    .await
    .unwrap();

  assert_eq!(response, r#"{"message":"Invalid private key"}"#);
  assert_eq!(inbox.lock().unwrap()[0].authorization.as_deref(), Some("Basic YXBpOndyb25n"));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
  let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
  let addr = listener.local_addr().unwrap();
  drop(listener);

  let mailer = mailer_for(addr, "key-123");
  let result = mailer
    .send_email("Jack <jack@example.com>", "ops@example.com", "Subject", "Body")
    .await;

  assert!(matches!(result, Err(MailerError::Transport(_))));
}

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use serde_json::Value;
use wedding_rsvp::{
    api::router::create_router,
    config::Config,
    domain::{models::email::OutboundEmail, ports::Mailer},
    error::AppError,
    infra::translations::TranslationCatalog,
    state::AppState,
};

/// Records every dispatched email instead of talking to a relay.
#[derive(Default)]
pub struct CapturingMailer {
    sent: Mutex<Vec<OutboundEmail>>,
}

impl CapturingMailer {
    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for CapturingMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), AppError> {
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}

pub struct FailingMailer;

#[async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, _email: &OutboundEmail) -> Result<(), AppError> {
        Err(AppError::InternalWithMsg("SMTP connection refused".to_string()))
    }
}

pub fn test_config() -> Config {
    Config {
        port: 0,
        smtp_host: "smtp.test.local".to_string(),
        smtp_port: 587,
        smtp_secure: false,
        smtp_username: "mailer".to_string(),
        smtp_password: "secret".to_string(),
        email_from: "Wedding RSVP Mailer <rsvp@example.com>".to_string(),
        email_to: "couple@example.com".to_string(),
    }
}

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub state: Arc<AppState>,
    pub outbox: Arc<CapturingMailer>,
}

impl TestApp {
    pub fn new() -> Self {
        let outbox = Arc::new(CapturingMailer::default());
        let state = Arc::new(AppState {
            config: test_config(),
            mailer: outbox.clone(),
            translations: Arc::new(
                TranslationCatalog::load().expect("Failed to parse translation bundles"),
            ),
        });
        let router = create_router(state.clone());

        Self {
            router,
            state,
            outbox,
        }
    }
}

/// App whose mail dispatch always fails, for the server-fault path.
#[allow(dead_code)]
pub fn failing_app() -> Router {
    let state = Arc::new(AppState {
        config: test_config(),
        mailer: Arc::new(FailingMailer),
        translations: Arc::new(
            TranslationCatalog::load().expect("Failed to parse translation bundles"),
        ),
    });
    create_router(state)
}

#[allow(dead_code)]
pub async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Serves the router on an ephemeral local port for tests that need a real
/// socket (the reqwest-backed client cannot use `oneshot`).
#[allow(dead_code)]
pub async fn spawn_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

// tests/support/helpers.rs
use std::sync::Arc;

use axum::Router;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use conduit_core::application::{
    commands::{articles::CreateArticleCommand, users::RegisterUserCommand},
    dto::{ArticleDto, AuthenticatedUser, UserDto},
    services::ApplicationServices,
};
use conduit_core::domain::article::RandomSlugGenerator;
use conduit_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use tower::util::ServiceExt as _;

use super::mocks::{
    InMemoryStore, PlainPasswordHasher, SequenceSuffix, SteppingClock, StubTokenManager,
};

pub struct TestApp {
    pub store: Arc<InMemoryStore>,
    pub services: Arc<ApplicationServices>,
    pub router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_slug_attempts(5)
    }

    pub fn with_slug_attempts(max_attempts: u32) -> Self {
        let store = Arc::new(InMemoryStore::default());
        let slugs = RandomSlugGenerator::new(Arc::new(SequenceSuffix::default()), max_attempts);

        let services = Arc::new(ApplicationServices::new(
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            Arc::new(PlainPasswordHasher),
            Arc::new(StubTokenManager),
            Arc::new(SteppingClock::default()),
            Arc::new(slugs),
        ));

        let state = HttpState {
            services: Arc::clone(&services),
        };
        let router = build_router(state, &["http://localhost:3000".to_string()]);

        Self {
            store,
            services,
            router,
        }
    }

    /// Registers `name` with `<name>@example.com` / `password123`.
    pub async fn register(&self, name: &str) -> UserDto {
        self.services
            .user_commands
            .register(RegisterUserCommand {
                username: name.into(),
                email: format!("{name}@example.com"),
                password: "password123".into(),
            })
            .await
            .expect("register test user")
    }

    pub async fn actor(&self, name: &str) -> AuthenticatedUser {
        let user = self.register(name).await;
        self.services
            .authenticate(&user.token)
            .await
            .expect("authenticate test user")
    }

    pub async fn publish(&self, actor: &AuthenticatedUser, title: &str, tags: &[&str]) -> ArticleDto {
        self.services
            .article_commands
            .create_article(
                actor,
                CreateArticleCommand {
                    title: title.into(),
                    description: format!("About {title}"),
                    body: format!("All about {title}"),
                    tag_list: tags.iter().map(|t| (*t).to_string()).collect(),
                },
            )
            .await
            .expect("create test article")
    }

    /// Sends one request through the router; empty bodies come back as `Null`.
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Token {token}"));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("read body");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("expected a JSON body")
        };
        (status, json)
    }
}

/// Messages of a `{"errors": {"body": [...]}}` envelope.
pub fn error_messages(body: &Value) -> Vec<String> {
    body["errors"]["body"]
        .as_array()
        .expect("error envelope")
        .iter()
        .map(|m| m.as_str().expect("string message").to_string())
        .collect()
}

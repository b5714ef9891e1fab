#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use devconnect::{
    AppState,
    auth::AUTH_HEADER,
    config::{Config, DatabaseConfig, JwtConfig, ObservabilityConfig, ServerConfig},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use temp_dir::TempDir;
use tower::ServiceExt;

pub const SECRET: &str = "test_secret_key_minimum_32_characters_long";

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    _dir: TempDir,
}

pub async fn setup() -> anyhow::Result<TestApp> {
    let dir = TempDir::new()?;
    let url = format!("sqlite:{}", dir.child("db.sqlite3").display());

    let config = Config {
        server: ServerConfig {
            host: "127.0.0.1".to_owned(),
            port: 5000,
        },
        database: DatabaseConfig {
            url: url.to_owned(),
            max_connections: 5,
        },
        jwt: JwtConfig {
            secret: SECRET.to_owned(),
        },
        observability: ObservabilityConfig::default(),
    };

    let pool = devconnect::db::create_pool(&url, config.database.max_connections).await?;
    devconnect::db::migrate(&pool).await?;

    let state = AppState::new(config, pool);

    Ok(TestApp {
        router: devconnect::app(state.clone()),
        state,
        _dir: dir,
    })
}

impl TestApp {
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> anyhow::Result<(StatusCode, Value)> {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(token) = token {
            builder = builder.header(AUTH_HEADER, token);
        }

        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&body)?))?,
            None => builder.body(Body::empty())?,
        };

        let response = self.router.clone().oneshot(request).await?;
        let status = response.status();
        let bytes = response.into_body().collect().await?.to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)?
        };

        Ok((status, value))
    }

    /// Signs `name` up with `{name}@devconnect.localhost` and returns the token.
    pub async fn signup(&self, name: &str) -> anyhow::Result<String> {
        let (status, body) = self
            .send(
                Method::POST,
                "/api/users",
                None,
                Some(json!({
                    "name": name,
                    "email": format!("{name}@devconnect.localhost"),
                    "password": "my_password",
                })),
            )
            .await?;

        assert_eq!(status, StatusCode::OK, "{body}");

        Ok(body["token"]
            .as_str()
            .ok_or_else(|| anyhow::anyhow!("no token in {body}"))?
            .to_owned())
    }

    /// Account id behind a token.
    pub fn user_id(&self, token: &str) -> anyhow::Result<String> {
        Ok(self.state.tokens.verify(token)?)
    }
}

/// First error message of an error envelope.
pub fn first_msg(body: &Value) -> &str {
    body["errors"][0]["msg"].as_str().unwrap_or_default()
}

use axum::http::{Method, StatusCode};
use devconnect::auth::TOKEN_LIFETIME;
use serde_json::json;
use time::OffsetDateTime;

mod helpers;

use helpers::first_msg;

#[tokio::test]
async fn signup_returns_a_usable_token() -> anyhow::Result<()> {
    let app = helpers::setup().await?;
    let token = app.signup("john").await?;

    let (status, body) = app.send(Method::GET, "/api/auth", Some(&token), None).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "john");
    assert_eq!(body["email"], "john@devconnect.localhost");
    assert!(body["date"].is_i64());
    assert!(body.get("password").is_none());

    Ok(())
}

#[tokio::test]
async fn duplicate_signup_is_rejected() -> anyhow::Result<()> {
    let app = helpers::setup().await?;
    app.signup("john").await?;

    let (status, body) = app
        .send(
            Method::POST,
            "/api/users",
            None,
            Some(json!({
                "name": "Johnny",
                "email": "john@devconnect.localhost",
                "password": "other_password",
            })),
        )
        .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(first_msg(&body), "User already exists");

    Ok(())
}

#[tokio::test]
async fn signup_reports_every_invalid_field() -> anyhow::Result<()> {
    let app = helpers::setup().await?;

    let (status, body) = app
        .send(
            Method::POST,
            "/api/users",
            None,
            Some(json!({ "email": "not-an-email", "password": "ab" })),
        )
        .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({
            "errors": [
                { "msg": "Email is required", "param": "email" },
                { "msg": "Name is required", "param": "name" },
                { "msg": "Password length must be at least three characters.", "param": "password" },
            ]
        })
    );

    Ok(())
}

#[tokio::test]
async fn malformed_body_is_a_bad_request() -> anyhow::Result<()> {
    let app = helpers::setup().await?;

    let (status, body) = app
        .send(Method::POST, "/api/users", None, Some(json!("not an object")))
        .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(!first_msg(&body).is_empty());

    Ok(())
}

#[tokio::test]
async fn login_checks_credentials() -> anyhow::Result<()> {
    let app = helpers::setup().await?;
    let signup_token = app.signup("john").await?;

    let (status, body) = app
        .send(
            Method::POST,
            "/api/auth",
            None,
            Some(json!({ "email": "john@devconnect.localhost", "password": "wrong" })),
        )
        .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(first_msg(&body), "Invalid credentials");

    let (status, body) = app
        .send(
            Method::POST,
            "/api/auth",
            None,
            Some(json!({ "email": "nobody@devconnect.localhost", "password": "my_password" })),
        )
        .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(first_msg(&body), "Invalid credentials");

    let (status, body) = app
        .send(
            Method::POST,
            "/api/auth",
            None,
            Some(json!({ "email": "john@devconnect.localhost", "password": "my_password" })),
        )
        .await?;
    assert_eq!(status, StatusCode::OK);
    let token = body["token"].as_str().unwrap_or_default();
    assert_eq!(app.user_id(token)?, app.user_id(&signup_token)?);

    Ok(())
}

#[tokio::test]
async fn missing_token_is_denied() -> anyhow::Result<()> {
    let app = helpers::setup().await?;

    let (status, body) = app.send(Method::GET, "/api/auth", None, None).await?;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(first_msg(&body), "No token, authorization denied");

    Ok(())
}

#[tokio::test]
async fn forged_and_expired_tokens_are_invalid() -> anyhow::Result<()> {
    let app = helpers::setup().await?;
    let token = app.signup("john").await?;
    let id = app.user_id(&token)?;

    let forged = devconnect::auth::TokenCodec::new("another_secret_key_minimum_32_characters")
        .issue(&id)?;
    let expired = app.state.tokens.issue_at(
        &id,
        OffsetDateTime::now_utc().unix_timestamp() - TOKEN_LIFETIME.as_secs() as i64 - 1,
    )?;

    for candidate in ["garbage", forged.as_str(), expired.as_str()] {
        let (status, body) = app
            .send(Method::GET, "/api/auth", Some(candidate), None)
            .await?;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(first_msg(&body), "Token is invalid");
    }

    Ok(())
}

#[tokio::test]
async fn token_for_unknown_account_is_invalid() -> anyhow::Result<()> {
    let app = helpers::setup().await?;
    let token = app.state.tokens.issue("01ARZ3NDEKTSV4RRFFQ69G5FAV")?;

    let (status, body) = app.send(Method::GET, "/api/posts", Some(&token), None).await?;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(first_msg(&body), "Token is invalid");

    Ok(())
}

#[tokio::test]
async fn health_endpoints() -> anyhow::Result<()> {
    let app = helpers::setup().await?;

    let (status, body) = app.send(Method::GET, "/health", None, None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = app.send(Method::GET, "/ready", None, None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");

    Ok(())
}

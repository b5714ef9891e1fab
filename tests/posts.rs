use axum::http::{Method, StatusCode};
use serde_json::json;

mod helpers;

use helpers::first_msg;

#[tokio::test]
async fn posts_are_listed_newest_first() -> anyhow::Result<()> {
    let app = helpers::setup().await?;
    let john = app.signup("john").await?;
    let jane = app.signup("jane").await?;

    let (status, first) = app
        .send(Method::POST, "/api/posts", Some(&john), Some(json!({ "text": "first" })))
        .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["name"], "john");
    assert_eq!(first["user"], app.user_id(&john)?);
    assert_eq!(first["likes"], json!([]));

    app.send(Method::POST, "/api/posts", Some(&jane), Some(json!({ "text": "second" })))
        .await?;

    let (status, body) = app.send(Method::GET, "/api/posts", Some(&john), None).await?;
    assert_eq!(status, StatusCode::OK);
    let texts: Vec<&str> = body
        .as_array()
        .map(|posts| posts.iter().filter_map(|p| p["text"].as_str()).collect())
        .unwrap_or_default();
    assert_eq!(texts, vec!["second", "first"]);

    let uri = format!("/api/posts/{}", first["id"].as_str().unwrap_or_default());
    let (status, body) = app.send(Method::GET, &uri, Some(&jane), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["text"], "first");

    Ok(())
}

#[tokio::test]
async fn post_text_is_required() -> anyhow::Result<()> {
    let app = helpers::setup().await?;
    let john = app.signup("john").await?;

    let (status, body) = app
        .send(Method::POST, "/api/posts", Some(&john), Some(json!({})))
        .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["msg"], "text is required");
    assert_eq!(body["errors"][0]["param"], "text");

    Ok(())
}

#[tokio::test]
async fn only_the_author_deletes_a_post() -> anyhow::Result<()> {
    let app = helpers::setup().await?;
    let john = app.signup("john").await?;
    let jane = app.signup("jane").await?;

    let (_, post) = app
        .send(Method::POST, "/api/posts", Some(&john), Some(json!({ "text": "mine" })))
        .await?;
    let uri = format!("/api/posts/{}", post["id"].as_str().unwrap_or_default());

    let (status, body) = app
        .send(Method::DELETE, "/api/posts/01ARZ3NDEKTSV4RRFFQ69G5FAV", Some(&jane), None)
        .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(first_msg(&body), "No such post");

    let (status, body) = app.send(Method::DELETE, &uri, Some(&jane), None).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(first_msg(&body), "Unauthorized operation");

    let (status, body) = app.send(Method::DELETE, &uri, Some(&john), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], post["id"]);

    let (status, body) = app.send(Method::GET, &uri, Some(&john), None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(first_msg(&body), "No such post");

    Ok(())
}

#[tokio::test]
async fn like_and_unlike_toggle_once() -> anyhow::Result<()> {
    let app = helpers::setup().await?;
    let john = app.signup("john").await?;
    let jane = app.signup("jane").await?;

    let (_, post) = app
        .send(Method::POST, "/api/posts", Some(&john), Some(json!({ "text": "like me" })))
        .await?;
    let id = post["id"].as_str().unwrap_or_default().to_owned();
    let like = format!("/api/posts/like/{id}");
    let unlike = format!("/api/posts/unlike/{id}");

    let (status, body) = app.send(Method::PUT, &unlike, Some(&jane), None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(first_msg(&body), "User has not liked the post");

    let (status, body) = app.send(Method::PUT, &like, Some(&jane), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(1));
    assert_eq!(body[0]["user"], app.user_id(&jane)?);

    let (status, body) = app.send(Method::PUT, &like, Some(&jane), None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(first_msg(&body), "Post already liked by the user");

    // Authors may like their own posts.
    let (status, body) = app.send(Method::PUT, &like, Some(&john), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["user"], app.user_id(&john)?);
    assert_eq!(body.as_array().map(Vec::len), Some(2));

    let (status, body) = app.send(Method::PUT, &unlike, Some(&jane), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(1));
    assert_eq!(body[0]["user"], app.user_id(&john)?);

    Ok(())
}

#[tokio::test]
async fn comments_are_removed_by_their_author_only() -> anyhow::Result<()> {
    let app = helpers::setup().await?;
    let john = app.signup("john").await?;
    let jane = app.signup("jane").await?;

    let (_, post) = app
        .send(Method::POST, "/api/posts", Some(&john), Some(json!({ "text": "discuss" })))
        .await?;
    let id = post["id"].as_str().unwrap_or_default().to_owned();

    let (status, body) = app
        .send(
            Method::POST,
            &format!("/api/posts/comment/{id}"),
            Some(&jane),
            Some(json!({ "text": "" })),
        )
        .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(first_msg(&body), "Text is required to create a comment");

    let (status, comments) = app
        .send(
            Method::POST,
            &format!("/api/posts/comment/{id}"),
            Some(&jane),
            Some(json!({ "text": "nice" })),
        )
        .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(comments[0]["name"], "jane");
    assert_eq!(comments[0]["text"], "nice");
    let comment_id = comments[0]["id"].as_str().unwrap_or_default().to_owned();

    let (status, body) = app
        .send(
            Method::DELETE,
            &format!("/api/posts/{id}/comment/01ARZ3NDEKTSV4RRFFQ69G5FAV"),
            Some(&jane),
            None,
        )
        .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(first_msg(&body), "No such comment found in the post");

    // The post author does not own the comment.
    let uri = format!("/api/posts/{id}/comment/{comment_id}");
    let (status, body) = app.send(Method::DELETE, &uri, Some(&john), None).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(first_msg(&body), "Unauthorized operation");

    let (status, body) = app.send(Method::DELETE, &uri, Some(&jane), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    Ok(())
}

use std::collections::HashMap;

use devconnect_shared::authorize;
use serde::Deserialize;
use sqlx::SqlitePool;
use time::OffsetDateTime;
use ulid::Ulid;
use validator::Validate;

use crate::repository::{self, CommentRow, PostRow};
use crate::{Comment, Like, Post};

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct CreateInput {
    #[validate(length(min = 1, message = "text is required"))]
    pub text: String,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct CommentInput {
    #[validate(length(min = 1, message = "Text is required to create a comment"))]
    pub text: String,
}

#[derive(Clone)]
pub struct Command(pub SqlitePool);

impl Command {
    /// Publishes a post authored by `user_id`; `name` is copied onto the post.
    pub async fn create(
        &self,
        user_id: impl Into<String>,
        name: impl Into<String>,
        input: CreateInput,
    ) -> devconnect_shared::Result<Post> {
        input.validate()?;

        let row = PostRow {
            id: Ulid::new().to_string(),
            user_id: user_id.into(),
            name: name.into(),
            text: input.text,
            created_at: OffsetDateTime::now_utc().unix_timestamp(),
        };
        repository::create_post(&self.0, &row).await?;

        tracing::info!(post_id = %row.id, user_id = %row.user_id, "post created");

        Ok(Post::from_row(row, vec![], vec![]))
    }

    pub async fn list(&self) -> devconnect_shared::Result<Vec<Post>> {
        let rows = repository::list_posts(&self.0).await?;
        let ids: Vec<String> = rows.iter().map(|row| row.id.to_owned()).collect();

        let mut likes: HashMap<String, Vec<Like>> = HashMap::new();
        for like in repository::list_likes(&self.0, ids.to_owned()).await? {
            likes
                .entry(like.post_id.to_owned())
                .or_default()
                .push(like.into());
        }

        let mut comments: HashMap<String, Vec<Comment>> = HashMap::new();
        for comment in repository::list_comments(&self.0, ids).await? {
            comments
                .entry(comment.post_id.to_owned())
                .or_default()
                .push(comment.into());
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let post_likes = likes.remove(&row.id).unwrap_or_default();
                let post_comments = comments.remove(&row.id).unwrap_or_default();
                Post::from_row(row, post_likes, post_comments)
            })
            .collect())
    }

    pub async fn find(&self, id: impl Into<String>) -> devconnect_shared::Result<Option<Post>> {
        let Some(row) = repository::find_post(&self.0, id.into()).await? else {
            return Ok(None);
        };

        let likes = self.likes(&row.id).await?;
        let comments = self.comments(&row.id).await?;

        Ok(Some(Post::from_row(row, likes, comments)))
    }

    /// Like [`Command::find`] but a missing post is an error.
    pub async fn get(&self, id: impl Into<String>) -> devconnect_shared::Result<Post> {
        match self.find(id).await? {
            Some(post) => Ok(post),
            None => devconnect_shared::not_found!("No such post"),
        }
    }

    /// Deletes the post if `user_id` authored it and returns what was deleted.
    pub async fn delete(
        &self,
        user_id: &str,
        id: impl Into<String>,
    ) -> devconnect_shared::Result<Post> {
        let post = self.get(id).await?;
        authorize(user_id, &post)?;

        repository::delete_post(&self.0, post.id.to_owned()).await?;

        tracing::info!(post_id = %post.id, user_id, "post deleted");

        Ok(post)
    }

    /// Any authenticated user may like any post, once.
    pub async fn like(
        &self,
        user_id: &str,
        id: impl Into<String>,
    ) -> devconnect_shared::Result<Vec<Like>> {
        let Some(post) = repository::find_post(&self.0, id.into()).await? else {
            devconnect_shared::not_found!("No such post");
        };

        let now = OffsetDateTime::now_utc().unix_timestamp();
        if !repository::insert_like(&self.0, post.id.to_owned(), user_id.to_owned(), now).await? {
            devconnect_shared::bail!("Post already liked by the user");
        }

        self.likes(&post.id).await
    }

    pub async fn unlike(
        &self,
        user_id: &str,
        id: impl Into<String>,
    ) -> devconnect_shared::Result<Vec<Like>> {
        let Some(post) = repository::find_post(&self.0, id.into()).await? else {
            devconnect_shared::not_found!("No such post");
        };

        if !repository::delete_like(&self.0, post.id.to_owned(), user_id.to_owned()).await? {
            devconnect_shared::bail!("User has not liked the post");
        }

        self.likes(&post.id).await
    }

    /// Adds a comment signed with `name` and returns the post's comments.
    pub async fn comment(
        &self,
        user_id: impl Into<String>,
        name: impl Into<String>,
        id: impl Into<String>,
        input: CommentInput,
    ) -> devconnect_shared::Result<Vec<Comment>> {
        input.validate()?;

        let Some(post) = repository::find_post(&self.0, id.into()).await? else {
            devconnect_shared::not_found!("No such post");
        };

        let row = CommentRow {
            id: Ulid::new().to_string(),
            post_id: post.id.to_owned(),
            user_id: user_id.into(),
            name: name.into(),
            text: input.text,
            created_at: OffsetDateTime::now_utc().unix_timestamp(),
        };
        repository::create_comment(&self.0, &row).await?;

        self.comments(&post.id).await
    }

    /// Removes a comment; only its own author may do so.
    pub async fn delete_comment(
        &self,
        user_id: &str,
        id: impl Into<String>,
        comment_id: impl Into<String>,
    ) -> devconnect_shared::Result<Vec<Comment>> {
        let Some(post) = repository::find_post(&self.0, id.into()).await? else {
            devconnect_shared::not_found!("No such post");
        };

        let Some(comment) =
            repository::find_comment(&self.0, post.id.to_owned(), comment_id.into()).await?
        else {
            devconnect_shared::not_found!("No such comment found in the post");
        };

        let comment = Comment::from(comment);
        authorize(user_id, &comment)?;

        repository::delete_comment(&self.0, comment.id).await?;

        self.comments(&post.id).await
    }

    /// Removes every post authored by `user_id`.
    pub async fn delete_by_user(&self, user_id: impl Into<String>) -> devconnect_shared::Result<u64> {
        repository::delete_posts_of_user(&self.0, user_id.into()).await
    }

    async fn likes(&self, post_id: &str) -> devconnect_shared::Result<Vec<Like>> {
        Ok(repository::list_likes(&self.0, vec![post_id.to_owned()])
            .await?
            .into_iter()
            .map(Like::from)
            .collect())
    }

    async fn comments(&self, post_id: &str) -> devconnect_shared::Result<Vec<Comment>> {
        Ok(repository::list_comments(&self.0, vec![post_id.to_owned()])
            .await?
            .into_iter()
            .map(Comment::from)
            .collect())
    }
}

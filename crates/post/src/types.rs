use devconnect_shared::Ownable;
use serde::Serialize;

use crate::repository::{CommentRow, LikeRow, PostRow};

#[derive(Debug, Clone, Serialize)]
pub struct Like {
    pub user: String,
    #[serde(rename = "date")]
    pub created_at: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Comment {
    pub id: String,
    pub user: String,
    pub name: String,
    pub text: String,
    #[serde(rename = "date")]
    pub created_at: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Post {
    pub id: String,
    pub user: String,
    pub name: String,
    pub text: String,
    pub likes: Vec<Like>,
    pub comments: Vec<Comment>,
    #[serde(rename = "date")]
    pub created_at: i64,
}

impl Ownable for Post {
    fn owner(&self) -> &str {
        &self.user
    }
}

// A comment belongs to whoever wrote it, not to the post author.
impl Ownable for Comment {
    fn owner(&self) -> &str {
        &self.user
    }
}

impl From<LikeRow> for Like {
    fn from(row: LikeRow) -> Self {
        Self {
            user: row.user_id,
            created_at: row.created_at,
        }
    }
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        Self {
            id: row.id,
            user: row.user_id,
            name: row.name,
            text: row.text,
            created_at: row.created_at,
        }
    }
}

impl Post {
    pub(crate) fn from_row(row: PostRow, likes: Vec<Like>, comments: Vec<Comment>) -> Self {
        Self {
            id: row.id,
            user: row.user_id,
            name: row.name,
            text: row.text,
            likes,
            comments,
            created_at: row.created_at,
        }
    }
}

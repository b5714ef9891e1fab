use sea_query::{ColumnDef, Index, Table};

use crate::sqlite_operation;
use crate::table::{Post, PostComment, PostLike};

sqlite_operation!(
    CreateTable,
    Table::create()
        .table(Post::Table)
        .col(
            ColumnDef::new(Post::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(
            ColumnDef::new(Post::UserId)
                .string()
                .not_null()
                .string_len(26),
        )
        .col(ColumnDef::new(Post::Name).string().not_null())
        .col(ColumnDef::new(Post::Text).text().not_null())
        .col(ColumnDef::new(Post::CreatedAt).big_integer().not_null())
        .to_owned(),
    Table::drop().table(Post::Table).to_owned()
);

sqlite_operation!(
    CreateIdx1,
    Index::create()
        .name("idx_post_user_id")
        .table(Post::Table)
        .col(Post::UserId)
        .to_owned(),
    Index::drop()
        .name("idx_post_user_id")
        .table(Post::Table)
        .to_owned()
);

// One row per (post, user); the primary key is what rejects a second like.
sqlite_operation!(
    CreateLikeTable,
    Table::create()
        .table(PostLike::Table)
        .col(
            ColumnDef::new(PostLike::PostId)
                .string()
                .not_null()
                .string_len(26),
        )
        .col(
            ColumnDef::new(PostLike::UserId)
                .string()
                .not_null()
                .string_len(26),
        )
        .col(ColumnDef::new(PostLike::CreatedAt).big_integer().not_null())
        .primary_key(
            Index::create()
                .col(PostLike::PostId)
                .col(PostLike::UserId),
        )
        .to_owned(),
    Table::drop().table(PostLike::Table).to_owned()
);

sqlite_operation!(
    CreateCommentTable,
    Table::create()
        .table(PostComment::Table)
        .col(
            ColumnDef::new(PostComment::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(
            ColumnDef::new(PostComment::PostId)
                .string()
                .not_null()
                .string_len(26),
        )
        .col(
            ColumnDef::new(PostComment::UserId)
                .string()
                .not_null()
                .string_len(26),
        )
        .col(ColumnDef::new(PostComment::Name).string().not_null())
        .col(ColumnDef::new(PostComment::Text).text().not_null())
        .col(
            ColumnDef::new(PostComment::CreatedAt)
                .big_integer()
                .not_null(),
        )
        .to_owned(),
    Table::drop().table(PostComment::Table).to_owned()
);

sqlite_operation!(
    CreateCommentIdx1,
    Index::create()
        .name("idx_post_comment_post_id")
        .table(PostComment::Table)
        .col(PostComment::PostId)
        .to_owned(),
    Index::drop()
        .name("idx_post_comment_post_id")
        .table(PostComment::Table)
        .to_owned()
);

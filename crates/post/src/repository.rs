use devconnect_db::table::{Post, PostComment, PostLike};
use sea_query::{Expr, ExprTrait, OnConflict, Order, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, prelude::FromRow};

#[derive(FromRow)]
pub struct PostRow {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub text: String,
    pub created_at: i64,
}

#[derive(FromRow)]
pub struct LikeRow {
    pub post_id: String,
    pub user_id: String,
    pub created_at: i64,
}

#[derive(FromRow)]
pub struct CommentRow {
    pub id: String,
    pub post_id: String,
    pub user_id: String,
    pub name: String,
    pub text: String,
    pub created_at: i64,
}

pub(crate) async fn create_post(pool: &SqlitePool, row: &PostRow) -> devconnect_shared::Result<()> {
    let statement = Query::insert()
        .into_table(Post::Table)
        .columns([
            Post::Id,
            Post::UserId,
            Post::Name,
            Post::Text,
            Post::CreatedAt,
        ])
        .values_panic([
            row.id.to_owned().into(),
            row.user_id.to_owned().into(),
            row.name.to_owned().into(),
            row.text.to_owned().into(),
            row.created_at.into(),
        ])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}

pub(crate) async fn find_post(
    pool: &SqlitePool,
    id: String,
) -> devconnect_shared::Result<Option<PostRow>> {
    let statement = Query::select()
        .columns([
            Post::Id,
            Post::UserId,
            Post::Name,
            Post::Text,
            Post::CreatedAt,
        ])
        .from(Post::Table)
        .and_where(Expr::col(Post::Id).eq(id))
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, PostRow, _>(&sql, values)
        .fetch_optional(pool)
        .await?)
}

/// All posts, newest first.
pub(crate) async fn list_posts(pool: &SqlitePool) -> devconnect_shared::Result<Vec<PostRow>> {
    let statement = Query::select()
        .columns([
            Post::Id,
            Post::UserId,
            Post::Name,
            Post::Text,
            Post::CreatedAt,
        ])
        .from(Post::Table)
        .order_by(Post::CreatedAt, Order::Desc)
        .order_by_expr(Expr::cust("rowid"), Order::Desc)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, PostRow, _>(&sql, values)
        .fetch_all(pool)
        .await?)
}

/// Likes of the given posts, most recent first.
pub(crate) async fn list_likes(
    pool: &SqlitePool,
    post_ids: Vec<String>,
) -> devconnect_shared::Result<Vec<LikeRow>> {
    let statement = Query::select()
        .columns([PostLike::PostId, PostLike::UserId, PostLike::CreatedAt])
        .from(PostLike::Table)
        .and_where(Expr::col(PostLike::PostId).is_in(post_ids))
        .order_by_expr(Expr::cust("rowid"), Order::Desc)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, LikeRow, _>(&sql, values)
        .fetch_all(pool)
        .await?)
}

/// Comments of the given posts, most recent first.
pub(crate) async fn list_comments(
    pool: &SqlitePool,
    post_ids: Vec<String>,
) -> devconnect_shared::Result<Vec<CommentRow>> {
    let statement = Query::select()
        .columns([
            PostComment::Id,
            PostComment::PostId,
            PostComment::UserId,
            PostComment::Name,
            PostComment::Text,
            PostComment::CreatedAt,
        ])
        .from(PostComment::Table)
        .and_where(Expr::col(PostComment::PostId).is_in(post_ids))
        .order_by_expr(Expr::cust("rowid"), Order::Desc)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, CommentRow, _>(&sql, values)
        .fetch_all(pool)
        .await?)
}

/// Removes the post together with its likes and comments.
pub(crate) async fn delete_post(pool: &SqlitePool, id: String) -> devconnect_shared::Result<()> {
    let statements = [
        Query::delete()
            .from_table(PostLike::Table)
            .and_where(Expr::col(PostLike::PostId).eq(id.to_owned()))
            .to_owned(),
        Query::delete()
            .from_table(PostComment::Table)
            .and_where(Expr::col(PostComment::PostId).eq(id.to_owned()))
            .to_owned(),
        Query::delete()
            .from_table(Post::Table)
            .and_where(Expr::col(Post::Id).eq(id))
            .to_owned(),
    ];

    let mut tx = pool.begin().await?;
    for statement in statements {
        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&mut *tx).await?;
    }
    tx.commit().await?;

    Ok(())
}

/// Removes every post authored by `user_id`, with their likes and comments.
pub(crate) async fn delete_posts_of_user(
    pool: &SqlitePool,
    user_id: String,
) -> devconnect_shared::Result<u64> {
    let owned_posts = Query::select()
        .column(Post::Id)
        .from(Post::Table)
        .and_where(Expr::col(Post::UserId).eq(user_id.to_owned()))
        .to_owned();

    let children = [
        Query::delete()
            .from_table(PostLike::Table)
            .and_where(Expr::col(PostLike::PostId).in_subquery(owned_posts.to_owned()))
            .to_owned(),
        Query::delete()
            .from_table(PostComment::Table)
            .and_where(Expr::col(PostComment::PostId).in_subquery(owned_posts))
            .to_owned(),
    ];

    let mut tx = pool.begin().await?;
    for statement in children {
        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&mut *tx).await?;
    }

    let (sql, values) = Query::delete()
        .from_table(Post::Table)
        .and_where(Expr::col(Post::UserId).eq(user_id))
        .to_owned()
        .build_sqlx(SqliteQueryBuilder);
    let deleted = sqlx::query_with(&sql, values)
        .execute(&mut *tx)
        .await?
        .rows_affected();
    tx.commit().await?;

    Ok(deleted)
}

/// Inserts the like unless `user_id` already liked the post.
///
/// Returns `false` when the like already existed. The check and the insert
/// are one statement, so concurrent likes cannot produce a duplicate.
pub(crate) async fn insert_like(
    pool: &SqlitePool,
    post_id: String,
    user_id: String,
    created_at: i64,
) -> devconnect_shared::Result<bool> {
    let statement = Query::insert()
        .into_table(PostLike::Table)
        .columns([PostLike::PostId, PostLike::UserId, PostLike::CreatedAt])
        .values_panic([post_id.into(), user_id.into(), created_at.into()])
        .on_conflict(
            OnConflict::columns([PostLike::PostId, PostLike::UserId])
                .do_nothing()
                .to_owned(),
        )
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let result = sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(result.rows_affected() == 1)
}

/// Returns `false` when there was no like to remove.
pub(crate) async fn delete_like(
    pool: &SqlitePool,
    post_id: String,
    user_id: String,
) -> devconnect_shared::Result<bool> {
    let statement = Query::delete()
        .from_table(PostLike::Table)
        .and_where(Expr::col(PostLike::PostId).eq(post_id))
        .and_where(Expr::col(PostLike::UserId).eq(user_id))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let result = sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(result.rows_affected() > 0)
}

pub(crate) async fn create_comment(
    pool: &SqlitePool,
    row: &CommentRow,
) -> devconnect_shared::Result<()> {
    let statement = Query::insert()
        .into_table(PostComment::Table)
        .columns([
            PostComment::Id,
            PostComment::PostId,
            PostComment::UserId,
            PostComment::Name,
            PostComment::Text,
            PostComment::CreatedAt,
        ])
        .values_panic([
            row.id.to_owned().into(),
            row.post_id.to_owned().into(),
            row.user_id.to_owned().into(),
            row.name.to_owned().into(),
            row.text.to_owned().into(),
            row.created_at.into(),
        ])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}

/// Looks the comment up inside one post only.
pub(crate) async fn find_comment(
    pool: &SqlitePool,
    post_id: String,
    id: String,
) -> devconnect_shared::Result<Option<CommentRow>> {
    let statement = Query::select()
        .columns([
            PostComment::Id,
            PostComment::PostId,
            PostComment::UserId,
            PostComment::Name,
            PostComment::Text,
            PostComment::CreatedAt,
        ])
        .from(PostComment::Table)
        .and_where(Expr::col(PostComment::Id).eq(id))
        .and_where(Expr::col(PostComment::PostId).eq(post_id))
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, CommentRow, _>(&sql, values)
        .fetch_optional(pool)
        .await?)
}

pub(crate) async fn delete_comment(pool: &SqlitePool, id: String) -> devconnect_shared::Result<()> {
    let statement = Query::delete()
        .from_table(PostComment::Table)
        .and_where(Expr::col(PostComment::Id).eq(id))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}

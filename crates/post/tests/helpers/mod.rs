use std::{path::PathBuf, str::FromStr};

use devconnect_post::{Command, CreateInput};
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<Command> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    devconnect_db::migrator()?
        .run(&mut *conn, &Plan::apply_all())
        .await?;

    Ok(Command(pool))
}

#[allow(dead_code)]
pub async fn create_post(
    command: &Command,
    user_id: &str,
    text: impl Into<String>,
) -> anyhow::Result<String> {
    let post = command
        .create(
            user_id,
            user_id.to_uppercase(),
            CreateInput { text: text.into() },
        )
        .await?;

    Ok(post.id)
}

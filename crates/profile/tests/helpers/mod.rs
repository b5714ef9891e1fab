use std::{path::PathBuf, str::FromStr};

use devconnect_profile::{Command, UpsertInput};
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

/// Inserts a bare account row so profiles can join on it.
pub async fn create_user(command: &Command, id: &str) -> anyhow::Result<()> {
    sqlx::query("INSERT INTO user (id, name, email, password, created_at) VALUES (?, ?, ?, ?, ?)")
        .bind(id)
        .bind(id.to_uppercase())
        .bind(format!("{id}@devconnect.localhost"))
        .bind("not-a-hash")
        .bind(0_i64)
        .execute(&command.0)
        .await?;

    Ok(())
}

#[allow(dead_code)]
pub async fn create_profile(command: &Command, id: &str) -> anyhow::Result<String> {
    create_user(command, id).await?;

    let profile = command
        .upsert(
            id,
            UpsertInput {
                status: "Developer".to_owned(),
                skills: "rust, sql".to_owned(),
                ..Default::default()
            },
        )
        .await?;

    Ok(profile.id)
}

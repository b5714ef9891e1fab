use std::{path::PathBuf, str::FromStr};

use devconnect_user::{Command, RegisterInput};
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
pub async fn create_user(command: &Command, name: impl Into<String>) -> anyhow::Result<String> {
    let name = name.into();

    Ok(command
        .register(RegisterInput {
            email: format!("{name}@devconnect.localhost"),
            name,
            password: "my_password".to_owned(),
        })
        .await?)
}

use sqlx_migrator::{Info, Migrator};

pub mod table;

/// Runs a sea-query statement as one migration step.
macro_rules! sqlite_operation {
    ($name:ident, $up:expr, $down:expr) => {
        pub struct $name;

        #[async_trait::async_trait]
        impl sqlx_migrator::Operation<sqlx::Sqlite> for $name {
            async fn up(
                &self,
                connection: &mut sqlx::SqliteConnection,
            ) -> Result<(), sqlx_migrator::Error> {
                let statement = $up.to_string(sea_query::SqliteQueryBuilder);
                sqlx::query(&statement).execute(connection).await?;

                Ok(())
            }

            async fn down(
                &self,
                connection: &mut sqlx::SqliteConnection,
            ) -> Result<(), sqlx_migrator::Error> {
                let statement = $down.to_string(sea_query::SqliteQueryBuilder);
                sqlx::query(&statement).execute(connection).await?;

                Ok(())
            }
        }
    };
}

pub(crate) use sqlite_operation;

mod m0001;

pub fn migrator() -> Result<Migrator<sqlx::Sqlite>, sqlx_migrator::Error> {
    let mut migrator = Migrator::default();
    migrator.add_migrations(vec![Box::new(m0001::Migration)])?;

    Ok(migrator)
}

#[cfg(test)]
mod tests {
    use sqlx::sqlite::SqlitePoolOptions;
    use sqlx_migrator::{Migrate, Plan};

    #[tokio::test]
    async fn migrations_create_every_table() -> anyhow::Result<()> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;
        let mut conn = pool.acquire().await?;
        super::migrator()?
            .run(&mut *conn, &Plan::apply_all())
            .await?;
        drop(conn);

        let tables: Vec<(String,)> =
            sqlx::query_as("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
                .fetch_all(&pool)
                .await?;
        let tables: Vec<String> = tables.into_iter().map(|(name,)| name).collect();

        for expected in [
            "post",
            "post_comment",
            "post_like",
            "profile",
            "profile_education",
            "profile_experience",
            "user",
        ] {
            assert!(tables.iter().any(|t| t == expected), "missing {expected}");
        }

        Ok(())
    }
}

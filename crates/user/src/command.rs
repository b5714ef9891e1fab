use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use ulid::Ulid;
use validator::Validate;

use crate::password::{hash_password, verify_password};
use crate::repository::{self, FindType, UserRow};

/// A stored account, without its password hash.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(rename = "date")]
    pub created_at: i64,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct RegisterInput {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Email is required"))]
    pub email: String,
    #[validate(length(min = 3, message = "Password length must be at least three characters."))]
    pub password: String,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct LoginInput {
    #[validate(email(message = "Please enter a valid email address."))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Clone)]
pub struct Command(pub SqlitePool);

impl Command {
    /// Creates the account and returns its id.
    pub async fn register(&self, input: RegisterInput) -> devconnect_shared::Result<String> {
        input.validate()?;

        if repository::find(&self.0, FindType::Email(input.email.to_owned()))
            .await?
            .is_some()
        {
            devconnect_shared::bail!("User already exists");
        }

        let password_hash = hash_password(&input.password)?;
        let id = Ulid::new().to_string();

        // The unique email index settles concurrent signups that both passed the lookup.
        match repository::create(
            &self.0,
            id.to_owned(),
            input.name,
            input.email,
            password_hash,
        )
        .await
        {
            Ok(()) => {}
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                devconnect_shared::bail!("User already exists");
            }
            Err(e) => return Err(e.into()),
        }

        tracing::info!(user_id = %id, "user registered");

        Ok(id)
    }

    /// Checks the credentials and returns the account id.
    pub async fn login(&self, input: LoginInput) -> devconnect_shared::Result<String> {
        input.validate()?;

        let Some(user) = repository::find(&self.0, FindType::Email(input.email)).await? else {
            devconnect_shared::bail!("Invalid credentials");
        };

        if !verify_password(&input.password, &user.password)? {
            devconnect_shared::bail!("Invalid credentials");
        }

        Ok(user.id)
    }

    pub async fn find(&self, id: impl Into<String>) -> devconnect_shared::Result<Option<User>> {
        Ok(repository::find(&self.0, FindType::Id(id.into()))
            .await?
            .map(User::from))
    }

    pub async fn find_by_email(
        &self,
        email: impl Into<String>,
    ) -> devconnect_shared::Result<Option<User>> {
        Ok(repository::find(&self.0, FindType::Email(email.into()))
            .await?
            .map(User::from))
    }

    /// Single-row existence check used to re-validate token subjects.
    pub async fn exists(&self, id: impl Into<String>) -> devconnect_shared::Result<bool> {
        repository::exists(&self.0, id.into()).await
    }

    pub async fn delete(&self, id: impl Into<String>) -> devconnect_shared::Result<()> {
        repository::delete(&self.0, id.into()).await
    }
}

use std::collections::HashMap;

use devconnect_shared::authorize;
use serde::Deserialize;
use sqlx::SqlitePool;
use time::OffsetDateTime;
use ulid::Ulid;
use validator::Validate;

use crate::repository::{self, EducationRow, ExperienceRow, ProfileRow};
use crate::{Education, Experience, Profile, parse_skills};

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct UpsertInput {
    #[validate(length(min = 1, message = "Status is required"))]
    pub status: String,
    #[validate(length(min = 1, message = "Skills are required"))]
    pub skills: String,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub githubusername: Option<String>,
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct ExperienceInput {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "company is required"))]
    pub company: String,
    #[validate(length(min = 1, message = "location is required"))]
    pub location: String,
    #[validate(length(min = 1, message = "from is required"))]
    pub from: String,
    pub to: Option<String>,
    pub current: bool,
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct EducationInput {
    #[validate(length(min = 1, message = "school is required"))]
    pub school: String,
    #[validate(length(min = 1, message = "degree is required"))]
    pub degree: String,
    #[validate(length(min = 1, message = "fieldofstudy is required"))]
    pub fieldofstudy: String,
    #[validate(length(min = 1, message = "starting date is required"))]
    pub from: String,
    pub to: Option<String>,
    pub current: bool,
    pub description: Option<String>,
}

// Blank form fields count as absent.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[derive(Clone)]
pub struct Command(pub SqlitePool);

impl Command {
    pub async fn find_by_user(
        &self,
        user_id: impl Into<String>,
    ) -> devconnect_shared::Result<Option<Profile>> {
        let Some(row) = repository::find_by_user(&self.0, user_id.into()).await? else {
            return Ok(None);
        };

        let mut profiles = self.load(vec![row]).await?;

        Ok(profiles.pop())
    }

    /// Profile of the authenticated user.
    pub async fn me(&self, user_id: impl Into<String>) -> devconnect_shared::Result<Profile> {
        match self.find_by_user(user_id).await? {
            Some(profile) => Ok(profile),
            None => devconnect_shared::not_found!("No profile for this user"),
        }
    }

    pub async fn by_user(&self, user_id: impl Into<String>) -> devconnect_shared::Result<Profile> {
        match self.find_by_user(user_id).await? {
            Some(profile) => Ok(profile),
            None => devconnect_shared::not_found!("No profile for the user"),
        }
    }

    pub async fn list(&self) -> devconnect_shared::Result<Vec<Profile>> {
        let rows = repository::list(&self.0).await?;

        self.load(rows).await
    }

    /// Creates the caller's profile or updates it in place.
    pub async fn upsert(
        &self,
        user_id: &str,
        input: UpsertInput,
    ) -> devconnect_shared::Result<Profile> {
        input.validate()?;

        let skills = serde_json::to_string(&parse_skills(&input.skills))?;

        if let Some(profile) = self.find_by_user(user_id).await? {
            authorize(user_id, &profile)?;

            repository::update(
                &self.0,
                repository::UpdateInput {
                    id: profile.id.to_owned(),
                    company: present(input.company),
                    website: present(input.website),
                    location: present(input.location),
                    status: input.status,
                    skills,
                    bio: present(input.bio),
                    githubusername: present(input.githubusername),
                    youtube: present(input.youtube),
                    twitter: present(input.twitter),
                    facebook: present(input.facebook),
                    linkedin: present(input.linkedin),
                    instagram: present(input.instagram),
                },
            )
            .await?;

            tracing::info!(profile_id = %profile.id, user_id, "profile updated");

            return self.me(user_id).await;
        }

        let id = Ulid::new().to_string();
        repository::create(
            &self.0,
            repository::CreateInput {
                id: id.to_owned(),
                user_id: user_id.to_owned(),
                company: present(input.company),
                website: present(input.website),
                location: present(input.location),
                status: input.status,
                skills,
                bio: present(input.bio),
                githubusername: present(input.githubusername),
                youtube: present(input.youtube),
                twitter: present(input.twitter),
                facebook: present(input.facebook),
                linkedin: present(input.linkedin),
                instagram: present(input.instagram),
                created_at: OffsetDateTime::now_utc().unix_timestamp(),
            },
        )
        .await?;

        tracing::info!(profile_id = %id, user_id, "profile created");

        self.me(user_id).await
    }

    pub async fn add_experience(
        &self,
        user_id: &str,
        input: ExperienceInput,
    ) -> devconnect_shared::Result<Profile> {
        input.validate()?;

        let Some(profile) = self.find_by_user(user_id).await? else {
            devconnect_shared::not_found!("No profile found");
        };
        authorize(user_id, &profile)?;

        repository::create_experience(
            &self.0,
            ExperienceRow {
                id: Ulid::new().to_string(),
                profile_id: profile.id.to_owned(),
                user_id: user_id.to_owned(),
                title: input.title,
                company: input.company,
                location: input.location,
                from_date: input.from,
                to_date: present(input.to),
                current: input.current,
                description: present(input.description),
                created_at: OffsetDateTime::now_utc().unix_timestamp(),
            },
        )
        .await?;

        self.me(user_id).await
    }

    pub async fn delete_experience(
        &self,
        user_id: &str,
        id: impl Into<String>,
    ) -> devconnect_shared::Result<Profile> {
        let Some(profile) = self.find_by_user(user_id).await? else {
            devconnect_shared::not_found!("No profile found");
        };

        let experience = match repository::find_experience(&self.0, id.into()).await? {
            Some(row) if row.profile_id == profile.id => Experience::from(row),
            _ => devconnect_shared::not_found!("No such experience id"),
        };
        authorize(user_id, &experience)?;

        repository::delete_experience(&self.0, experience.id).await?;

        self.me(user_id).await
    }

    pub async fn add_education(
        &self,
        user_id: &str,
        input: EducationInput,
    ) -> devconnect_shared::Result<Profile> {
        input.validate()?;

        let Some(profile) = self.find_by_user(user_id).await? else {
            devconnect_shared::not_found!("User has no profile");
        };
        authorize(user_id, &profile)?;

        repository::create_education(
            &self.0,
            EducationRow {
                id: Ulid::new().to_string(),
                profile_id: profile.id.to_owned(),
                user_id: user_id.to_owned(),
                school: input.school,
                degree: input.degree,
                fieldofstudy: input.fieldofstudy,
                from_date: input.from,
                to_date: present(input.to),
                current: input.current,
                description: present(input.description),
                created_at: OffsetDateTime::now_utc().unix_timestamp(),
            },
        )
        .await?;

        self.me(user_id).await
    }

    pub async fn delete_education(
        &self,
        user_id: &str,
        id: impl Into<String>,
    ) -> devconnect_shared::Result<Profile> {
        let Some(profile) = self.find_by_user(user_id).await? else {
            devconnect_shared::not_found!("User has no profile");
        };

        let education = match repository::find_education(&self.0, id.into()).await? {
            Some(row) if row.profile_id == profile.id => Education::from(row),
            _ => devconnect_shared::not_found!("No such education id"),
        };
        authorize(user_id, &education)?;

        repository::delete_education(&self.0, education.id).await?;

        self.me(user_id).await
    }

    pub async fn delete_by_user(&self, user_id: impl Into<String>) -> devconnect_shared::Result<()> {
        repository::delete_by_user(&self.0, user_id.into()).await
    }

    async fn load(&self, rows: Vec<ProfileRow>) -> devconnect_shared::Result<Vec<Profile>> {
        let ids: Vec<String> = rows.iter().map(|row| row.id.to_owned()).collect();

        let mut experiences: HashMap<String, Vec<Experience>> = HashMap::new();
        for row in repository::list_experiences(&self.0, ids.to_owned()).await? {
            experiences
                .entry(row.profile_id.to_owned())
                .or_default()
                .push(row.into());
        }

        let mut educations: HashMap<String, Vec<Education>> = HashMap::new();
        for row in repository::list_educations(&self.0, ids).await? {
            educations
                .entry(row.profile_id.to_owned())
                .or_default()
                .push(row.into());
        }

        rows.into_iter()
            .map(|row| {
                let exps = experiences.remove(&row.id).unwrap_or_default();
                let edus = educations.remove(&row.id).unwrap_or_default();
                Profile::from_row(row, exps, edus)
            })
            .collect()
    }
}

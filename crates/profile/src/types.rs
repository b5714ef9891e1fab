use devconnect_shared::Ownable;
use serde::Serialize;

use crate::repository::{EducationRow, ExperienceRow, ProfileRow};

#[derive(Debug, Clone, Serialize)]
pub struct ProfileUser {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Social {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Experience {
    pub id: String,
    #[serde(skip)]
    pub owner: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub from: String,
    pub to: Option<String>,
    pub current: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Education {
    pub id: String,
    #[serde(skip)]
    pub owner: String,
    pub school: String,
    pub degree: String,
    pub fieldofstudy: String,
    pub from: String,
    pub to: Option<String>,
    pub current: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub id: String,
    pub user: ProfileUser,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub status: String,
    pub skills: Vec<String>,
    pub bio: Option<String>,
    pub githubusername: Option<String>,
    pub social: Social,
    pub experiences: Vec<Experience>,
    pub educations: Vec<Education>,
    #[serde(rename = "date")]
    pub created_at: i64,
}

impl Ownable for Profile {
    fn owner(&self) -> &str {
        &self.user.id
    }
}

impl Ownable for Experience {
    fn owner(&self) -> &str {
        &self.owner
    }
}

impl Ownable for Education {
    fn owner(&self) -> &str {
        &self.owner
    }
}

impl From<ExperienceRow> for Experience {
    fn from(row: ExperienceRow) -> Self {
        Self {
            id: row.id,
            owner: row.user_id,
            title: row.title,
            company: row.company,
            location: row.location,
            from: row.from_date,
            to: row.to_date,
            current: row.current,
            description: row.description,
        }
    }
}

impl From<EducationRow> for Education {
    fn from(row: EducationRow) -> Self {
        Self {
            id: row.id,
            owner: row.user_id,
            school: row.school,
            degree: row.degree,
            fieldofstudy: row.fieldofstudy,
            from: row.from_date,
            to: row.to_date,
            current: row.current,
            description: row.description,
        }
    }
}

impl Profile {
    pub(crate) fn from_row(
        row: ProfileRow,
        experiences: Vec<Experience>,
        educations: Vec<Education>,
    ) -> devconnect_shared::Result<Self> {
        Ok(Self {
            id: row.id,
            user: ProfileUser {
                id: row.user_id,
                name: row.user_name,
            },
            company: row.company,
            website: row.website,
            location: row.location,
            status: row.status,
            skills: serde_json::from_str(&row.skills)?,
            bio: row.bio,
            githubusername: row.githubusername,
            social: Social {
                youtube: row.youtube,
                twitter: row.twitter,
                facebook: row.facebook,
                linkedin: row.linkedin,
                instagram: row.instagram,
            },
            experiences,
            educations,
            created_at: row.created_at,
        })
    }
}

/// Splits a comma separated skill list, trimming each entry.
pub fn parse_skills(skills: &str) -> Vec<String> {
    skills
        .split(',')
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skills_are_trimmed() {
        assert_eq!(
            parse_skills(" rust,  sql ,,go"),
            vec!["rust".to_owned(), "sql".to_owned(), "go".to_owned()]
        );
        assert!(parse_skills("  ").is_empty());
    }
}

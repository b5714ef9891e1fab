mod post;
mod profile;
mod user;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "devconnect",
    "m0001",
    vec_box![],
    vec_box![
        user::CreateTable,
        user::CreateUk1,
        profile::CreateTable,
        profile::CreateUk1,
        profile::CreateExperienceTable,
        profile::CreateExperienceIdx1,
        profile::CreateEducationTable,
        profile::CreateEducationIdx1,
        post::CreateTable,
        post::CreateIdx1,
        post::CreateLikeTable,
        post::CreateCommentTable,
        post::CreateCommentIdx1
    ]
);

use devconnect_db::table::{Profile, ProfileEducation, ProfileExperience, User};
use sea_query::{Expr, ExprTrait, Order, Query, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, prelude::FromRow};

#[derive(FromRow)]
pub struct ProfileRow {
    pub id: String,
    pub user_id: String,
    #[sqlx(rename = "name")]
    pub user_name: String,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub status: String,
    pub skills: String,
    pub bio: Option<String>,
    pub githubusername: Option<String>,
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
    pub created_at: i64,
}

#[derive(FromRow)]
pub struct ExperienceRow {
    pub id: String,
    pub profile_id: String,
    pub user_id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub from_date: String,
    pub to_date: Option<String>,
    pub current: bool,
    pub description: Option<String>,
    pub created_at: i64,
}

#[derive(FromRow)]
pub struct EducationRow {
    pub id: String,
    pub profile_id: String,
    pub user_id: String,
    pub school: String,
    pub degree: String,
    pub fieldofstudy: String,
    pub from_date: String,
    pub to_date: Option<String>,
    pub current: bool,
    pub description: Option<String>,
    pub created_at: i64,
}

fn select_profiles() -> SelectStatement {
    Query::select()
        .columns([
            (Profile::Table, Profile::Id),
            (Profile::Table, Profile::UserId),
            (Profile::Table, Profile::Company),
            (Profile::Table, Profile::Website),
            (Profile::Table, Profile::Location),
            (Profile::Table, Profile::Status),
            (Profile::Table, Profile::Skills),
            (Profile::Table, Profile::Bio),
            (Profile::Table, Profile::Githubusername),
            (Profile::Table, Profile::Youtube),
            (Profile::Table, Profile::Twitter),
            (Profile::Table, Profile::Facebook),
            (Profile::Table, Profile::Linkedin),
            (Profile::Table, Profile::Instagram),
            (Profile::Table, Profile::CreatedAt),
        ])
        .column((User::Table, User::Name))
        .from(Profile::Table)
        .inner_join(
            User::Table,
            Expr::col((User::Table, User::Id)).equals((Profile::Table, Profile::UserId)),
        )
        .to_owned()
}

pub(crate) async fn find_by_user(
    pool: &SqlitePool,
    user_id: String,
) -> devconnect_shared::Result<Option<ProfileRow>> {
    let statement = select_profiles()
        .and_where(Expr::col((Profile::Table, Profile::UserId)).eq(user_id))
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, ProfileRow, _>(&sql, values)
        .fetch_optional(pool)
        .await?)
}

pub(crate) async fn list(pool: &SqlitePool) -> devconnect_shared::Result<Vec<ProfileRow>> {
    let statement = select_profiles()
        .order_by((Profile::Table, Profile::CreatedAt), Order::Desc)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, ProfileRow, _>(&sql, values)
        .fetch_all(pool)
        .await?)
}

pub struct CreateInput {
    pub id: String,
    pub user_id: String,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub status: String,
    pub skills: String,
    pub bio: Option<String>,
    pub githubusername: Option<String>,
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
    pub created_at: i64,
}

pub(crate) async fn create(pool: &SqlitePool, input: CreateInput) -> devconnect_shared::Result<()> {
    let statement = Query::insert()
        .into_table(Profile::Table)
        .columns([
            Profile::Id,
            Profile::UserId,
            Profile::Company,
            Profile::Website,
            Profile::Location,
            Profile::Status,
            Profile::Skills,
            Profile::Bio,
            Profile::Githubusername,
            Profile::Youtube,
            Profile::Twitter,
            Profile::Facebook,
            Profile::Linkedin,
            Profile::Instagram,
            Profile::CreatedAt,
        ])
        .values_panic([
            input.id.into(),
            input.user_id.into(),
            input.company.into(),
            input.website.into(),
            input.location.into(),
            input.status.into(),
            input.skills.into(),
            input.bio.into(),
            input.githubusername.into(),
            input.youtube.into(),
            input.twitter.into(),
            input.facebook.into(),
            input.linkedin.into(),
            input.instagram.into(),
            input.created_at.into(),
        ])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}

/// Partial update: `None` keeps the stored value, except for social links
/// which are always replaced together.
pub struct UpdateInput {
    pub id: String,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub status: String,
    pub skills: String,
    pub bio: Option<String>,
    pub githubusername: Option<String>,
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
}

pub(crate) async fn update(pool: &SqlitePool, input: UpdateInput) -> devconnect_shared::Result<()> {
    let mut statement = Query::update()
        .table(Profile::Table)
        .and_where(Expr::col(Profile::Id).eq(input.id))
        .to_owned();

    statement.value(Profile::Status, input.status);
    statement.value(Profile::Skills, input.skills);

    if let Some(company) = input.company {
        statement.value(Profile::Company, company);
    }

    if let Some(website) = input.website {
        statement.value(Profile::Website, website);
    }

    if let Some(location) = input.location {
        statement.value(Profile::Location, location);
    }

    if let Some(bio) = input.bio {
        statement.value(Profile::Bio, bio);
    }

    if let Some(githubusername) = input.githubusername {
        statement.value(Profile::Githubusername, githubusername);
    }

    statement.value(Profile::Youtube, input.youtube);
    statement.value(Profile::Twitter, input.twitter);
    statement.value(Profile::Facebook, input.facebook);
    statement.value(Profile::Linkedin, input.linkedin);
    statement.value(Profile::Instagram, input.instagram);

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}

/// Removes the profile of `user_id` with its experiences and educations.
pub(crate) async fn delete_by_user(
    pool: &SqlitePool,
    user_id: String,
) -> devconnect_shared::Result<()> {
    let statements = [
        Query::delete()
            .from_table(ProfileExperience::Table)
            .and_where(Expr::col(ProfileExperience::UserId).eq(user_id.to_owned()))
            .to_owned(),
        Query::delete()
            .from_table(ProfileEducation::Table)
            .and_where(Expr::col(ProfileEducation::UserId).eq(user_id.to_owned()))
            .to_owned(),
        Query::delete()
            .from_table(Profile::Table)
            .and_where(Expr::col(Profile::UserId).eq(user_id))
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

fn select_experiences() -> SelectStatement {
    Query::select()
        .columns([
            ProfileExperience::Id,
            ProfileExperience::ProfileId,
            ProfileExperience::UserId,
            ProfileExperience::Title,
            ProfileExperience::Company,
            ProfileExperience::Location,
            ProfileExperience::FromDate,
            ProfileExperience::ToDate,
            ProfileExperience::Current,
            ProfileExperience::Description,
            ProfileExperience::CreatedAt,
        ])
        .from(ProfileExperience::Table)
        .to_owned()
}

/// Experiences of the given profiles, most recently added first.
pub(crate) async fn list_experiences(
    pool: &SqlitePool,
    profile_ids: Vec<String>,
) -> devconnect_shared::Result<Vec<ExperienceRow>> {
    let statement = select_experiences()
        .and_where(Expr::col(ProfileExperience::ProfileId).is_in(profile_ids))
        .order_by_expr(Expr::cust("rowid"), Order::Desc)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, ExperienceRow, _>(&sql, values)
        .fetch_all(pool)
        .await?)
}

pub(crate) async fn find_experience(
    pool: &SqlitePool,
    id: String,
) -> devconnect_shared::Result<Option<ExperienceRow>> {
    let statement = select_experiences()
        .and_where(Expr::col(ProfileExperience::Id).eq(id))
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, ExperienceRow, _>(&sql, values)
        .fetch_optional(pool)
        .await?)
}

pub(crate) async fn create_experience(
    pool: &SqlitePool,
    row: ExperienceRow,
) -> devconnect_shared::Result<()> {
    let statement = Query::insert()
        .into_table(ProfileExperience::Table)
        .columns([
            ProfileExperience::Id,
            ProfileExperience::ProfileId,
            ProfileExperience::UserId,
            ProfileExperience::Title,
            ProfileExperience::Company,
            ProfileExperience::Location,
            ProfileExperience::FromDate,
            ProfileExperience::ToDate,
            ProfileExperience::Current,
            ProfileExperience::Description,
            ProfileExperience::CreatedAt,
        ])
        .values_panic([
            row.id.into(),
            row.profile_id.into(),
            row.user_id.into(),
            row.title.into(),
            row.company.into(),
            row.location.into(),
            row.from_date.into(),
            row.to_date.into(),
            row.current.into(),
            row.description.into(),
            row.created_at.into(),
        ])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}

pub(crate) async fn delete_experience(
    pool: &SqlitePool,
    id: String,
) -> devconnect_shared::Result<()> {
    let statement = Query::delete()
        .from_table(ProfileExperience::Table)
        .and_where(Expr::col(ProfileExperience::Id).eq(id))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}

fn select_educations() -> SelectStatement {
    Query::select()
        .columns([
            ProfileEducation::Id,
            ProfileEducation::ProfileId,
            ProfileEducation::UserId,
            ProfileEducation::School,
            ProfileEducation::Degree,
            ProfileEducation::Fieldofstudy,
            ProfileEducation::FromDate,
            ProfileEducation::ToDate,
            ProfileEducation::Current,
            ProfileEducation::Description,
            ProfileEducation::CreatedAt,
        ])
        .from(ProfileEducation::Table)
        .to_owned()
}

/// Educations of the given profiles, most recently added first.
pub(crate) async fn list_educations(
    pool: &SqlitePool,
    profile_ids: Vec<String>,
) -> devconnect_shared::Result<Vec<EducationRow>> {
    let statement = select_educations()
        .and_where(Expr::col(ProfileEducation::ProfileId).is_in(profile_ids))
        .order_by_expr(Expr::cust("rowid"), Order::Desc)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, EducationRow, _>(&sql, values)
        .fetch_all(pool)
        .await?)
}

pub(crate) async fn find_education(
    pool: &SqlitePool,
    id: String,
) -> devconnect_shared::Result<Option<EducationRow>> {
    let statement = select_educations()
        .and_where(Expr::col(ProfileEducation::Id).eq(id))
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, EducationRow, _>(&sql, values)
        .fetch_optional(pool)
        .await?)
}

pub(crate) async fn create_education(
    pool: &SqlitePool,
    row: EducationRow,
) -> devconnect_shared::Result<()> {
    let statement = Query::insert()
        .into_table(ProfileEducation::Table)
        .columns([
            ProfileEducation::Id,
            ProfileEducation::ProfileId,
            ProfileEducation::UserId,
            ProfileEducation::School,
            ProfileEducation::Degree,
            ProfileEducation::Fieldofstudy,
            ProfileEducation::FromDate,
            ProfileEducation::ToDate,
            ProfileEducation::Current,
            ProfileEducation::Description,
            ProfileEducation::CreatedAt,
        ])
        .values_panic([
            row.id.into(),
            row.profile_id.into(),
            row.user_id.into(),
            row.school.into(),
            row.degree.into(),
            row.fieldofstudy.into(),
            row.from_date.into(),
            row.to_date.into(),
            row.current.into(),
            row.description.into(),
            row.created_at.into(),
        ])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}

pub(crate) async fn delete_education(
    pool: &SqlitePool,
    id: String,
) -> devconnect_shared::Result<()> {
    let statement = Query::delete()
        .from_table(ProfileEducation::Table)
        .and_where(Expr::col(ProfileEducation::Id).eq(id))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}

use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum User {
    Table,
    Id,
    Name,
    Email,
    Password,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum Profile {
    Table,
    Id,
    UserId,
    Company,
    Website,
    Location,
    Status,
    Skills,
    Bio,
    Githubusername,
    Youtube,
    Twitter,
    Facebook,
    Linkedin,
    Instagram,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum ProfileExperience {
    Table,
    Id,
    ProfileId,
    UserId,
    Title,
    Company,
    Location,
    FromDate,
    ToDate,
    Current,
    Description,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum ProfileEducation {
    Table,
    Id,
    ProfileId,
    UserId,
    School,
    Degree,
    Fieldofstudy,
    FromDate,
    ToDate,
    Current,
    Description,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum Post {
    Table,
    Id,
    UserId,
    Name,
    Text,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum PostLike {
    Table,
    PostId,
    UserId,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum PostComment {
    Table,
    Id,
    PostId,
    UserId,
    Name,
    Text,
    CreatedAt,
}

use sea_query::{ColumnDef, Index, Table};

use crate::sqlite_operation;
use crate::table::{Profile, ProfileEducation, ProfileExperience};

sqlite_operation!(
    CreateTable,
    Table::create()
        .table(Profile::Table)
        .col(
            ColumnDef::new(Profile::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(
            ColumnDef::new(Profile::UserId)
                .string()
                .not_null()
                .string_len(26),
        )
        .col(ColumnDef::new(Profile::Company).string().null())
        .col(ColumnDef::new(Profile::Website).string().null())
        .col(ColumnDef::new(Profile::Location).string().null())
        .col(ColumnDef::new(Profile::Status).string().not_null())
        .col(ColumnDef::new(Profile::Skills).text().not_null())
        .col(ColumnDef::new(Profile::Bio).text().null())
        .col(ColumnDef::new(Profile::Githubusername).string().null())
        .col(ColumnDef::new(Profile::Youtube).string().null())
        .col(ColumnDef::new(Profile::Twitter).string().null())
        .col(ColumnDef::new(Profile::Facebook).string().null())
        .col(ColumnDef::new(Profile::Linkedin).string().null())
        .col(ColumnDef::new(Profile::Instagram).string().null())
        .col(ColumnDef::new(Profile::CreatedAt).big_integer().not_null())
        .to_owned(),
    Table::drop().table(Profile::Table).to_owned()
);

sqlite_operation!(
    CreateUk1,
    Index::create()
        .name("uk_profile_user_id")
        .table(Profile::Table)
        .unique()
        .col(Profile::UserId)
        .to_owned(),
    Index::drop()
        .name("uk_profile_user_id")
        .table(Profile::Table)
        .to_owned()
);

sqlite_operation!(
    CreateExperienceTable,
    Table::create()
        .table(ProfileExperience::Table)
        .col(
            ColumnDef::new(ProfileExperience::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(
            ColumnDef::new(ProfileExperience::ProfileId)
                .string()
                .not_null()
                .string_len(26),
        )
        .col(
            ColumnDef::new(ProfileExperience::UserId)
                .string()
                .not_null()
                .string_len(26),
        )
        .col(ColumnDef::new(ProfileExperience::Title).string().not_null())
        .col(ColumnDef::new(ProfileExperience::Company).string().not_null())
        .col(ColumnDef::new(ProfileExperience::Location).string().not_null())
        .col(ColumnDef::new(ProfileExperience::FromDate).string().not_null())
        .col(ColumnDef::new(ProfileExperience::ToDate).string().null())
        .col(
            ColumnDef::new(ProfileExperience::Current)
                .boolean()
                .not_null()
                .default(false),
        )
        .col(ColumnDef::new(ProfileExperience::Description).text().null())
        .col(
            ColumnDef::new(ProfileExperience::CreatedAt)
                .big_integer()
                .not_null(),
        )
        .to_owned(),
    Table::drop().table(ProfileExperience::Table).to_owned()
);

sqlite_operation!(
    CreateExperienceIdx1,
    Index::create()
        .name("idx_profile_experience_profile_id")
        .table(ProfileExperience::Table)
        .col(ProfileExperience::ProfileId)
        .to_owned(),
    Index::drop()
        .name("idx_profile_experience_profile_id")
        .table(ProfileExperience::Table)
        .to_owned()
);

sqlite_operation!(
    CreateEducationTable,
    Table::create()
        .table(ProfileEducation::Table)
        .col(
            ColumnDef::new(ProfileEducation::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(
            ColumnDef::new(ProfileEducation::ProfileId)
                .string()
                .not_null()
                .string_len(26),
        )
        .col(
            ColumnDef::new(ProfileEducation::UserId)
                .string()
                .not_null()
                .string_len(26),
        )
        .col(ColumnDef::new(ProfileEducation::School).string().not_null())
        .col(ColumnDef::new(ProfileEducation::Degree).string().not_null())
        .col(
            ColumnDef::new(ProfileEducation::Fieldofstudy)
                .string()
                .not_null(),
        )
        .col(ColumnDef::new(ProfileEducation::FromDate).string().not_null())
        .col(ColumnDef::new(ProfileEducation::ToDate).string().null())
        .col(
            ColumnDef::new(ProfileEducation::Current)
                .boolean()
                .not_null()
                .default(false),
        )
        .col(ColumnDef::new(ProfileEducation::Description).text().null())
        .col(
            ColumnDef::new(ProfileEducation::CreatedAt)
                .big_integer()
                .not_null(),
        )
        .to_owned(),
    Table::drop().table(ProfileEducation::Table).to_owned()
);

sqlite_operation!(
    CreateEducationIdx1,
    Index::create()
        .name("idx_profile_education_profile_id")
        .table(ProfileEducation::Table)
        .col(ProfileEducation::ProfileId)
        .to_owned(),
    Index::drop()
        .name("idx_profile_education_profile_id")
        .table(ProfileEducation::Table)
        .to_owned()
);

use sea_query::{ColumnDef, Index, Table};

use crate::sqlite_operation;
use crate::table::User;

sqlite_operation!(
    CreateTable,
    Table::create()
        .table(User::Table)
        .col(
            ColumnDef::new(User::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(ColumnDef::new(User::Name).string().not_null())
        .col(ColumnDef::new(User::Email).string().not_null())
        .col(ColumnDef::new(User::Password).string().not_null())
        .col(ColumnDef::new(User::CreatedAt).big_integer().not_null())
        .to_owned(),
    Table::drop().table(User::Table).to_owned()
);

sqlite_operation!(
    CreateUk1,
    Index::create()
        .name("uk_user_email")
        .table(User::Table)
        .unique()
        .col(User::Email)
        .to_owned(),
    Index::drop()
        .name("uk_user_email")
        .table(User::Table)
        .to_owned()
);

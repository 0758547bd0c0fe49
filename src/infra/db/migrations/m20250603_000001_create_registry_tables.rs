//! Migration: Create administrators, users and safe_houses tables.

use sea_orm_migration::prelude::*;

const UX_ADMINISTRATORS_EMAIL: &str = "ux_administrators_email";
const UX_USERS_EMAIL: &str = "ux_users_email";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(administrators_table()).await?;

        // Email uniqueness is enforced here as well as in the service layer
        manager
            .create_index(
                Index::create()
                    .name(UX_ADMINISTRATORS_EMAIL)
                    .table(Administrators::Table)
                    .col(Administrators::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager.create_table(users_table()).await?;

        manager
            .create_index(
                Index::create()
                    .name(UX_USERS_EMAIL)
                    .table(Users::Table)
                    .col(Users::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager.create_table(safe_houses_table()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SafeHouses::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Administrators::Table).to_owned())
            .await
    }
}

// Free-text columns are unbounded: entities only reject blank values, so
// the schema must accept any length they accept.

fn administrators_table() -> TableCreateStatement {
    Table::create()
        .table(Administrators::Table)
        .if_not_exists()
        .col(ColumnDef::new(Administrators::Id).uuid().not_null().primary_key())
        .col(ColumnDef::new(Administrators::Name).text().not_null())
        .col(ColumnDef::new(Administrators::Email).text().not_null())
        .col(ColumnDef::new(Administrators::PasswordHash).string_len(64).not_null())
        .to_owned()
}

fn users_table() -> TableCreateStatement {
    Table::create()
        .table(Users::Table)
        .if_not_exists()
        .col(ColumnDef::new(Users::Id).uuid().not_null().primary_key())
        .col(ColumnDef::new(Users::Name).text().not_null())
        .col(ColumnDef::new(Users::Email).text().not_null())
        .col(ColumnDef::new(Users::PasswordHash).string_len(64).not_null())
        .to_owned()
}

fn safe_houses_table() -> TableCreateStatement {
    Table::create()
        .table(SafeHouses::Table)
        .if_not_exists()
        .col(ColumnDef::new(SafeHouses::Id).uuid().not_null().primary_key())
        .col(ColumnDef::new(SafeHouses::PostalCode).text().not_null())
        .col(ColumnDef::new(SafeHouses::Number).text().not_null())
        .col(ColumnDef::new(SafeHouses::Complement).text().not_null().default(""))
        .to_owned()
}

#[derive(DeriveIden)]
enum Administrators {
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
}

#[derive(DeriveIden)]
enum SafeHouses {
    Table,
    Id,
    PostalCode,
    Number,
    Complement,
}

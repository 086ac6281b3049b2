use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create token_blocklist table. Revoked tokens are looked up by jti
        // on every authenticated request, so the jti column is unique and
        // indexed. No foreign key to users: blocklist rows must survive
        // user deletion until the token itself expires.
        manager
            .create_table(
                Table::create()
                    .table(TokenBlocklist::Table)
                    .if_not_exists()
                    .col(pk_auto(TokenBlocklist::Id))
                    .col(string(TokenBlocklist::Jti).unique_key())
                    .col(string(TokenBlocklist::Email))
                    .col(timestamp_with_time_zone(TokenBlocklist::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TokenBlocklist::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum TokenBlocklist {
    Table,
    Id,
    Jti,
    Email,
    CreatedAt,
}

//! Create `social_media` table with FK to `users`.
//!
//! Rows are removed together with their owner (ON DELETE CASCADE).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SocialMedia::Table)
                    .if_not_exists()
                    .col(integer(SocialMedia::Id).auto_increment().primary_key())
                    .col(string(SocialMedia::Name))
                    .col(string(SocialMedia::Url))
                    .col(integer(SocialMedia::UserId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_social_media_user")
                            .from(SocialMedia::Table, SocialMedia::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(SocialMedia::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum SocialMedia { Table, Id, Name, Url, UserId }

#[derive(DeriveIden)]
enum Users { Table, Id }

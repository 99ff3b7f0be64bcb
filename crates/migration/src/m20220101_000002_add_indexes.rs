use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // SocialMedia: every scoped lookup filters on the owner
        manager
            .create_index(
                Index::create()
                    .name("idx_social_media_user_id")
                    .table(SocialMedia::Table)
                    .col(SocialMedia::UserId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_social_media_user_id")
                    .table(SocialMedia::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum SocialMedia { Table, UserId }

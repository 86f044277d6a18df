use sea_orm_migration::{prelude::*, sea_query::TableForeignKey};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[allow(dead_code)]
#[derive(DeriveIden)]
enum User {
    Table,
    Id,
    TeamId,
}

#[derive(DeriveIden)]
enum Team {
    Table,
    Id,
    Name,
    ManagerId,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        // teams; a manager with teams cannot be deleted (Restrict)
        m.create_table(
            Table::create()
                .table(Team::Table)
                .col(ColumnDef::new(Team::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Team::Name).string().not_null())
                .col(ColumnDef::new(Team::ManagerId).uuid().not_null())
                .col(ColumnDef::new(Team::CreatedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(Team::UpdatedAt).timestamp_with_time_zone().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_team_manager")
                        .from(Team::Table, Team::ManagerId)
                        .to(User::Table, User::Id)
                        .on_delete(ForeignKeyAction::Restrict)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("idx_team_manager_id")
                .table(Team::Table)
                .col(Team::ManagerId)
                .to_owned(),
        )
        .await?;

        // users.team_id; members outlive their team (SetNull)
        m.alter_table(
            Table::alter()
                .table(User::Table)
                .add_column(ColumnDef::new(User::TeamId).uuid().null())
                .to_owned(),
        )
        .await?;

        m.alter_table(
            Table::alter()
                .table(User::Table)
                .add_foreign_key(
                    TableForeignKey::new()
                        .name("fk_user_team")
                        .from_tbl(User::Table)
                        .from_col(User::TeamId)
                        .to_tbl(Team::Table)
                        .to_col(Team::Id)
                        .on_delete(ForeignKeyAction::SetNull)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("idx_user_team_id")
                .table(User::Table)
                .col(User::TeamId)
                .to_owned(),
        )
        .await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.alter_table(
            Table::alter()
                .table(User::Table)
                .drop_column(User::TeamId)
                .to_owned(),
        )
        .await?;
        m.drop_table(Table::drop().table(Team::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}

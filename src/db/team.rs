use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use chrono::Utc;
use entity::team::{ActiveModel as TeamActive, Entity as Team, Model as TeamModel};
use entity::user::{Entity as User, Role};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};
use uuid::Uuid;

impl PostgresService {
    /// A missing id and an existing non-manager id collapse into the same
    /// `ManagerNotFound`.
    pub async fn create_team(&self, manager_id: Uuid, name: String) -> Result<TeamModel, AppError> {
        self.get_user_by_id(&manager_id, Some(Role::Manager))
            .await
            .map_err(|e| match e {
                AppError::NotFound => AppError::ManagerNotFound,
                other => other,
            })?;

        let now = Utc::now();
        let team = TeamActive {
            id: Set(Uuid::new_v4()),
            name: Set(name),
            manager_id: Set(manager_id),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await?;
        Ok(team)
    }

    pub async fn get_team(&self, id: &Uuid) -> Result<TeamModel, AppError> {
        Ok(Team::find_by_id(*id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Team does not exist".into()))?)
    }

    pub async fn get_team_with_employees(
        &self,
        id: &Uuid,
    ) -> Result<(TeamModel, Vec<Uuid>), AppError> {
        let team = self.get_team(id).await?;
        let members = self.list_employee_ids(&team.id).await?;
        Ok((team, members))
    }

    /// The back relation: users whose team_id points at this team.
    pub async fn list_employee_ids(&self, team_id: &Uuid) -> Result<Vec<Uuid>, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::TeamId.eq(*team_id))
            .order_by_asc(entity::user::Column::Id)
            .all(&self.db)
            .await?
            .into_iter()
            .map(|u| u.id)
            .collect())
    }

    pub async fn list_teams_paginated(
        &self,
        manager: Option<Uuid>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<(TeamModel, Vec<Uuid>)>, u64), AppError> {
        let mut finder = Team::find();
        if let Some(manager_id) = manager {
            finder = finder.filter(entity::team::Column::ManagerId.eq(manager_id));
        }
        let finder = finder.order_by_asc(entity::team::Column::Id);
        let total = finder.clone().count(&self.db).await?;
        let teams = finder
            .paginate(&self.db, per_page)
            .fetch_page(page.saturating_sub(1))
            .await?;

        let mut out = Vec::with_capacity(teams.len());
        for team in teams {
            let members = self.list_employee_ids(&team.id).await?;
            out.push((team, members));
        }
        Ok((out, total))
    }
}

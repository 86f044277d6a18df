use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::user::{DBEmployeeCreate, DBManagerCreate};
use chrono::Utc;
use entity::team::Entity as Team;
use entity::user::{ActiveModel as UserActive, Entity as User, Model as UserModel, Role};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set, TransactionTrait,
};
use uuid::Uuid;

pub(crate) fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

impl PostgresService {
    pub async fn user_exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(&self.db)
            .await?
            > 0)
    }

    pub async fn get_user_by_id(
        &self,
        id: &Uuid,
        role: Option<Role>,
    ) -> Result<UserModel, AppError> {
        let mut finder = User::find_by_id(*id);
        if let Some(role) = role {
            finder = finder.filter(entity::user::Column::Role.eq(role));
        }
        Ok(finder
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    /// Login candidate lookup.
    pub async fn get_user_by_email(&self, email: &str) -> Result<UserModel, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(normalize_email(email)))
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    pub async fn create_manager(&self, payload: DBManagerCreate) -> Result<UserModel, AppError> {
        let email = normalize_email(&payload.email);
        // early exit; the unique index decides races
        if self.user_exists_by_email(&email).await? {
            return Err(AppError::EmailTaken);
        }
        let now = Utc::now();
        let txn = self.db.begin().await?;

        let manager = UserActive {
            id: Set(Uuid::new_v4()),
            name: Set(payload.name),
            email: Set(email),
            password_hash: Set(payload.password_hash),
            role: Set(Role::Manager),
            career_goal: Set(None),
            team_id: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        Ok(manager)
    }

    /// Team existence is checked before the email conflict, so `TeamNotFound`
    /// wins when both would fail.
    pub async fn create_employee(&self, payload: DBEmployeeCreate) -> Result<UserModel, AppError> {
        if Team::find_by_id(payload.team_id)
            .one(&self.db)
            .await?
            .is_none()
        {
            return Err(AppError::TeamNotFound);
        }

        let email = normalize_email(&payload.email);
        if self.user_exists_by_email(&email).await? {
            return Err(AppError::EmailTaken);
        }
        let now = Utc::now();
        let txn = self.db.begin().await?;

        let employee = UserActive {
            id: Set(Uuid::new_v4()),
            name: Set(payload.name),
            email: Set(email),
            password_hash: Set(payload.password_hash),
            role: Set(Role::Employee),
            career_goal: Set(payload.career_goal),
            team_id: Set(Some(payload.team_id)),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        Ok(employee)
    }

    /// One role's slice of the directory, ascending by id. The team filter
    /// only applies when the caller supplies one; `page` is 1-based and the
    /// count covers the filtered set before slicing.
    pub async fn list_users_paginated(
        &self,
        role: Role,
        team: Option<Uuid>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<UserModel>, u64), AppError> {
        let mut finder = User::find().filter(entity::user::Column::Role.eq(role));
        if let Some(team_id) = team {
            finder = finder.filter(entity::user::Column::TeamId.eq(team_id));
        }
        let finder = finder.order_by_asc(entity::user::Column::Id);
        let total = finder.clone().count(&self.db).await?;
        let items = finder
            .paginate(&self.db, per_page)
            .fetch_page(page.saturating_sub(1))
            .await?;
        Ok((items, total))
    }

    /// Applies to any matching id; the role is not checked here.
    pub async fn update_career_goal(&self, user_id: &Uuid, goal: String) -> Result<(), AppError> {
        let mut am: UserActive = self.get_user_by_id(user_id, None).await?.into();
        am.career_goal = Set(Some(goal));
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.db).await.map(|_| ())?)
    }
}

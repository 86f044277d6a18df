use std::sync::Arc;

use actix_web::{web, App};
use uuid::Uuid;

use careerhub::db::postgres_service::PostgresService;
use careerhub::types::user::{DBEmployeeCreate, DBManagerCreate};
use careerhub::utils::links::LinkBuilder;
use careerhub::utils::password;
use careerhub::utils::token::TokenService;

pub struct TestClient {
    pub db: Arc<PostgresService>,
}

impl TestClient {
    pub fn new(db: Arc<PostgresService>) -> Self {
        TestClient { db }
    }

    #[allow(dead_code)]
    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .app_data(web::Data::new(TokenService::new(super::test_jwt_config())))
            .app_data(web::Data::new(LinkBuilder::new("http://localhost:8080")))
            .configure(careerhub::routes::configure_routes)
    }

    #[allow(dead_code)]
    pub async fn seed_manager(&self, email: &str) -> entity::user::Model {
        self.db
            .create_manager(DBManagerCreate {
                email: email.to_string(),
                name: "Seed Manager".to_string(),
                password_hash: password::hash("pw123456").expect("Failed to hash password"),
            })
            .await
            .expect("Failed to seed manager")
    }

    #[allow(dead_code)]
    pub async fn seed_team(&self, manager_id: Uuid) -> entity::team::Model {
        self.db
            .create_team(manager_id, "Seed Team".to_string())
            .await
            .expect("Failed to seed team")
    }

    #[allow(dead_code)]
    pub async fn seed_employee(&self, email: &str, team_id: Uuid) -> entity::user::Model {
        self.db
            .create_employee(DBEmployeeCreate {
                email: email.to_string(),
                name: "Seed Employee".to_string(),
                password_hash: password::hash("pw123456").expect("Failed to hash password"),
                team_id,
                career_goal: None,
            })
            .await
            .expect("Failed to seed employee")
    }
}

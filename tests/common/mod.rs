use std::sync::Arc;

use careerhub::config::JwtConfig;
use careerhub::db::postgres_service::PostgresService;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres;

pub mod client;

pub struct TestContext {
    pub db: Arc<PostgresService>,
    pub _container: ContainerAsync<Postgres>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        let container = Postgres::default()
            .start()
            .await
            .expect("Failed to start postgres container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let db_url = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);

        let db = Arc::new(
            PostgresService::new(&db_url)
                .await
                .expect("Failed to initialize PostgresService"),
        );

        TestContext {
            db,
            _container: container,
        }
    }
}

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test-secret".to_string(),
        issuer: "careerhub".to_string(),
        audience: "careerhub-clients".to_string(),
        expiration_minutes: 60,
    }
}

// Test data helpers
#[allow(dead_code)]
pub mod test_data {
    use careerhub::types::team::RTeamCreate;
    use careerhub::types::user::{RManagerCreate, REmployeeCreate};
    use uuid::Uuid;

    pub fn sample_manager() -> RManagerCreate {
        sample_manager_with_email("manager@example.com")
    }

    pub fn sample_manager_with_email(email: &str) -> RManagerCreate {
        RManagerCreate {
            email: email.to_string(),
            name: "Test Manager".to_string(),
            password: "pw123456".to_string(),
        }
    }

    pub fn sample_team(manager_id: Uuid) -> RTeamCreate {
        RTeamCreate {
            name: "Test Team".to_string(),
            manager_id,
        }
    }

    pub fn sample_employee(email: &str, team_id: Uuid) -> REmployeeCreate {
        REmployeeCreate {
            email: email.to_string(),
            name: "Test Employee".to_string(),
            password: "pw123456".to_string(),
            team_id,
            career_goal: None,
        }
    }
}

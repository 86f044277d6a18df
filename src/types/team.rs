use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use entity::team::Model as TeamModel;

use crate::utils::links::{Link, LinkBuilder};

#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RTeamCreate {
    #[validate(length(min = 1))]
    pub name: String,
    pub manager_id: Uuid,
}

/// Public projection; members are ids only, never nested user objects.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamResponse {
    pub id: Uuid,
    pub name: String,
    pub manager_id: Uuid,
    pub employee_ids: Vec<Uuid>,
    pub links: Vec<Link>,
}

impl TeamResponse {
    pub fn from_model(team: TeamModel, employee_ids: Vec<Uuid>, links: &LinkBuilder) -> Self {
        TeamResponse {
            id: team.id,
            name: team.name,
            manager_id: team.manager_id,
            employee_ids,
            links: links.team_links(team.id),
        }
    }
}

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Clone)]
pub struct Team {
    pub id: Uuid,
    pub name: String,
    pub coach: String,
    pub city: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateTeamRequest {
    pub name: String,
    pub coach: String,
    pub city: String,
}

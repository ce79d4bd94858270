use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// `team_id` is a non-owning reference to a Team, checked at creation time
/// and never again (no cascade deletes exist — teams can't be deleted).
#[derive(Debug, Serialize, Clone)]
pub struct Player {
    pub id: Uuid,
    pub name: String,
    pub age: u32,
    pub position: String,
    pub team_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct CreatePlayerRequest {
    pub name: String,
    pub age: u32,
    pub position: String,
    pub team_id: Uuid,
}

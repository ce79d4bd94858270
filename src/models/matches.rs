use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// The file is `matches.rs` because `match` is a keyword and `r#match` as a
// module name is miserable to read.

#[derive(Debug, Serialize, Clone)]
pub struct Match {
    pub id: Uuid,
    pub home_team_id: Uuid,
    pub away_team_id: Uuid,
    pub date: NaiveDate,
    pub location: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateMatchRequest {
    pub home_team_id: Uuid,
    pub away_team_id: Uuid,
    pub date: NaiveDate,
    #[serde(default)]
    pub location: Option<String>,
}

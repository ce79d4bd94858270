use crate::config::AuthConfig;
use crate::db::Database;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub auth: AuthConfig,
}

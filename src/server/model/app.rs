use sea_orm::DatabaseConnection;

use crate::server::search::SearchMirror;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub search: SearchMirror,
}

/// Builds state around a database with an empty search mirror
impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self {
            db,
            search: SearchMirror::default(),
        }
    }
}

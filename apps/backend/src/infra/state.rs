use crate::config::db::{DbKind, DbProfile};
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and binaries)
pub struct StateBuilder {
    db_profile: DbProfile,
    db_kind: Option<DbKind>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            db_profile: DbProfile::Prod,
            db_kind: None,
        }
    }

    pub fn with_db(mut self, profile: DbProfile, kind: DbKind) -> Self {
        self.db_profile = profile;
        self.db_kind = Some(kind);
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let kind = match self.db_kind {
            Some(kind) => kind,
            None => DbKind::from_env()?,
        };
        // single entrypoint: connect + migrate
        let conn = bootstrap_db(self.db_profile, kind).await?;
        Ok(AppState::new(conn))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}

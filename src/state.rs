use std::sync::Arc;

use crate::auth::repo::{PgUserStore, UserStore};
use crate::config::AppConfig;
use crate::db;

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let pool = db::connect_pool(&config.db)?;
        db::probe(&pool).await;

        let users = Arc::new(PgUserStore::new(pool)) as Arc<dyn UserStore>;
        Ok(Self { users, config })
    }

    #[cfg(test)]
    pub fn from_parts(users: Arc<dyn UserStore>, config: Arc<AppConfig>) -> Self {
        Self { users, config }
    }
}

//! Shared handler state

use std::sync::Arc;

use crate::config::Config;
use crate::database::Database;
use crate::error::Result;
use crate::metrics::HitCounter;
use crate::moderation::ContentFilter;

/// State shared by every handler (cheap to clone)
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub hits: Arc<HitCounter>,
    pub filter: Arc<ContentFilter>,
}

impl AppState {
    pub fn new(db: Database, filter: ContentFilter) -> Self {
        Self {
            db: Arc::new(db),
            hits: Arc::new(HitCounter::new()),
            filter: Arc::new(filter),
        }
    }

    /// Open the database and build the filter from `config`
    pub fn from_config(config: &Config) -> Result<Self> {
        let db = Database::open(&config.db_path)?;
        Ok(Self::new(db, ContentFilter::from_config(config)))
    }
}

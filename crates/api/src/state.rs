use std::sync::Arc;

use crate::config::ServerConfig;
use crate::storage::MediaStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: hotel_db::DbPool,
    /// On-disk store for uploaded images.
    pub media: Arc<MediaStore>,
}

impl AppState {
    pub fn new(pool: hotel_db::DbPool, config: &ServerConfig) -> Self {
        let media = Arc::new(MediaStore::new(
            config.media_root.clone(),
            config.media_url.clone(),
        ));
        Self { pool, media }
    }
}

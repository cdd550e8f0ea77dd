use std::sync::Arc;

use crate::adapters::games_mem::InMemoryGames;
use crate::repos::games::GameStore;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// Game storage shared by every worker
    pub games: Arc<dyn GameStore>,
}

impl AppState {
    pub fn new(games: Arc<dyn GameStore>) -> Self {
        Self { games }
    }

    /// State backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryGames::new()))
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

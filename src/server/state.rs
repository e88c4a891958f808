//! Server shared state
//!
//! Holds the catalog, configuration and the live games.

use crate::catalog::Catalog;
use crate::config::Config;
use crate::constants::game::MAX_LIVE_GAMES;
use crate::game::Game;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::debug;
use uuid::Uuid;

/// A stored game and its insertion order
struct GameEntry {
    seq: u64,
    game: Arc<Mutex<Game>>,
}

#[derive(Default)]
struct GameStore {
    next_seq: u64,
    entries: HashMap<Uuid, GameEntry>,
}

impl GameStore {
    /// Free room for one more game
    ///
    /// Finished games and games from before `today` go first. If the store
    /// is still full, the oldest games are dropped. A game whose lock is
    /// held is being played and counts as live.
    fn make_room(&mut self, today: NaiveDate) {
        if self.entries.len() < MAX_LIVE_GAMES {
            return;
        }

        let before = self.entries.len();
        self.entries.retain(|_, entry| match entry.game.try_lock() {
            Ok(game) => !game.status().is_terminal() && game.date() >= today,
            Err(_) => true,
        });

        while self.entries.len() >= MAX_LIVE_GAMES {
            let oldest = self
                .entries
                .iter()
                .min_by_key(|(_, entry)| entry.seq)
                .map(|(id, _)| *id);
            match oldest {
                Some(id) => {
                    self.entries.remove(&id);
                }
                None => break,
            }
        }

        debug!(evicted = before - self.entries.len(), "Evicted games");
    }
}

/// Shared state for the HTTP server
///
/// Each game sits behind its own mutex; a guess holds it for the whole
/// evaluation, so two concurrent guesses on one game are serialized.
pub struct AppState {
    /// Configuration
    pub config: Config,

    /// Guessable locations, read-only after startup
    pub catalog: Arc<Catalog>,

    games: RwLock<GameStore>,
}

impl AppState {
    /// Create new application state
    pub fn new(config: Config, catalog: Catalog) -> Self {
        Self {
            config,
            catalog: Arc::new(catalog),
            games: RwLock::new(GameStore::default()),
        }
    }

    /// Register a game and return its id
    ///
    /// At most [`MAX_LIVE_GAMES`] are kept; see [`GameStore::make_room`].
    pub async fn insert_game(&self, game: Game, today: NaiveDate) -> Uuid {
        let id = Uuid::new_v4();
        let mut store = self.games.write().await;
        store.make_room(today);

        let seq = store.next_seq;
        store.next_seq += 1;
        store.entries.insert(
            id,
            GameEntry {
                seq,
                game: Arc::new(Mutex::new(game)),
            },
        );
        id
    }

    /// Look up a game by id
    pub async fn game(&self, id: &Uuid) -> Option<Arc<Mutex<Game>>> {
        self.games
            .read()
            .await
            .entries
            .get(id)
            .map(|entry| entry.game.clone())
    }

    /// Number of live games
    pub async fn game_count(&self) -> usize {
        self.games.read().await.entries.len()
    }
}

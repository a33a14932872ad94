use serde::{Deserialize, Serialize};
use crate::gateway::GatewayPublisherVia;

pub const DEFAULT_COVER: &str = "https://placehold.co/100x120";
pub const MAX_BOOK_ID: u64 = 1_000_000_000;

// Identifiable defines common traits that can be shared by shelved objects
pub trait Identifiable : Sync + Send {
    fn id(&self) -> u64;
}

// IdPolicy decides what happens when a new book id is already on the shelf
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy, clap::ValueEnum)]
pub enum IdPolicy {
    // regenerate colliding generated ids and reject colliding explicit ids
    Unique,
    // append regardless; lookups only reach the first match
    AllowCollisions,
}

// Configuration abstracts config options for the shelf
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub shelf_name: String,
    pub placeholder_cover: String,
    pub max_book_id: u64,
    pub id_policy: IdPolicy,
    pub id_attempts: usize,
    pub events: GatewayPublisherVia,
}

impl Configuration {
    pub fn new(shelf_name: &str) -> Self {
        Configuration {
            shelf_name: shelf_name.to_string(),
            placeholder_cover: DEFAULT_COVER.to_string(),
            max_book_id: MAX_BOOK_ID,
            id_policy: IdPolicy::Unique,
            id_attempts: 8,
            events: GatewayPublisherVia::Logs,
        }
    }

    pub fn with_id_policy(mut self, id_policy: IdPolicy) -> Self {
        self.id_policy = id_policy;
        self
    }

    pub fn with_events(mut self, events: GatewayPublisherVia) -> Self {
        self.events = events;
        self
    }

    pub fn with_placeholder_cover(mut self, cover: &str) -> Self {
        self.placeholder_cover = cover.to_string();
        self
    }
}

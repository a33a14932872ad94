use serde::{Deserialize, Serialize};

pub mod discard;
pub mod events;
pub mod logs;
pub mod factory;

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize, clap::ValueEnum)]
pub enum GatewayPublisherVia {
    Logs,
    Discard,
}

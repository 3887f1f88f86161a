//! # bridge-core
//!
//! Bot-side logic for the GitHub-Discord bridge: the chat command grammar,
//! bot settings, Discord credentials and reply formatting. Nothing here
//! talks to the network.

pub mod command;
pub mod config;
pub mod error;
pub mod reply;
pub mod settings;

pub use command::Command;
pub use config::DiscordConfig;
pub use error::{Error, Result};
pub use settings::Settings;

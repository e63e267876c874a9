//! Assemble a compact pokemon record from PokeAPI: base stats, types, and
//! the first listed move with its power, type and English effect text.

pub mod config;
pub mod error;
pub mod fetch;
pub mod models;
pub mod transport;
pub mod utils;

pub use config::Config;
pub use error::{Error, Result};
pub use fetch::{fetch_full_data, fetch_outcome, pokemon_url, FetchOutcome, Stage};
pub use models::{BaseStats, MoveRecord, PokemonRecord, Stat};
pub use transport::{Response, Transport};

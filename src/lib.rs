//! Sky Runner client: the game state store, its collaborators, and the Yew views
//! that read from and dispatch into it.

pub mod components;
pub mod input;
pub mod leaderboard;
pub mod model;
pub mod session;
pub mod settings;
pub mod shop;
pub mod sound;
pub mod state;
pub mod store;
pub mod upgrades;
pub mod util;
pub mod wallet;

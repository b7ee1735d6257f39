pub mod app;
pub mod game_over_overlay;
pub mod home_view;
pub mod leaderboard_view;
pub mod profile_view;
pub mod run_view;
pub mod session_view;
pub mod settings_modal;
pub mod shop_view;
pub mod stats_panel;
pub mod top_up_view;
pub mod upgrades_view;

pub use app::{App, Page};

pub mod pose;
pub mod track;

pub use pose::{JUMP_MS, PlayerPose};
pub use track::{LANES, touched};

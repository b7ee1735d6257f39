//! Profile bootstrap for guest, returning and newly signed-up players.
//! None of these are backed by an account system; they only seed the profile.

use crate::model::{GameAction, ProfilePatch};

pub const GUEST_NAME: &str = "Guest Player";
pub const RETURNING_BONUS_COINS: u64 = 2_500;
pub const RETURNING_BONUS_DIAMONDS: u64 = 25;
pub const WELCOME_BONUS_COINS: u64 = 1_000;
pub const WELCOME_BONUS_DIAMONDS: u64 = 10;
const SUFFIX_LEN: usize = 9;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("invalid email address: {0:?}")]
    InvalidEmail(String),
    #[error("display name must not be empty")]
    InvalidName,
}

pub fn guest_session(now_ms: u64) -> GameAction {
    GameAction::UpdateProfile(ProfilePatch {
        id: Some(format!("guest_{now_ms}")),
        name: Some(GUEST_NAME.to_string()),
        coins: Some(0),
        diamonds: Some(0),
        ..Default::default()
    })
}

pub fn returning_player(
    email: &str,
    now_ms: u64,
    suffix: &str,
) -> Result<GameAction, SessionError> {
    let email = email.trim();
    let name = email.split('@').next().unwrap_or_default().trim();
    if !email.contains('@') || name.is_empty() {
        return Err(SessionError::InvalidEmail(email.to_string()));
    }
    Ok(GameAction::UpdateProfile(ProfilePatch {
        id: Some(player_id(now_ms, suffix)),
        name: Some(name.to_string()),
        coins: Some(RETURNING_BONUS_COINS),
        diamonds: Some(RETURNING_BONUS_DIAMONDS),
        ..Default::default()
    }))
}

pub fn new_player(name: &str, now_ms: u64, suffix: &str) -> Result<GameAction, SessionError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(SessionError::InvalidName);
    }
    Ok(GameAction::UpdateProfile(ProfilePatch {
        id: Some(player_id(now_ms, suffix)),
        name: Some(name.to_string()),
        coins: Some(WELCOME_BONUS_COINS),
        diamonds: Some(WELCOME_BONUS_DIAMONDS),
        ..Default::default()
    }))
}

fn player_id(now_ms: u64, suffix: &str) -> String {
    format!("player_{now_ms}_{suffix}")
}

/// Nine base-36 characters taken from the fractional digits of `seed`,
/// which is expected in `[0, 1)` like `Math.random()`.
pub fn random_suffix(seed: f64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut frac = seed.fract().abs();
    let mut out = String::with_capacity(SUFFIX_LEN);
    for _ in 0..SUFFIX_LEN {
        frac *= 36.0;
        let d = (frac.floor() as usize).min(35);
        out.push(DIGITS[d] as char);
        frac = frac.fract();
    }
    out
}

//! Core data models for Sky Runner.
//! The whole client state lives in one `GameState` tree that only changes
//! through `GameAction`s.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;
use yew::Reducible;

use crate::util::cwarn;
use crate::wallet::is_decimal_balance;

pub const BASE_RUN_SPEED: u32 = 10;
pub const SPEED_PER_LEVEL: u32 = 2;
pub const STARTING_LIVES: u32 = 3;
/// Score points per unit of distance.
pub const SCORE_PER_DISTANCE: u64 = 10;
/// Score points per experience point awarded when a run ends.
pub const SCORE_PER_EXPERIENCE: u64 = 100;
pub const XP_PER_LEVEL: u64 = 1000;
pub const HOME_PAGE: &str = "home";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfile {
    pub id: String,
    pub name: String,
    pub level: u32,
    pub experience: u64,
    pub coins: u64,
    pub diamonds: u64,
    pub high_score: u64,
    pub total_distance: u64,
    pub games_played: u64,
    pub achievements: BTreeSet<String>,
}

impl Default for PlayerProfile {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: "Player".to_string(),
            level: 1,
            experience: 0,
            coins: 0,
            diamonds: 0,
            high_score: 0,
            total_distance: 0,
            games_played: 0,
            achievements: BTreeSet::new(),
        }
    }
}

impl PlayerProfile {
    pub fn xp_for_next_level(&self) -> u64 {
        u64::from(self.level).saturating_mul(XP_PER_LEVEL)
    }

    pub fn xp_to_next_level(&self) -> u64 {
        self.xp_for_next_level().saturating_sub(self.experience)
    }

    /// Only a strictly higher score counts as a new best.
    pub fn beats_high_score(&self, score: u64) -> bool {
        score > self.high_score
    }

    pub fn level_progress_percent(&self) -> f64 {
        let needed = self.xp_for_next_level();
        if needed == 0 {
            return 100.0;
        }
        (self.experience as f64 / needed as f64 * 100.0).min(100.0)
    }
}

/// Partial profile used by `GameAction::UpdateProfile`. Only `Some` fields are merged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfilePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coins: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diamonds: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high_score: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_distance: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub games_played: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub achievements: Option<BTreeSet<String>>,
}

impl ProfilePatch {
    fn merge_into(self, profile: &mut PlayerProfile) {
        if let Some(v) = self.id {
            profile.id = v;
        }
        if let Some(v) = self.name {
            profile.name = v;
        }
        if let Some(v) = self.level {
            profile.level = v;
        }
        if let Some(v) = self.experience {
            profile.experience = v;
        }
        if let Some(v) = self.coins {
            profile.coins = v;
        }
        if let Some(v) = self.diamonds {
            profile.diamonds = v;
        }
        if let Some(v) = self.high_score {
            profile.high_score = v;
        }
        if let Some(v) = self.total_distance {
            profile.total_distance = v;
        }
        if let Some(v) = self.games_played {
            profile.games_played = v;
        }
        if let Some(v) = self.achievements {
            profile.achievements = v;
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunState {
    pub is_active: bool,
    pub score: u64,
    pub coins_this_run: u64,
    pub diamonds_this_run: u64,
    /// Forward speed, fixed when the run starts.
    pub speed: u32,
    pub lives: u32,
}

impl Default for RunState {
    fn default() -> Self {
        Self {
            is_active: false,
            score: 0,
            coins_this_run: 0,
            diamonds_this_run: 0,
            speed: BASE_RUN_SPEED,
            lives: STARTING_LIVES,
        }
    }
}

impl RunState {
    pub fn distance(&self) -> u64 {
        self.score / SCORE_PER_DISTANCE
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Skill {
    Speed,
    Magnetism,
    CoinMultiplier,
    Shield,
    Jump,
    DoubleJump,
}

impl Skill {
    pub const ALL: [Skill; 6] = [
        Skill::Speed,
        Skill::Magnetism,
        Skill::CoinMultiplier,
        Skill::Shield,
        Skill::Jump,
        Skill::DoubleJump,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Skill::Speed => "speed",
            Skill::Magnetism => "magnetism",
            Skill::CoinMultiplier => "coinMultiplier",
            Skill::Shield => "shield",
            Skill::Jump => "jump",
            Skill::DoubleJump => "doubleJump",
        }
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeLevels {
    pub speed: u32,
    pub magnetism: u32,
    pub coin_multiplier: u32,
    pub shield: u32,
    pub jump: u32,
    pub double_jump_unlocked: bool,
}

impl Default for UpgradeLevels {
    fn default() -> Self {
        Self {
            speed: 1,
            magnetism: 1,
            coin_multiplier: 1,
            shield: 1,
            jump: 1,
            double_jump_unlocked: false,
        }
    }
}

impl UpgradeLevels {
    /// Current level of a skill. Double jump reads as 0 (locked) or 1 (unlocked).
    pub fn level(&self, skill: Skill) -> u32 {
        match skill {
            Skill::Speed => self.speed,
            Skill::Magnetism => self.magnetism,
            Skill::CoinMultiplier => self.coin_multiplier,
            Skill::Shield => self.shield,
            Skill::Jump => self.jump,
            Skill::DoubleJump => u32::from(self.double_jump_unlocked),
        }
    }

    fn set_level(&mut self, skill: Skill, level: u32) {
        match skill {
            Skill::Speed => self.speed = level,
            Skill::Magnetism => self.magnetism = level,
            Skill::CoinMultiplier => self.coin_multiplier = level,
            Skill::Shield => self.shield = level,
            Skill::Jump => self.jump = level,
            Skill::DoubleJump => self.double_jump_unlocked = level > 0,
        }
    }

    pub fn run_speed(&self) -> u32 {
        BASE_RUN_SPEED.saturating_add(self.speed.saturating_sub(1).saturating_mul(SPEED_PER_LEVEL))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletLinkState {
    pub is_connected: bool,
    pub address: Option<String>,
    /// Decimal-formatted balance, "0" while disconnected.
    pub balance: String,
}

impl Default for WalletLinkState {
    fn default() -> Self {
        Self {
            is_connected: false,
            address: None,
            balance: "0".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiState {
    pub is_paused: bool,
    pub show_menu: bool,
    pub current_page: String,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            is_paused: false,
            show_menu: false,
            current_page: HOME_PAGE.to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub player: PlayerProfile,
    pub run: RunState,
    pub upgrades: UpgradeLevels,
    pub wallet: WalletLinkState,
    pub ui: UiState,
}

// ---------------- Reducer & Actions -----------------

/// Wire tags match the action objects emitted by the web client (`{"type", "payload"}`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum GameAction {
    #[serde(rename = "START_GAME")]
    StartRun,
    #[serde(rename = "END_GAME")]
    EndRun,
    #[serde(rename = "UPDATE_SCORE")]
    UpdateScore(u64),
    #[serde(rename = "COLLECT_COIN")]
    CollectCoin(u64),
    #[serde(rename = "COLLECT_DIAMOND")]
    CollectDiamond(u64),
    #[serde(rename = "PAUSE_GAME")]
    PauseRun,
    #[serde(rename = "RESUME_GAME")]
    ResumeRun,
    #[serde(rename = "CONNECT_WALLET")]
    ConnectWallet { address: String, balance: String },
    #[serde(rename = "DISCONNECT_WALLET")]
    DisconnectWallet,
    #[serde(rename = "UPDATE_PLAYER")]
    UpdateProfile(ProfilePatch),
    #[serde(rename = "UPGRADE_SKILL")]
    UpgradeSkill { skill: Skill, level: u32 },
    #[serde(rename = "SET_PAGE")]
    SetPage(String),
    /// Any tag outside the set above. Applying it changes nothing.
    #[serde(other)]
    Unrecognized,
}

const KNOWN_TAGS: [&str; 12] = [
    "START_GAME",
    "END_GAME",
    "UPDATE_SCORE",
    "COLLECT_COIN",
    "COLLECT_DIAMOND",
    "PAUSE_GAME",
    "RESUME_GAME",
    "CONNECT_WALLET",
    "DISCONNECT_WALLET",
    "UPDATE_PLAYER",
    "UPGRADE_SKILL",
    "SET_PAGE",
];

impl GameAction {
    /// Decodes a `{"type", "payload"}` object. Unknown tags become `Unrecognized`
    /// whatever their payload looks like.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let value: serde_json::Value = serde_json::from_str(raw)?;
        let known = value
            .get("type")
            .and_then(|t| t.as_str())
            .is_some_and(|t| KNOWN_TAGS.contains(&t));
        if !known {
            return Ok(GameAction::Unrecognized);
        }
        serde_json::from_value(value)
    }

    pub fn name(&self) -> &'static str {
        match self {
            GameAction::StartRun => "StartRun",
            GameAction::EndRun => "EndRun",
            GameAction::UpdateScore(_) => "UpdateScore",
            GameAction::CollectCoin(_) => "CollectCoin",
            GameAction::CollectDiamond(_) => "CollectDiamond",
            GameAction::PauseRun => "PauseRun",
            GameAction::ResumeRun => "ResumeRun",
            GameAction::ConnectWallet { .. } => "ConnectWallet",
            GameAction::DisconnectWallet => "DisconnectWallet",
            GameAction::UpdateProfile(_) => "UpdateProfile",
            GameAction::UpgradeSkill { .. } => "UpgradeSkill",
            GameAction::SetPage(_) => "SetPage",
            GameAction::Unrecognized => "Unrecognized",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("{action} rejected: {reason}")]
    InvalidTransition {
        action: &'static str,
        reason: &'static str,
    },
    #[error("score cannot drop from {current} to {requested}")]
    ScoreRegression { current: u64, requested: u64 },
    #[error("{field} out of range: {value:?}")]
    OutOfRangeValue { field: &'static str, value: String },
    #[error("{skill} cannot go from level {current} to {requested}")]
    NonSequentialUpgrade {
        skill: Skill,
        current: u32,
        requested: u32,
    },
}

fn invalid(action: &'static str, reason: &'static str) -> GameError {
    GameError::InvalidTransition { action, reason }
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `action` against the current state and returns the next state.
    pub fn apply(&self, action: GameAction) -> Result<GameState, GameError> {
        use GameAction::*;
        let name = action.name();
        let mut new = self.clone();
        match action {
            StartRun => {
                if self.run.is_active {
                    return Err(invalid(name, "a run is already active"));
                }
                new.run = RunState {
                    is_active: true,
                    speed: self.upgrades.run_speed(),
                    ..RunState::default()
                };
                new.ui.is_paused = false;
            }
            EndRun => {
                if !self.run.is_active {
                    return Err(invalid(name, "no active run"));
                }
                let run = &self.run;
                let p = &mut new.player;
                p.high_score = p.high_score.max(run.score);
                p.coins = p.coins.saturating_add(run.coins_this_run);
                p.diamonds = p.diamonds.saturating_add(run.diamonds_this_run);
                p.total_distance = p.total_distance.saturating_add(run.distance());
                p.games_played = p.games_played.saturating_add(1);
                p.experience = p
                    .experience
                    .saturating_add(run.score / SCORE_PER_EXPERIENCE);
                new.run.is_active = false;
                new.ui.is_paused = false;
            }
            UpdateScore(score) => {
                if !self.run.is_active {
                    return Err(invalid(name, "no active run"));
                }
                if score < self.run.score {
                    return Err(GameError::ScoreRegression {
                        current: self.run.score,
                        requested: score,
                    });
                }
                new.run.score = score;
            }
            CollectCoin(value) => {
                if !self.run.is_active {
                    return Err(invalid(name, "no active run"));
                }
                let credited = value.saturating_mul(u64::from(self.upgrades.coin_multiplier));
                new.run.coins_this_run = new.run.coins_this_run.saturating_add(credited);
            }
            CollectDiamond(value) => {
                if !self.run.is_active {
                    return Err(invalid(name, "no active run"));
                }
                new.run.diamonds_this_run = new.run.diamonds_this_run.saturating_add(value);
            }
            PauseRun => {
                if !self.run.is_active {
                    return Err(invalid(name, "no active run"));
                }
                if self.ui.is_paused {
                    return Err(invalid(name, "already paused"));
                }
                new.ui.is_paused = true;
            }
            ResumeRun => {
                if !self.run.is_active {
                    return Err(invalid(name, "no active run"));
                }
                if !self.ui.is_paused {
                    return Err(invalid(name, "not paused"));
                }
                new.ui.is_paused = false;
            }
            ConnectWallet { address, balance } => {
                if address.trim().is_empty() {
                    return Err(GameError::OutOfRangeValue {
                        field: "address",
                        value: address,
                    });
                }
                if !is_decimal_balance(&balance) {
                    return Err(GameError::OutOfRangeValue {
                        field: "balance",
                        value: balance,
                    });
                }
                new.wallet = WalletLinkState {
                    is_connected: true,
                    address: Some(address),
                    balance,
                };
            }
            DisconnectWallet => {
                if !self.wallet.is_connected {
                    return Err(invalid(name, "wallet is not connected"));
                }
                new.wallet = WalletLinkState::default();
            }
            UpdateProfile(patch) => {
                if patch.level == Some(0) {
                    return Err(GameError::OutOfRangeValue {
                        field: "level",
                        value: "0".to_string(),
                    });
                }
                patch.merge_into(&mut new.player);
            }
            UpgradeSkill { skill, level } => {
                let current = self.upgrades.level(skill);
                let sequential = match skill {
                    Skill::DoubleJump => current == 0 && level == 1,
                    _ => current.checked_add(1) == Some(level),
                };
                if !sequential {
                    return Err(GameError::NonSequentialUpgrade {
                        skill,
                        current,
                        requested: level,
                    });
                }
                new.upgrades.set_level(skill, level);
            }
            SetPage(page) => {
                if page.trim().is_empty() {
                    return Err(GameError::OutOfRangeValue {
                        field: "page",
                        value: page,
                    });
                }
                new.ui.current_page = page;
            }
            Unrecognized => {}
        }
        Ok(new)
    }
}

impl Reducible for GameState {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        if matches!(action, GameAction::Unrecognized) {
            return self;
        }
        match self.apply(action) {
            Ok(new) => Rc::new(new),
            Err(err) => {
                cwarn(&format!("dispatch ignored: {err}"));
                self
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active() -> GameState {
        GameState::new().apply(GameAction::StartRun).unwrap()
    }

    #[test]
    fn start_run_resets_run_and_derives_speed() {
        let mut s = active();
        s = s.apply(GameAction::CollectCoin(7)).unwrap();
        s = s.apply(GameAction::CollectDiamond(2)).unwrap();
        s = s.apply(GameAction::PauseRun).unwrap();
        s = s.apply(GameAction::EndRun).unwrap();
        s = s.apply(GameAction::UpgradeSkill { skill: Skill::Speed, level: 2 }).unwrap();
        s = s.apply(GameAction::UpgradeSkill { skill: Skill::Speed, level: 3 }).unwrap();

        let s = s.apply(GameAction::StartRun).unwrap();
        assert!(s.run.is_active);
        assert_eq!(s.run.coins_this_run, 0);
        assert_eq!(s.run.diamonds_this_run, 0);
        assert_eq!(s.run.score, 0);
        assert_eq!(s.run.lives, STARTING_LIVES);
        assert_eq!(s.run.speed, 14);
        assert!(!s.ui.is_paused);
    }

    #[test]
    fn full_run_scenario_credits_profile() {
        let s = GameState::new().apply(GameAction::StartRun).unwrap();
        assert!(s.run.is_active);
        assert_eq!(s.run.speed, 10);

        let s = s.apply(GameAction::CollectCoin(10)).unwrap();
        assert_eq!(s.run.coins_this_run, 10);

        let s = s.apply(GameAction::UpdateScore(100)).unwrap();
        assert_eq!(s.run.score, 100);
        assert_eq!(s.run.distance(), 10);

        let s = s.apply(GameAction::EndRun).unwrap();
        assert!(!s.run.is_active);
        assert_eq!(s.player.high_score, 100);
        assert_eq!(s.player.coins, 10);
        assert_eq!(s.player.games_played, 1);
        assert_eq!(s.player.experience, 1);
        assert_eq!(s.player.total_distance, 10);
        // finished run stays inspectable until the next start
        assert_eq!(s.run.score, 100);
    }

    #[test]
    fn coin_multiplier_applies_at_collection() {
        let s = GameState::new()
            .apply(GameAction::UpgradeSkill { skill: Skill::CoinMultiplier, level: 2 })
            .unwrap()
            .apply(GameAction::StartRun)
            .unwrap()
            .apply(GameAction::CollectCoin(10))
            .unwrap();
        assert_eq!(s.run.coins_this_run, 20);
    }

    #[test]
    fn coins_sum_values_times_multiplier() {
        let mut s = active();
        let values = [0, 3, 10, 25, 1];
        for v in values {
            s = s.apply(GameAction::CollectCoin(v)).unwrap();
        }
        assert_eq!(s.run.coins_this_run, values.iter().sum::<u64>());
    }

    #[test]
    fn coins_sum_values_times_multiplier_above_one() {
        let mut s = GameState::new();
        for level in [2, 3] {
            s = s
                .apply(GameAction::UpgradeSkill { skill: Skill::CoinMultiplier, level })
                .unwrap();
        }
        s = s.apply(GameAction::StartRun).unwrap();
        let values = [1, 10, 0, 7];
        for v in values {
            s = s.apply(GameAction::CollectCoin(v)).unwrap();
        }
        assert_eq!(s.run.coins_this_run, values.iter().map(|v| v * 3).sum::<u64>());
        assert_eq!(s.run.coins_this_run, 54);
    }

    #[test]
    fn start_run_while_active_is_rejected() {
        let s = active().apply(GameAction::UpdateScore(40)).unwrap();
        assert!(matches!(
            s.apply(GameAction::StartRun),
            Err(GameError::InvalidTransition { action: "StartRun", .. })
        ));
    }

    #[test]
    fn resume_requires_pause() {
        assert_eq!(
            active().apply(GameAction::ResumeRun),
            Err(GameError::InvalidTransition { action: "ResumeRun", reason: "not paused" })
        );
    }

    #[test]
    fn disconnect_requires_connected_wallet() {
        assert!(matches!(
            GameState::new().apply(GameAction::DisconnectWallet),
            Err(GameError::InvalidTransition { action: "DisconnectWallet", .. })
        ));
    }

    #[test]
    fn profile_level_zero_is_rejected() {
        let patch = ProfilePatch { level: Some(0), coins: Some(5), ..Default::default() };
        assert_eq!(
            GameState::new().apply(GameAction::UpdateProfile(patch)),
            Err(GameError::OutOfRangeValue { field: "level", value: "0".into() })
        );
    }

    #[test]
    fn ending_a_paused_run_clears_pause() {
        let s = active()
            .apply(GameAction::PauseRun)
            .unwrap()
            .apply(GameAction::EndRun)
            .unwrap();
        assert!(!s.run.is_active);
        assert!(!s.ui.is_paused);
    }

    #[test]
    fn distance_tracks_score() {
        let mut s = active();
        for score in [0, 9, 10, 19, 255, 1001] {
            s = s.apply(GameAction::UpdateScore(score)).unwrap();
            assert_eq!(s.run.distance(), score / 10);
        }
    }

    #[test]
    fn score_regression_is_rejected() {
        let s = active().apply(GameAction::UpdateScore(50)).unwrap();
        assert_eq!(
            s.apply(GameAction::UpdateScore(40)),
            Err(GameError::ScoreRegression { current: 50, requested: 40 })
        );
        assert!(s.apply(GameAction::UpdateScore(50)).is_ok());
    }

    #[test]
    fn high_score_never_decreases() {
        let s = active()
            .apply(GameAction::UpdateScore(300))
            .unwrap()
            .apply(GameAction::EndRun)
            .unwrap();
        let s = s.apply(GameAction::StartRun).unwrap().apply(GameAction::EndRun).unwrap();
        assert_eq!(s.player.high_score, 300);
        assert_eq!(s.player.games_played, 2);
    }

    #[test]
    fn second_end_run_does_not_double_credit() {
        let s = active()
            .apply(GameAction::CollectCoin(5))
            .unwrap()
            .apply(GameAction::EndRun)
            .unwrap();
        assert!(matches!(
            s.apply(GameAction::EndRun),
            Err(GameError::InvalidTransition { action: "EndRun", .. })
        ));
        assert_eq!(s.player.coins, 5);
    }

    #[test]
    fn collection_requires_active_run() {
        let s = GameState::new();
        assert!(s.apply(GameAction::CollectCoin(1)).is_err());
        assert!(s.apply(GameAction::CollectDiamond(1)).is_err());
        assert!(s.apply(GameAction::UpdateScore(1)).is_err());
        assert!(s.apply(GameAction::PauseRun).is_err());
    }

    #[test]
    fn diamonds_ignore_multiplier() {
        let s = GameState::new()
            .apply(GameAction::UpgradeSkill { skill: Skill::CoinMultiplier, level: 2 })
            .unwrap()
            .apply(GameAction::StartRun)
            .unwrap()
            .apply(GameAction::CollectDiamond(3))
            .unwrap();
        assert_eq!(s.run.diamonds_this_run, 3);
    }

    #[test]
    fn pause_and_resume_toggle_flag() {
        let s = active().apply(GameAction::PauseRun).unwrap();
        assert!(s.ui.is_paused);
        assert!(s.apply(GameAction::PauseRun).is_err());
        let s = s.apply(GameAction::ResumeRun).unwrap();
        assert!(!s.ui.is_paused);
    }

    #[test]
    fn wallet_connect_then_disconnect_restores_initial_shape() {
        let s = GameState::new()
            .apply(GameAction::ConnectWallet {
                address: "0xabc".into(),
                balance: "1.25".into(),
            })
            .unwrap();
        assert!(s.wallet.is_connected);
        assert_eq!(s.wallet.address.as_deref(), Some("0xabc"));
        let s = s.apply(GameAction::DisconnectWallet).unwrap();
        assert_eq!(s.wallet, WalletLinkState::default());
        assert_eq!(s.wallet.balance, "0");
        assert_eq!(s.wallet.address, None);
    }

    #[test]
    fn wallet_connect_validates_values() {
        let s = GameState::new();
        assert!(matches!(
            s.apply(GameAction::ConnectWallet { address: " ".into(), balance: "1".into() }),
            Err(GameError::OutOfRangeValue { field: "address", .. })
        ));
        assert!(matches!(
            s.apply(GameAction::ConnectWallet { address: "0x1".into(), balance: "-1".into() }),
            Err(GameError::OutOfRangeValue { field: "balance", .. })
        ));
    }

    #[test]
    fn update_profile_merges_only_given_fields() {
        let s = GameState::new()
            .apply(GameAction::UpdateProfile(ProfilePatch {
                id: Some("guest_1".into()),
                coins: Some(40),
                ..Default::default()
            }))
            .unwrap();
        assert_eq!(s.player.id, "guest_1");
        assert_eq!(s.player.coins, 40);
        assert_eq!(s.player.name, "Player");
        assert_eq!(s.player.level, 1);
    }

    #[test]
    fn upgrade_skill_requires_single_steps() {
        let s = GameState::new();
        assert_eq!(
            s.apply(GameAction::UpgradeSkill { skill: Skill::Jump, level: 3 }),
            Err(GameError::NonSequentialUpgrade { skill: Skill::Jump, current: 1, requested: 3 })
        );
        let s = s.apply(GameAction::UpgradeSkill { skill: Skill::DoubleJump, level: 1 }).unwrap();
        assert!(s.upgrades.double_jump_unlocked);
        assert!(s.apply(GameAction::UpgradeSkill { skill: Skill::DoubleJump, level: 1 }).is_err());
    }

    #[test]
    fn set_page_updates_ui() {
        let s = GameState::new().apply(GameAction::SetPage("shop".into())).unwrap();
        assert_eq!(s.ui.current_page, "shop");
        assert!(s.apply(GameAction::SetPage(String::new())).is_err());
    }

    #[test]
    fn unrecognized_action_returns_same_state() {
        let state = Rc::new(active());
        let next = state.clone().reduce(GameAction::Unrecognized);
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn rejected_action_returns_same_state() {
        let state = Rc::new(GameState::new());
        let next = state.clone().reduce(GameAction::EndRun);
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn actions_decode_from_client_wire_format() {
        let a = GameAction::from_json(r#"{"type":"UPDATE_SCORE","payload":120}"#).unwrap();
        assert_eq!(a, GameAction::UpdateScore(120));
        let a = GameAction::from_json(r#"{"type":"START_GAME"}"#).unwrap();
        assert_eq!(a, GameAction::StartRun);
        let a = GameAction::from_json(
            r#"{"type":"UPGRADE_SKILL","payload":{"skill":"coinMultiplier","level":2}}"#,
        )
        .unwrap();
        assert_eq!(a, GameAction::UpgradeSkill { skill: Skill::CoinMultiplier, level: 2 });
        let a = GameAction::from_json(
            r#"{"type":"UPDATE_PLAYER","payload":{"id":"p1","email":"a@b.c","coins":2500}}"#,
        )
        .unwrap();
        assert_eq!(
            a,
            GameAction::UpdateProfile(ProfilePatch {
                id: Some("p1".into()),
                coins: Some(2500),
                ..Default::default()
            })
        );
    }

    #[test]
    fn unknown_wire_tags_decode_as_unrecognized() {
        let a = GameAction::from_json(r#"{"type":"SPAWN_BOSS","payload":{"hp":9}}"#).unwrap();
        assert_eq!(a, GameAction::Unrecognized);
        let a = GameAction::from_json(r#"{"payload":1}"#).unwrap();
        assert_eq!(a, GameAction::Unrecognized);
        assert!(GameAction::from_json("not json").is_err());
    }

    #[test]
    fn tying_the_best_is_not_a_new_best() {
        let before = active().apply(GameAction::UpdateScore(300)).unwrap();
        let best_before = before.player.clone();
        let after = before.apply(GameAction::EndRun).unwrap();
        assert!(best_before.beats_high_score(after.run.score));

        let again = after
            .apply(GameAction::StartRun)
            .unwrap()
            .apply(GameAction::UpdateScore(300))
            .unwrap();
        assert!(!again.player.beats_high_score(again.run.score));
        assert!(!PlayerProfile::default().beats_high_score(0));
    }

    #[test]
    fn profile_level_progress() {
        let p = PlayerProfile { level: 2, experience: 500, ..Default::default() };
        assert_eq!(p.xp_for_next_level(), 2000);
        assert_eq!(p.xp_to_next_level(), 1500);
        assert!((p.level_progress_percent() - 25.0).abs() < 1e-9);
    }
}

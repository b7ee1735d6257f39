//! Translation of raw keys and render-loop collisions into store actions.

use crate::model::{GameAction, GameState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    MoveLeft,
    MoveRight,
    Jump,
    TogglePause,
}

pub fn intent_for_key(key: &str) -> Option<Intent> {
    match key {
        "ArrowLeft" | "a" | "A" => Some(Intent::MoveLeft),
        "ArrowRight" | "d" | "D" => Some(Intent::MoveRight),
        "ArrowUp" | "w" | "W" | " " => Some(Intent::Jump),
        "Escape" | "p" | "P" => Some(Intent::TogglePause),
        _ => None,
    }
}

/// Keys whose browser default (scrolling) is suppressed during a run.
pub fn is_game_key(key: &str) -> bool {
    matches!(key, "ArrowUp" | "ArrowDown" | "ArrowLeft" | "ArrowRight" | " ")
}

/// Game keys stop scrolling the page only while a run is live.
pub fn suppresses_default(state: &GameState, key: &str) -> bool {
    state.run.is_active && !state.ui.is_paused && is_game_key(key)
}

/// Whether an intent should reach the run at all given the current state.
pub fn accepts(state: &GameState, intent: Intent) -> bool {
    if !state.run.is_active {
        return false;
    }
    match intent {
        Intent::TogglePause => true,
        _ => !state.ui.is_paused,
    }
}

/// Store action for an intent; movement is local to the view and yields none.
pub fn intent_action(state: &GameState, intent: Intent) -> Option<GameAction> {
    if !accepts(state, intent) {
        return None;
    }
    match intent {
        Intent::TogglePause if state.ui.is_paused => Some(GameAction::ResumeRun),
        Intent::TogglePause => Some(GameAction::PauseRun),
        _ => None,
    }
}

pub const DEFAULT_COIN_VALUE: u64 = 10;
pub const DEFAULT_DIAMOND_VALUE: u64 = 1;

/// Something the runner touched this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pickup {
    Coin { value: Option<u64> },
    Diamond { value: Option<u64> },
    Obstacle,
    PowerUp,
}

pub fn collision_action(pickup: Pickup) -> Option<GameAction> {
    match pickup {
        Pickup::Coin { value } => {
            Some(GameAction::CollectCoin(value.unwrap_or(DEFAULT_COIN_VALUE)))
        }
        Pickup::Diamond { value } => {
            Some(GameAction::CollectDiamond(value.unwrap_or(DEFAULT_DIAMOND_VALUE)))
        }
        Pickup::Obstacle => Some(GameAction::EndRun),
        Pickup::PowerUp => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::GameStore;

    #[test]
    fn keys_map_to_intents() {
        assert_eq!(intent_for_key("a"), Some(Intent::MoveLeft));
        assert_eq!(intent_for_key("ArrowRight"), Some(Intent::MoveRight));
        assert_eq!(intent_for_key(" "), Some(Intent::Jump));
        assert_eq!(intent_for_key("P"), Some(Intent::TogglePause));
        assert_eq!(intent_for_key("x"), None);
        assert!(is_game_key("ArrowDown"));
        assert!(!is_game_key("p"));
    }

    #[test]
    fn arrow_down_scroll_is_blocked_mid_run() {
        let mut store = GameStore::new();
        assert!(!suppresses_default(&store.state(), "ArrowDown"));

        store.dispatch(GameAction::StartRun).unwrap();
        assert_eq!(intent_for_key("ArrowDown"), None);
        assert!(suppresses_default(&store.state(), "ArrowDown"));
        assert!(suppresses_default(&store.state(), " "));
        assert!(!suppresses_default(&store.state(), "p"));

        store.dispatch(GameAction::PauseRun).unwrap();
        assert!(!suppresses_default(&store.state(), "ArrowDown"));
    }

    #[test]
    fn pause_toggles_only_during_a_run() {
        let mut store = GameStore::new();
        assert_eq!(intent_action(&store.state(), Intent::TogglePause), None);

        store.dispatch(GameAction::StartRun).unwrap();
        let action = intent_action(&store.state(), Intent::TogglePause).unwrap();
        assert_eq!(action, GameAction::PauseRun);
        store.dispatch(action).unwrap();

        assert!(!accepts(&store.state(), Intent::Jump));
        assert_eq!(
            intent_action(&store.state(), Intent::TogglePause),
            Some(GameAction::ResumeRun)
        );
    }

    #[test]
    fn collisions_feed_the_store() {
        let mut store = GameStore::new();
        store.dispatch(GameAction::StartRun).unwrap();
        for pickup in [
            Pickup::Coin { value: None },
            Pickup::Coin { value: Some(5) },
            Pickup::Diamond { value: None },
            Pickup::PowerUp,
        ] {
            if let Some(action) = collision_action(pickup) {
                store.dispatch(action).unwrap();
            }
        }
        assert_eq!(store.state().run.coins_this_run, 15);
        assert_eq!(store.state().run.diamonds_this_run, 1);

        store.dispatch(collision_action(Pickup::Obstacle).unwrap()).unwrap();
        assert!(!store.state().run.is_active);
        assert_eq!(store.state().player.coins, 15);
    }
}

//! Explicit owner of the game state for callers outside the component tree.
//! Components get the same reducer through `use_reducer` and a props handle.

use std::rc::Rc;

use crate::model::{GameAction, GameError, GameState};
use crate::util::cwarn;

/// Points added by each score tick of a running game.
pub const SCORE_TICK_POINTS: u64 = 10;
/// Score tick period in milliseconds.
pub const SCORE_TICK_MS: u32 = 100;

#[derive(Clone, Debug, Default)]
pub struct GameStore {
    state: Rc<GameState>,
}

impl GameStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: GameState) -> Self {
        Self { state: Rc::new(state) }
    }

    /// Immutable snapshot of the current state.
    pub fn state(&self) -> Rc<GameState> {
        Rc::clone(&self.state)
    }

    pub fn dispatch(&mut self, action: GameAction) -> Result<(), GameError> {
        if matches!(action, GameAction::Unrecognized) {
            return Ok(());
        }
        match self.state.apply(action) {
            Ok(new) => {
                self.state = Rc::new(new);
                Ok(())
            }
            Err(err) => {
                cwarn(&format!("dispatch rejected: {err}"));
                Err(err)
            }
        }
    }

    /// Applies every action or none of them.
    pub fn dispatch_all<I>(&mut self, actions: I) -> Result<(), GameError>
    where
        I: IntoIterator<Item = GameAction>,
    {
        let mut working = (*self.state).clone();
        for action in actions {
            working = working.apply(action)?;
        }
        self.state = Rc::new(working);
        Ok(())
    }

    /// Advances the score from the value held right now rather than from a
    /// caller's older snapshot. Does nothing while paused.
    pub fn tick_score(&mut self) -> Result<(), GameError> {
        if self.state.ui.is_paused {
            return Ok(());
        }
        let next = self.state.run.score.saturating_add(SCORE_TICK_POINTS);
        self.dispatch(GameAction::UpdateScore(next))
    }
}

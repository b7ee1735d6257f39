// Runner position kept by the run view between frames.
use crate::input::Intent;

pub const LANE_STEP: i32 = 2;
pub const LANE_LIMIT: i32 = 2;
pub const GROUND_Y: i32 = 1;
pub const JUMP_HEIGHT: i32 = 2;
/// How long the runner stays airborne.
pub const JUMP_MS: u32 = 600;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerPose {
    pub lane_x: i32,
    pub y: i32,
    pub jumping: bool,
}

impl Default for PlayerPose {
    fn default() -> Self {
        Self {
            lane_x: 0,
            y: GROUND_Y,
            jumping: false,
        }
    }
}

impl PlayerPose {
    /// Applies a movement intent. Returns true when a jump started, so the
    /// caller can schedule `land` after `JUMP_MS`.
    pub fn apply(&mut self, intent: Intent) -> bool {
        match intent {
            Intent::MoveLeft => self.lane_x = (self.lane_x - LANE_STEP).max(-LANE_LIMIT),
            Intent::MoveRight => self.lane_x = (self.lane_x + LANE_STEP).min(LANE_LIMIT),
            Intent::Jump if !self.jumping => {
                self.jumping = true;
                self.y += JUMP_HEIGHT;
                return true;
            }
            Intent::Jump | Intent::TogglePause => {}
        }
        false
    }

    pub fn land(&mut self) {
        self.y = GROUND_Y;
        self.jumping = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lanes_are_clamped() {
        let mut pose = PlayerPose::default();
        pose.apply(Intent::MoveLeft);
        pose.apply(Intent::MoveLeft);
        assert_eq!(pose.lane_x, -2);
        pose.apply(Intent::MoveRight);
        pose.apply(Intent::MoveRight);
        pose.apply(Intent::MoveRight);
        assert_eq!(pose.lane_x, 2);
    }

    #[test]
    fn no_second_jump_while_airborne() {
        let mut pose = PlayerPose::default();
        assert!(pose.apply(Intent::Jump));
        assert!(!pose.apply(Intent::Jump));
        assert_eq!(pose.y, 3);
        pose.land();
        assert_eq!(pose, PlayerPose::default());
    }
}

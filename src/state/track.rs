// Deterministic pickup layout along the track, keyed by distance.
// Stands in for the scene's collision callbacks until a renderer feeds them.
use crate::input::Pickup;
use crate::state::PlayerPose;

pub const LANES: [i32; 3] = [-2, 0, 2];
const COIN_EVERY: u64 = 3;
const DIAMOND_EVERY: u64 = 25;
const OBSTACLE_EVERY: u64 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnKind {
    Coin,
    Diamond,
    Obstacle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spawn {
    pub lane_x: i32,
    pub kind: SpawnKind,
}

fn lane(i: u64) -> i32 {
    LANES[(i % LANES.len() as u64) as usize]
}

/// Everything placed at `distance`. Nothing spawns at the start line.
pub fn spawns_at(distance: u64) -> Vec<Spawn> {
    let mut out = Vec::new();
    if distance == 0 {
        return out;
    }
    let obstacle = (distance % OBSTACLE_EVERY == 0)
        .then(|| Spawn { lane_x: lane(distance / OBSTACLE_EVERY * 7), kind: SpawnKind::Obstacle });
    if distance % DIAMOND_EVERY == 0 {
        out.push(Spawn { lane_x: lane(distance / DIAMOND_EVERY), kind: SpawnKind::Diamond });
    }
    if distance % COIN_EVERY == 0 {
        let coin_lane = lane(distance / COIN_EVERY);
        if obstacle.is_none_or(|o| o.lane_x != coin_lane) {
            out.push(Spawn { lane_x: coin_lane, kind: SpawnKind::Coin });
        }
    }
    // obstacles last so pickups in the same lane are credited before the run ends
    out.extend(obstacle);
    out
}

/// Pickups the runner touches at `distance`. Jumping clears obstacles.
pub fn touched(distance: u64, pose: &PlayerPose) -> Vec<Pickup> {
    spawns_at(distance)
        .into_iter()
        .filter(|s| s.lane_x == pose.lane_x)
        .filter_map(|s| match s.kind {
            SpawnKind::Coin => Some(Pickup::Coin { value: None }),
            SpawnKind::Diamond => Some(Pickup::Diamond { value: None }),
            SpawnKind::Obstacle if pose.jumping => None,
            SpawnKind::Obstacle => Some(Pickup::Obstacle),
        })
        .collect()
}

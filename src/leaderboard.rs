//! Leaderboard table: a fixed rival list with the local player's best run
//! slotted in by score.

use crate::model::PlayerProfile;

pub const MAX_ENTRIES: usize = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rival {
    pub name: &'static str,
    pub score: u64,
    pub distance: u64,
    pub coins: u64,
    pub level: u32,
}

const fn rival(name: &'static str, score: u64, coins: u64, level: u32) -> Rival {
    Rival {
        name,
        score,
        distance: score / 10,
        coins,
        level,
    }
}

/// Until scores come from a server every period shows the same table.
pub const RIVALS: [Rival; 10] = [
    rival("DashMaster", 89_750, 12_450, 15),
    rival("SpeedRunner", 76_890, 11_230, 12),
    rival("CoinCollector", 68_420, 15_680, 14),
    rival("ProGamer2024", 61_250, 9_870, 11),
    rival("DiamondHunter", 58_790, 8_940, 13),
    rival("VirtualAce", 54_320, 7_650, 10),
    rival("RunnerX", 49_860, 6_780, 9),
    rival("DashLegend", 45_230, 5_890, 8),
    rival("ObstacleKing", 41_670, 5_120, 7),
    rival("JumpMaster", 38_450, 4_560, 6),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub player_name: String,
    pub score: u64,
    pub distance: u64,
    pub coins: u64,
    pub level: u32,
    pub is_current_player: bool,
}

impl From<&Rival> for LeaderboardEntry {
    fn from(r: &Rival) -> Self {
        Self {
            rank: 0,
            player_name: r.name.to_string(),
            score: r.score,
            distance: r.distance,
            coins: r.coins,
            level: r.level,
            is_current_player: false,
        }
    }
}

pub fn rank_entries(profile: &PlayerProfile) -> Vec<LeaderboardEntry> {
    rank_against(&RIVALS, profile)
}

/// `rivals` must already be sorted by descending score. The player goes in
/// ahead of the first rival with a strictly lower score, or last when nobody
/// is lower; a player with no high score is left out.
pub fn rank_against(rivals: &[Rival], profile: &PlayerProfile) -> Vec<LeaderboardEntry> {
    let mut table: Vec<LeaderboardEntry> = rivals.iter().map(LeaderboardEntry::from).collect();
    if profile.high_score > 0 {
        let me = LeaderboardEntry {
            rank: 0,
            player_name: profile.name.clone(),
            score: profile.high_score,
            distance: profile.total_distance,
            coins: profile.coins,
            level: profile.level,
            is_current_player: true,
        };
        let at = table
            .iter()
            .position(|e| e.score < profile.high_score)
            .unwrap_or(table.len());
        table.insert(at, me);
    }
    for (i, entry) in table.iter_mut().enumerate() {
        entry.rank = i + 1;
    }
    table.truncate(MAX_ENTRIES);
    table
}

/// The local player's row, if it made the table.
pub fn current_player(table: &[LeaderboardEntry]) -> Option<&LeaderboardEntry> {
    table.iter().find(|e| e.is_current_player)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(high_score: u64) -> PlayerProfile {
        PlayerProfile {
            name: "Ada".into(),
            high_score,
            total_distance: 777,
            ..Default::default()
        }
    }

    #[test]
    fn player_without_score_is_not_listed() {
        let table = rank_entries(&player(0));
        assert_eq!(table.len(), RIVALS.len());
        assert!(current_player(&table).is_none());
        assert_eq!(table[0].rank, 1);
        assert_eq!(table[9].rank, 10);
    }

    #[test]
    fn player_is_inserted_and_ranks_below_shift() {
        let table = rank_entries(&player(60_000));
        let me = current_player(&table).unwrap();
        assert_eq!(me.rank, 5);
        assert_eq!(me.player_name, "Ada");
        assert_eq!(me.distance, 777);
        assert_eq!(table[3].player_name, "ProGamer2024");
        assert_eq!(table[5].player_name, "DiamondHunter");
        assert_eq!(table[5].rank, 6);
        assert_eq!(table.last().unwrap().rank, 11);
    }

    #[test]
    fn tie_goes_behind_the_rival() {
        let table = rank_entries(&player(89_750));
        assert_eq!(table[0].player_name, "DashMaster");
        assert_eq!(current_player(&table).unwrap().rank, 2);
    }

    #[test]
    fn lowest_player_is_appended() {
        let table = rank_entries(&player(10));
        let me = table.last().unwrap();
        assert!(me.is_current_player);
        assert_eq!(me.rank, 11);
    }

    #[test]
    fn table_keeps_top_twenty() {
        let rivals: Vec<Rival> = (0..25u64).map(|i| rival("Bot", 10_000 - i * 100, 0, 1)).collect();

        let table = rank_against(&rivals, &player(50));
        assert_eq!(table.len(), MAX_ENTRIES);
        assert!(current_player(&table).is_none());

        let table = rank_against(&rivals, &player(9_950));
        assert_eq!(table.len(), MAX_ENTRIES);
        assert_eq!(current_player(&table).unwrap().rank, 2);
        assert_eq!(table[19].rank, 20);
        assert_eq!(table[19].score, 10_000 - 18 * 100);
    }
}

//! The persisted score record.

use serde::{Deserialize, Serialize};

use crate::core::Player;

/// Cumulative wins and current win streaks, indexed by [`Player::index`].
///
/// A streak counts consecutive wins uninterrupted by an opposing win;
/// draws leave both streaks alone. Win counters only ever grow within a
/// session; streaks reset to zero when the opponent wins.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    wins: [u32; 2],
    streaks: [u32; 2],
}

impl ScoreRecord {
    /// All-zero record, used when nothing is stored yet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            wins: [0; 2],
            streaks: [0; 2],
        }
    }

    /// Total wins for `player`.
    #[must_use]
    pub const fn wins(&self, player: Player) -> u32 {
        self.wins[player.index()]
    }

    /// Current win streak for `player`.
    #[must_use]
    pub const fn streak(&self, player: Player) -> u32 {
        self.streaks[player.index()]
    }

    /// Apply a win by `winner`: bump their win and streak counters and
    /// zero the opponent's streak.
    pub fn record_win(&mut self, winner: Player) {
        self.wins[winner.index()] += 1;
        self.streaks[winner.index()] += 1;
        self.streaks[winner.opponent().index()] = 0;
    }
}

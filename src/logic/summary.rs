//! Summaries over stats lines and games. Pure functions; empty input gives zeros.

use crate::models::{Game, Outcome, Stats};
use serde::{Deserialize, Serialize};

/// Summed counters over a set of stats lines.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    /// Number of stats lines (games played, when summarizing one player).
    pub games: u64,
    pub goals: u64,
    pub assists: u64,
    pub passes: u64,
    pub intercepts: u64,
    pub dribbles: u64,
    pub tackles: u64,
}

impl StatsSummary {
    pub fn add(&mut self, s: &Stats) {
        self.games += 1;
        self.goals += u64::from(s.goals);
        self.assists += u64::from(s.assists);
        self.passes += u64::from(s.passes);
        self.intercepts += u64::from(s.intercepts);
        self.dribbles += u64::from(s.dribbles);
        self.tackles += u64::from(s.tackles);
    }
}

/// Win/loss/draw record over a set of games.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GameSummary {
    pub game_count: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    /// wins / game_count, rounded to two decimals (ties to even); 0 when there are no games.
    pub rate: f64,
    pub points_for: u64,
    pub points_against: u64,
    /// e.g. `"1W 1L 1D"`.
    pub record_string: String,
    /// e.g. `"33%"`.
    pub percent_string: String,
    /// `record_string` and `percent_string` joined by a space.
    pub summary_string: String,
}

pub fn summarize_stats<'a, I>(records: I) -> StatsSummary
where
    I: IntoIterator<Item = &'a Stats>,
{
    records.into_iter().fold(StatsSummary::default(), |mut acc, s| {
        acc.add(s);
        acc
    })
}

pub fn summarize_games<'a, I>(records: I) -> GameSummary
where
    I: IntoIterator<Item = &'a Game>,
{
    let (mut wins, mut losses, mut draws) = (0u32, 0u32, 0u32);
    let (mut points_for, mut points_against) = (0u64, 0u64);

    for g in records {
        match g.outcome() {
            Outcome::Win => wins += 1,
            Outcome::Lose => losses += 1,
            Outcome::Even => draws += 1,
        }
        points_for += u64::from(g.point_gain);
        points_against += u64::from(g.point_reduce);
    }

    let game_count = wins + losses + draws;
    let rate = win_rate(wins, losses, draws);
    let record_string = format!("{}W {}L {}D", wins, losses, draws);
    let percent_string = format!("{}%", (rate * 100.0).round_ties_even() as u32);
    let summary_string = format!("{} {}", record_string, percent_string);

    GameSummary {
        game_count,
        wins,
        losses,
        draws,
        rate,
        points_for,
        points_against,
        record_string,
        percent_string,
        summary_string,
    }
}

/// Wins over all games, rounded to two decimals (ties to even, so 5 of 8 is 0.62).
/// 0 when no games were played.
pub fn win_rate(wins: u32, losses: u32, draws: u32) -> f64 {
    let total = wins + losses + draws;
    if total == 0 {
        return 0.0;
    }
    let rate = f64::from(wins) / f64::from(total);
    (rate * 100.0).round_ties_even() / 100.0
}

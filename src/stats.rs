use std::collections::BTreeSet;

use crate::models::{Entry, LeaderboardRow, ParticipantStats, TeamSummary, TrendPoint};
use crate::scoring::calculate_points;
use crate::store::Store;

pub fn get_stats(entries: &[Entry]) -> ParticipantStats {
    let total_steps = entries
        .iter()
        .fold(0u64, |acc, e| acc.saturating_add(e.steps));
    let total_points = entries
        .iter()
        .fold(0u64, |acc, e| acc.saturating_add(calculate_points(e.steps)));
    let weeks = entries.len();
    let avg_daily = if weeks > 0 {
        total_steps / (weeks as u64 * 7)
    } else {
        0
    };

    ParticipantStats {
        total_steps,
        total_points,
        weeks,
        avg_daily,
    }
}

pub fn build_leaderboard(store: &Store) -> Vec<LeaderboardRow> {
    let mut rows: Vec<LeaderboardRow> = store
        .participants()
        .iter()
        .map(|participant| {
            let stats = get_stats(&participant.entries);
            LeaderboardRow {
                name: participant.name.clone(),
                color: participant.color.clone(),
                total_steps: stats.total_steps,
                total_points: stats.total_points,
                weeks: stats.weeks,
                avg_daily: stats.avg_daily,
            }
        })
        .collect();

    // sort_by is stable, so ties keep store order.
    rows.sort_by(|a, b| b.total_points.cmp(&a.total_points));
    rows
}

pub fn rank_marker(index: usize) -> String {
    match index {
        0 => "🥇".to_string(),
        1 => "🥈".to_string(),
        2 => "🥉".to_string(),
        _ => format!("#{}", index + 1),
    }
}

pub fn team_summary(store: &Store) -> TeamSummary {
    let participants = store.participants();
    let total_steps = participants
        .iter()
        .fold(0u64, |acc, p| acc.saturating_add(get_stats(&p.entries).total_steps));
    let total_weeks: usize = participants.iter().map(|p| p.entries.len()).sum();
    let avg_weekly = if total_weeks > 0 {
        total_steps / total_weeks as u64
    } else {
        0
    };

    TeamSummary {
        total_steps,
        total_weeks,
        avg_weekly,
        participants: participants.len(),
    }
}

/// One point per participant per distinct week start, weeks ascending.
/// Only the first entry a participant logged for a week is charted.
pub fn weekly_trends(store: &Store) -> Vec<TrendPoint> {
    let weeks: BTreeSet<_> = store
        .participants()
        .iter()
        .flat_map(|p| p.entries.iter().map(|e| e.week_start))
        .collect();

    let mut points = Vec::new();
    for week_start in weeks {
        let label = week_start.format("%b %d").to_string();
        for participant in store.participants() {
            if let Some(entry) = participant
                .entries
                .iter()
                .find(|e| e.week_start == week_start)
            {
                points.push(TrendPoint {
                    week_start,
                    week: label.clone(),
                    participant: participant.name.clone(),
                    steps: entry.steps,
                });
            }
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn entry(steps: u64) -> Entry {
        let week_start = NaiveDate::from_ymd_opt(2026, 2, 2).expect("date");
        Entry {
            week_start,
            week_end: week_start + Duration::days(6),
            steps,
        }
    }

    fn add(store: &mut Store, name: &str, start: (u32, u32), steps: u64) {
        let week_start = NaiveDate::from_ymd_opt(2026, start.0, start.1).expect("date");
        store
            .add_entry(
                name,
                Entry {
                    week_start,
                    week_end: week_start + Duration::days(6),
                    steps,
                },
            )
            .expect("add");
    }

    #[test]
    fn empty_entries_give_zero_stats() {
        let stats = get_stats(&[]);
        assert_eq!(stats.total_steps, 0);
        assert_eq!(stats.total_points, 0);
        assert_eq!(stats.weeks, 0);
        assert_eq!(stats.avg_daily, 0);
    }

    #[test]
    fn stats_sum_per_entry_points() {
        let entries = vec![entry(4_999), entry(5_000), entry(15_000)];
        let stats = get_stats(&entries);
        assert_eq!(stats.total_steps, 24_999);
        assert_eq!(stats.total_points, 49 + 100 + 725);
        assert_eq!(stats.weeks, 3);
        assert_eq!(stats.avg_daily, 24_999 / 21);
    }

    #[test]
    fn oversized_totals_saturate_instead_of_overflowing() {
        let entries = vec![entry(u64::MAX), entry(u64::MAX)];
        let stats = get_stats(&entries);
        assert_eq!(stats.total_steps, u64::MAX);
        assert_eq!(stats.total_points, 2 * (u64::MAX / 100 + 575));
        assert_eq!(stats.avg_daily, u64::MAX / 14);
    }

    #[test]
    fn seed_leaderboard_order() {
        let rows = build_leaderboard(&Store::seed());
        let order: Vec<(&str, u64)> = rows
            .iter()
            .map(|r| (r.name.as_str(), r.total_points))
            .collect();
        assert_eq!(
            order,
            vec![
                ("Victoria", 3_175),
                ("Keith", 2_875),
                ("Derek", 2_675),
                ("Riad", 2_580),
                ("Hari", 2_460),
                ("Leigeme", 2_320),
            ]
        );
        assert_eq!(rows[0].total_steps, 145_000);
        assert_eq!(rows[0].avg_daily, 6_904);
        assert_eq!(rows[0].color, "#EF4444");
    }

    #[test]
    fn leaderboard_ties_keep_store_order() {
        let mut store = Store::empty_roster();
        add(&mut store, "Derek", (1, 12), 10_000);
        add(&mut store, "Keith", (1, 12), 10_000);
        add(&mut store, "Hari", (1, 12), 20_000);

        let names: Vec<String> = build_leaderboard(&store)
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(
            names,
            vec!["Hari", "Keith", "Derek", "Riad", "Victoria", "Leigeme"]
        );
    }

    #[test]
    fn rank_markers() {
        assert_eq!(rank_marker(0), "🥇");
        assert_eq!(rank_marker(2), "🥉");
        assert_eq!(rank_marker(3), "#4");
        assert_eq!(rank_marker(9), "#10");
    }

    #[test]
    fn team_summary_for_seed_and_empty_roster() {
        let summary = team_summary(&Store::seed());
        assert_eq!(summary.total_steps, 573_500);
        assert_eq!(summary.total_weeks, 18);
        assert_eq!(summary.avg_weekly, 31_861);
        assert_eq!(summary.participants, 6);

        let empty = team_summary(&Store::empty_roster());
        assert_eq!(empty.total_steps, 0);
        assert_eq!(empty.avg_weekly, 0);
        assert_eq!(empty.participants, 6);
    }

    #[test]
    fn trends_sort_weeks_and_take_first_entry_per_week() {
        let mut store = Store::empty_roster();
        add(&mut store, "Keith", (2, 2), 9_000);
        add(&mut store, "Riad", (1, 19), 7_000);
        add(&mut store, "Keith", (1, 19), 8_000);
        add(&mut store, "Keith", (1, 19), 1_000);

        let points: Vec<(String, String, u64)> = weekly_trends(&store)
            .into_iter()
            .map(|p| (p.week, p.participant, p.steps))
            .collect();
        assert_eq!(
            points,
            vec![
                ("Jan 19".to_string(), "Riad".to_string(), 7_000),
                ("Jan 19".to_string(), "Keith".to_string(), 8_000),
                ("Feb 02".to_string(), "Keith".to_string(), 9_000),
            ]
        );
        assert!(weekly_trends(&Store::empty_roster()).is_empty());
    }
}

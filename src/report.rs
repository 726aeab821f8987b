use std::fmt::Write;
use std::path::Path;

use anyhow::Context;

use crate::distance;
use crate::models::{CHALLENGE_END, CHALLENGE_START};
use crate::scoring::{self, BONUS_TIERS, STEPS_PER_POINT};
use crate::stats;
use crate::store::Store;

pub fn with_commas(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn challenge_dates() -> String {
    format!(
        "{} - {}",
        CHALLENGE_START.format("%b %-d"),
        CHALLENGE_END.format("%b %-d, %Y")
    )
}

pub fn render_summary(store: &Store) -> String {
    let summary = stats::team_summary(store);
    let mut output = String::new();

    let _ = writeln!(output, "Total Steps: {}", with_commas(summary.total_steps));
    let _ = writeln!(output, "Avg Weekly Steps: {}", with_commas(summary.avg_weekly));
    let _ = writeln!(output, "Weeks Logged: {}", summary.total_weeks);
    let _ = writeln!(output, "Participants: {}", summary.participants);

    if summary.total_steps > 0 {
        let _ = writeln!(
            output,
            "Team Achievement: {}",
            distance::describe(summary.total_steps)
        );
    }

    output
}

pub fn render_leaderboard(store: &Store) -> String {
    let rows = stats::build_leaderboard(store);
    let mut output = String::new();

    for (idx, row) in rows.iter().enumerate() {
        let _ = writeln!(
            output,
            "{:<4} {:<12} {:>8} points",
            stats::rank_marker(idx),
            row.name,
            with_commas(row.total_points)
        );
        let _ = writeln!(
            output,
            "     {} steps • {} weeks • Avg: {}/day",
            with_commas(row.total_steps),
            row.weeks,
            with_commas(row.avg_daily)
        );
        if row.total_steps > 0 {
            let _ = writeln!(output, "     {}", distance::describe(row.total_steps));
        }
    }

    output
}

pub fn render_points_system() -> String {
    let mut output = String::new();
    let _ = writeln!(output, "Per Week:");
    let _ = writeln!(output, "- Base: 1 point per {STEPS_PER_POINT} steps");
    for (threshold, bonus) in BONUS_TIERS {
        let _ = writeln!(output, "- {}+ steps: +{bonus} bonus", with_commas(threshold));
    }
    output
}

pub fn render_points_preview(steps: u64) -> String {
    format!(
        "Points: {} • Avg per day: {}",
        with_commas(scoring::calculate_points(steps)),
        with_commas(scoring::avg_per_day(steps))
    )
}

/// Entries newest first. The bracketed index is the insertion-order index used for deletion.
pub fn render_entries(store: &Store) -> String {
    let mut output = String::new();

    for participant in store.participants() {
        let _ = writeln!(
            output,
            "{} ({} weeks)",
            participant.name,
            participant.entries.len()
        );

        if participant.entries.is_empty() {
            let _ = writeln!(output, "  No entries yet");
            continue;
        }

        let mut indexed: Vec<_> = participant.entries.iter().enumerate().collect();
        indexed.sort_by(|a, b| b.1.week_start.cmp(&a.1.week_start));
        for (index, entry) in indexed {
            let _ = writeln!(
                output,
                "  [{index}] {} to {}  {} steps • {} pts",
                entry.week_start,
                entry.week_end,
                with_commas(entry.steps),
                with_commas(scoring::calculate_points(entry.steps))
            );
        }
    }

    output
}

pub fn write_trends_csv<W: std::io::Write>(store: &Store, writer: W) -> anyhow::Result<usize> {
    let points = stats::weekly_trends(store);
    let mut csv_writer = csv::Writer::from_writer(writer);
    for point in &points {
        csv_writer.serialize(point)?;
    }
    csv_writer.flush()?;
    Ok(points.len())
}

pub fn build_report(store: &Store) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "# 3-Month Step Challenge");
    let _ = writeln!(output, "**{}**", challenge_dates());
    let _ = writeln!(output);
    let _ = writeln!(output, "## Team Totals");
    for line in render_summary(store).lines() {
        let _ = writeln!(output, "- {line}");
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Current Standings");
    let rows = stats::build_leaderboard(store);
    if rows.is_empty() {
        let _ = writeln!(output, "No participants.");
    } else {
        let _ = writeln!(
            output,
            "| Rank | Name | Color | Points | Steps | Weeks | Avg/day |"
        );
        let _ = writeln!(output, "|---|---|---|---:|---:|---:|---:|");
        for (idx, row) in rows.iter().enumerate() {
            let _ = writeln!(
                output,
                "| {} | {} | `{}` | {} | {} | {} | {} |",
                stats::rank_marker(idx),
                row.name,
                row.color,
                with_commas(row.total_points),
                with_commas(row.total_steps),
                row.weeks,
                with_commas(row.avg_daily)
            );
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Points System");
    output.push_str(&render_points_system());

    let _ = writeln!(output);
    let _ = writeln!(output, "## All Weekly Entries");
    let _ = writeln!(output, "```");
    output.push_str(&render_entries(store));
    let _ = writeln!(output, "```");

    output
}

pub fn write_report(store: &Store, path: &Path) -> anyhow::Result<()> {
    std::fs::write(path, build_report(store))
        .with_context(|| format!("failed to write report {}", path.display()))
}

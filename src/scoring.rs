/// Flat bonuses per week, each added on top of every lower tier reached.
pub const BONUS_TIERS: [(u64, u64); 5] = [
    (5_000, 50),
    (7_500, 75),
    (10_000, 100),
    (12_500, 150),
    (15_000, 200),
];

pub const STEPS_PER_POINT: u64 = 100;

pub fn calculate_points(steps: u64) -> u64 {
    let base = steps / STEPS_PER_POINT;
    let bonus: u64 = BONUS_TIERS
        .iter()
        .filter(|(threshold, _)| steps >= *threshold)
        .map(|(_, bonus)| bonus)
        .sum();
    base + bonus
}

pub fn avg_per_day(weekly_steps: u64) -> u64 {
    weekly_steps / 7
}

pub const STEPS_PER_MILE: f64 = 2000.0;
pub const KM_PER_MILE: f64 = 1.609;
pub const EARTH_CIRCUMFERENCE_MILES: f64 = 24_901.0;

/// Ascending by threshold; the first threshold the distance is still under wins.
pub const COMPARISONS: [(f64, &str); 33] = [
    (2.0, "🚶 Walking around Queen’s Park Savannah (1 full lap)"),
    (4.0, "🌳 Walking from St. James to Port of Spain"),
    (6.0, "🏙️ Walking from Woodbrook to Diego Martin"),
    (8.0, "🏫 Walking from UWI St. Augustine to Curepe"),
    (10.0, "🚶 Walking from Port of Spain to Chaguanas"),
    (12.0, "🏖️ Walking from Arima to Blanchisseuse"),
    (15.0, "🌄 Walking from San Juan to Port of Spain"),
    (18.0, "🌊 Walking from Port of Spain to Maracas Bay"),
    (22.0, "🏞️ Walking from Arima to Valencia"),
    (25.0, "🏖️ Walking from Port of Spain to Las Cuevas"),
    (26.2, "🏃‍♂️ Marathon distance"),
    (35.0, "🏭 Walking from Couva to San Fernando"),
    (40.0, "🌄 Walking from San Fernando to Port of Spain"),
    (45.0, "🌴 Walking from Sangre Grande to Toco"),
    (55.0, "🌊 Walking from Mayaro to Sangre Grande"),
    (65.0, "🌊 Walking from Point Fortin to San Fernando"),
    (75.0, "🌾 Walking from Penal to San Fernando"),
    (85.0, "🏝️ Walking from Port of Spain to Toco"),
    (100.0, "🔥 Walking from Penal to Port of Spain"),
    (120.0, "🌋 Walking from Point Fortin to Port of Spain"),
    (140.0, "🗺️ Walking from San Fernando to Toco"),
    (160.0, "🇹🇹 Walking across Trinidad (Point Fortin → Toco)"),
    (180.0, "⛴️ Walking Trinidad & Tobago (Point Fortin → Scarborough)"),
    (200.0, "🏆 Walking Trinidad & Tobago end-to-end challenge"),
    (211.0, "🚶 Walking from NYC to Boston"),
    (450.0, "🗽 Walking from NYC to Niagara Falls"),
    (1000.0, "🌴 Walking from Miami to NYC"),
    (1200.0, "🏔️ Walking from NYC to Chicago"),
    (2000.0, "🌉 Walking from NYC to Denver"),
    (2800.0, "🌊 Walking from NYC to Los Angeles"),
    (3500.0, "🇺🇸 Walking coast to coast (NYC to LA via southern route)"),
    (5000.0, "🌍 Walking from NYC to London (if you could!)"),
    (7917.0, "🌏 Walking around the Earth's circumference at equator"),
];

pub fn steps_to_miles(steps: u64) -> f64 {
    steps as f64 / STEPS_PER_MILE
}

pub fn describe(steps: u64) -> String {
    let miles = steps_to_miles(steps);
    let km = miles * KM_PER_MILE;

    match COMPARISONS.iter().find(|(threshold, _)| miles < *threshold) {
        Some((threshold, label)) => {
            let progress = miles / threshold * 100.0;
            format!("{miles:.1} miles ({km:.1} km) - {progress:.0}% of {label}")
        }
        None => {
            let times_around = miles / EARTH_CIRCUMFERENCE_MILES;
            format!("{miles:.1} miles ({km:.1} km) - {times_around:.1}x around Earth! 🌍")
        }
    }
}

pub mod clock;
pub mod rules;
pub mod stat;
pub mod time;

/// One decimal place, with exact ties rounded away from zero (so 0.25 gives "0.3").
/// A value lands exactly halfway between tenths only when it is an odd number of quarters.
pub fn tenths(value: f64) -> String {
    let quarters = value * 4.0;
    let value = if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        (value * 10.0).round() / 10.0
    } else {
        value
    };
    format!("{value:.1}")
}

/// Turns a 1-based ordinal typed by the user into a roster position.
pub fn ordinal_to_index(ordinal: usize) -> Option<usize> {
    ordinal.checked_sub(1)
}

//! Statistics calculation engine.
//!
//! Turns cumulative match counters into comparable numbers:
//! - KDA and per-minute rates
//! - Benchmark-relative radar scores

pub mod normalize;
pub mod rates;

pub use normalize::{normalize, score_against, AVG_DAMAGE_TAKEN_PER_MIN};
pub use rates::to_rates;

/// Calculate KDA. A deathless game has no denominator, so the ratio is
/// kills plus assists.
pub fn calculate_kda(kills: u32, deaths: u32, assists: u32) -> f64 {
    let takedowns = kills as f64 + assists as f64;
    if deaths == 0 {
        takedowns
    } else {
        takedowns / deaths as f64
    }
}

/// Convert a game length in seconds to minutes.
pub fn duration_minutes(seconds: i64) -> f64 {
    seconds as f64 / 60.0
}

/// Rate per minute. Zero when the duration is not a positive finite number.
pub fn per_minute(total: u64, minutes: f64) -> f64 {
    if minutes.is_finite() && minutes > 0.0 {
        total as f64 / minutes
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_kda() {
        assert_eq!(calculate_kda(5, 0, 10), 15.0);
        assert_eq!(calculate_kda(6, 2, 4), 5.0);
        assert!((calculate_kda(1, 3, 0) - 0.333).abs() < 0.01);
        assert_eq!(calculate_kda(0, 0, 0), 0.0);
        assert_eq!(calculate_kda(0, 7, 0), 0.0);
    }

    #[test]
    fn test_calculate_kda_large_counters() {
        let kda = calculate_kda(u32::MAX, 0, u32::MAX);
        assert!(kda.is_finite());
        assert_eq!(kda, 2.0 * u32::MAX as f64);
    }

    #[test]
    fn test_duration_minutes() {
        assert_eq!(duration_minutes(1800), 30.0);
        assert_eq!(duration_minutes(90), 1.5);
        assert_eq!(duration_minutes(0), 0.0);
    }

    #[test]
    fn test_per_minute() {
        assert_eq!(per_minute(210, 30.0), 7.0);
        assert_eq!(per_minute(210, 0.0), 0.0);
        assert_eq!(per_minute(210, -5.0), 0.0);
        assert_eq!(per_minute(210, f64::NAN), 0.0);
        assert_eq!(per_minute(210, f64::INFINITY), 0.0);
    }
}

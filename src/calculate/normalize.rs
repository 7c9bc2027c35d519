//! Benchmark-relative normalization of per-minute rates.

use crate::models::{BenchmarkTable, NormalizedScores, RankTier, RawRates, Role};

/// Expected damage taken per minute, shared across every role.
pub const AVG_DAMAGE_TAKEN_PER_MIN: f64 = 450.0;

/// Score a raw value against an expected value: `raw / expected * 100`,
/// unclamped. An expected value that is zero, negative or not finite
/// leaves the raw value unchanged.
pub fn score_against(raw: f64, expected: f64) -> f64 {
    if expected.is_finite() && expected > 0.0 {
        raw / expected * 100.0
    } else {
        raw
    }
}

/// Scale a participant's rates against the benchmark for `(tier, role)`.
///
/// Lookups follow the table's fallback chain. If the table has no usable
/// entry at all, the rate axes pass through unscaled.
pub fn normalize(
    rates: &RawRates,
    role: Role,
    tier: RankTier,
    table: &BenchmarkTable,
) -> NormalizedScores {
    let damage_taken = score_against(rates.damage_taken_per_min, AVG_DAMAGE_TAKEN_PER_MIN);

    let Some(found) = table.lookup(tier, role) else {
        tracing::warn!(%tier, %role, "No benchmark available, leaving rates unscaled");
        return NormalizedScores {
            damage: rates.damage_per_min,
            damage_taken,
            farm: rates.farm_per_min,
            gold: rates.gold_per_min,
            vision: rates.vision_per_min,
            kda: rates.kda,
        };
    };

    if found.is_fallback(tier, role) {
        tracing::warn!(
            requested_tier = %tier,
            requested_role = %role,
            tier = %found.tier,
            role = %found.role,
            "Benchmark lookup fell back"
        );
    }

    let benchmark = found.benchmark;
    NormalizedScores {
        damage: score_against(rates.damage_per_min, benchmark.damage_per_min),
        damage_taken,
        farm: score_against(rates.farm_per_min, benchmark.cs_per_min),
        gold: score_against(rates.gold_per_min, benchmark.gold_per_min),
        vision: score_against(rates.vision_per_min, benchmark.wards_per_min),
        kda: score_against(rates.kda, benchmark.kda),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Benchmark;

    #[test]
    fn test_score_against() {
        assert_eq!(score_against(580.0, 580.0), 100.0);
        assert_eq!(score_against(1160.0, 580.0), 200.0);
        assert_eq!(score_against(290.0, 580.0), 50.0);
        assert_eq!(score_against(3.0, 0.0), 3.0);
        assert_eq!(score_against(3.0, -1.0), 3.0);
        assert_eq!(score_against(3.0, f64::NAN), 3.0);
    }

    #[test]
    fn test_exact_benchmark_scores_one_hundred() {
        let table = BenchmarkTable::standard();
        let gold_top = *table.get(RankTier::Gold, Role::Top).unwrap();
        let rates = RawRates {
            damage_per_min: gold_top.damage_per_min,
            damage_taken_per_min: AVG_DAMAGE_TAKEN_PER_MIN,
            farm_per_min: gold_top.cs_per_min,
            gold_per_min: gold_top.gold_per_min,
            vision_per_min: gold_top.wards_per_min,
            kda: gold_top.kda,
        };

        let scores = normalize(&rates, Role::Top, RankTier::Gold, &table);

        assert_eq!(scores.damage, 100.0);
        assert_eq!(scores.damage_taken, 100.0);
        assert_eq!(scores.farm, 100.0);
        assert_eq!(scores.gold, 100.0);
        assert_eq!(scores.vision, 100.0);
        assert_eq!(scores.kda, 100.0);
    }

    #[test]
    fn test_deathless_kda_example() {
        let rates = RawRates {
            kda: 15.0,
            ..Default::default()
        };
        let scores = normalize(&rates, Role::Top, RankTier::Gold, &BenchmarkTable::standard());
        assert!((scores.kda - 576.92).abs() < 0.01);
    }

    #[test]
    fn test_farm_example() {
        let rates = RawRates {
            farm_per_min: 7.0,
            ..Default::default()
        };
        let scores = normalize(&rates, Role::Top, RankTier::Gold, &BenchmarkTable::standard());
        assert!((scores.farm - 127.27).abs() < 0.01);
    }

    #[test]
    fn test_no_upper_clamp() {
        let rates = RawRates {
            damage_per_min: 1392.0,
            ..Default::default()
        };
        let scores = normalize(&rates, Role::Top, RankTier::Gold, &BenchmarkTable::standard());
        assert!((scores.damage - 240.0).abs() < 1e-9);
    }

    #[test]
    fn test_damage_taken_is_role_independent() {
        let table = BenchmarkTable::standard();
        let rates = RawRates {
            damage_taken_per_min: 900.0,
            ..Default::default()
        };

        for role in Role::ALL {
            let scores = normalize(&rates, role, RankTier::Gold, &table);
            assert_eq!(scores.damage_taken, 200.0);
        }
    }

    #[test]
    fn test_unknown_tier_uses_gold() {
        let table = BenchmarkTable::standard();
        let rates = RawRates {
            gold_per_min: 430.0,
            ..Default::default()
        };
        let scores = normalize(&rates, Role::Mid, RankTier::Challenger, &table);
        assert_eq!(scores.gold, 100.0);
    }

    #[test]
    fn test_zero_benchmark_passes_raw_through() {
        let table = BenchmarkTable::from_entries([(
            RankTier::Gold,
            Role::Mid,
            Benchmark::new(0.0, 0.24, 680.0, 430.0, 2.7),
        )]);
        let rates = RawRates {
            farm_per_min: 6.5,
            ..Default::default()
        };
        let scores = normalize(&rates, Role::Mid, RankTier::Gold, &table);
        assert_eq!(scores.farm, 6.5);
    }

    #[test]
    fn test_empty_table_passes_raw_through() {
        let rates = RawRates {
            damage_per_min: 512.0,
            damage_taken_per_min: 450.0,
            kda: 3.0,
            ..Default::default()
        };
        let scores = normalize(&rates, Role::Adc, RankTier::Gold, &BenchmarkTable::empty());

        assert_eq!(scores.damage, 512.0);
        assert_eq!(scores.kda, 3.0);
        assert_eq!(scores.damage_taken, 100.0);
    }
}

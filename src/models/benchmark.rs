//! Role/rank performance benchmarks.
//!
//! Expected per-minute rates and KDA for each role at a given rank tier,
//! compiled from community statistics. The table is immutable once built
//! and is shared by reference.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{RankTier, Role};

/// Tier substituted when the requested tier has no data.
pub const DEFAULT_TIER: RankTier = RankTier::Gold;

/// Role substituted when the requested role has no data within a tier.
pub const DEFAULT_ROLE: Role = Role::Mid;

/// Expected values for one (tier, role) pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Benchmark {
    pub cs_per_min: f64,
    pub wards_per_min: f64,
    pub damage_per_min: f64,
    pub gold_per_min: f64,
    pub kda: f64,
}

impl Benchmark {
    pub const fn new(
        cs_per_min: f64,
        wards_per_min: f64,
        damage_per_min: f64,
        gold_per_min: f64,
        kda: f64,
    ) -> Self {
        Self {
            cs_per_min,
            wards_per_min,
            damage_per_min,
            gold_per_min,
            kda,
        }
    }
}

/// Result of a benchmark lookup, recording which key actually answered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchmarkLookup {
    pub benchmark: Benchmark,
    pub tier: RankTier,
    pub role: Role,
}

impl BenchmarkLookup {
    /// True when the answering key differs from the requested one.
    pub fn is_fallback(&self, tier: RankTier, role: Role) -> bool {
        self.tier != tier || self.role != role
    }
}

/// Immutable mapping from (tier, role) to benchmark.
#[derive(Debug, Clone, Default)]
pub struct BenchmarkTable {
    entries: HashMap<(RankTier, Role), Benchmark>,
}

impl BenchmarkTable {
    /// An empty table. Every lookup against it misses.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a table from explicit entries. Later entries replace earlier
    /// ones with the same key.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (RankTier, Role, Benchmark)>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(tier, role, benchmark)| ((tier, role), benchmark))
                .collect(),
        }
    }

    /// The built-in reference data: Silver, Gold and Platinum.
    pub fn standard() -> Self {
        use RankTier::*;
        use Role::*;

        Self::from_entries([
            (Silver, Top, Benchmark::new(5.0, 0.20, 520.0, 390.0, 2.4)),
            (Silver, Jungle, Benchmark::new(1.4, 0.24, 500.0, 370.0, 2.6)),
            (Silver, Mid, Benchmark::new(4.5, 0.22, 620.0, 400.0, 2.5)),
            (Silver, Adc, Benchmark::new(5.4, 0.16, 640.0, 410.0, 2.3)),
            (Silver, Support, Benchmark::new(0.8, 0.65, 350.0, 300.0, 2.8)),
            (Gold, Top, Benchmark::new(5.5, 0.22, 580.0, 420.0, 2.6)),
            // Jungle CS counts camps only
            (Gold, Jungle, Benchmark::new(1.6, 0.26, 550.0, 400.0, 2.8)),
            (Gold, Mid, Benchmark::new(5.0, 0.24, 680.0, 430.0, 2.7)),
            (Gold, Adc, Benchmark::new(5.9, 0.18, 700.0, 440.0, 2.5)),
            (Gold, Support, Benchmark::new(0.9, 0.69, 380.0, 320.0, 3.0)),
            (Platinum, Top, Benchmark::new(6.0, 0.24, 630.0, 450.0, 2.8)),
            (Platinum, Jungle, Benchmark::new(1.8, 0.28, 600.0, 430.0, 3.0)),
            (Platinum, Mid, Benchmark::new(5.5, 0.26, 740.0, 460.0, 2.9)),
            (Platinum, Adc, Benchmark::new(6.4, 0.20, 760.0, 470.0, 2.7)),
            (Platinum, Support, Benchmark::new(1.0, 0.73, 410.0, 340.0, 3.2)),
        ])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact lookup with no fallback.
    pub fn get(&self, tier: RankTier, role: Role) -> Option<&Benchmark> {
        self.entries.get(&(tier, role))
    }

    /// True if the table has any data for the tier.
    pub fn has_tier(&self, tier: RankTier) -> bool {
        Role::ALL.iter().any(|role| self.entries.contains_key(&(tier, *role)))
    }

    /// Lookup with the fallback chain: a tier with no data is replaced by
    /// [`DEFAULT_TIER`], then a role missing within the chosen tier is
    /// replaced by [`DEFAULT_ROLE`]. Returns None only if the table holds
    /// neither key.
    pub fn lookup(&self, tier: RankTier, role: Role) -> Option<BenchmarkLookup> {
        let tier = if self.has_tier(tier) { tier } else { DEFAULT_TIER };

        if let Some(benchmark) = self.get(tier, role) {
            return Some(BenchmarkLookup {
                benchmark: *benchmark,
                tier,
                role,
            });
        }

        self.get(tier, DEFAULT_ROLE).map(|benchmark| BenchmarkLookup {
            benchmark: *benchmark,
            tier,
            role: DEFAULT_ROLE,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_populated() {
        let table = BenchmarkTable::standard();
        assert_eq!(table.len(), 15);
        assert!(table.has_tier(RankTier::Gold));
        assert!(table.has_tier(RankTier::Silver));
        assert!(table.has_tier(RankTier::Platinum));
        assert!(!table.has_tier(RankTier::Challenger));
    }

    #[test]
    fn test_exact_lookup() {
        let table = BenchmarkTable::standard();
        let found = table.lookup(RankTier::Gold, Role::Top).unwrap();

        assert_eq!(found.tier, RankTier::Gold);
        assert_eq!(found.role, Role::Top);
        assert_eq!(found.benchmark.cs_per_min, 5.5);
        assert_eq!(found.benchmark.kda, 2.6);
        assert!(!found.is_fallback(RankTier::Gold, Role::Top));
    }

    #[test]
    fn test_missing_tier_falls_back_to_gold() {
        let table = BenchmarkTable::standard();
        let found = table.lookup(RankTier::Diamond, Role::Support).unwrap();

        assert_eq!(found.tier, RankTier::Gold);
        assert_eq!(found.role, Role::Support);
        assert_eq!(found.benchmark.wards_per_min, 0.69);
        assert!(found.is_fallback(RankTier::Diamond, Role::Support));
    }

    #[test]
    fn test_missing_role_falls_back_to_mid() {
        let table = BenchmarkTable::from_entries([
            (RankTier::Gold, Role::Mid, Benchmark::new(5.0, 0.24, 680.0, 430.0, 2.7)),
            (RankTier::Gold, Role::Top, Benchmark::new(5.5, 0.22, 580.0, 420.0, 2.6)),
        ]);
        let found = table.lookup(RankTier::Gold, Role::Jungle).unwrap();

        assert_eq!(found.role, Role::Mid);
        assert_eq!(found.benchmark.damage_per_min, 680.0);
    }

    #[test]
    fn test_empty_table_misses() {
        let table = BenchmarkTable::empty();
        assert!(table.is_empty());
        assert!(table.lookup(RankTier::Gold, Role::Mid).is_none());
    }

    #[test]
    fn test_new_tier_is_additive() {
        let mut entries = vec![(
            RankTier::Diamond,
            Role::Adc,
            Benchmark::new(7.0, 0.25, 820.0, 500.0, 3.0),
        )];
        entries.push((
            RankTier::Gold,
            Role::Mid,
            Benchmark::new(5.0, 0.24, 680.0, 430.0, 2.7),
        ));
        let table = BenchmarkTable::from_entries(entries);

        let adc = table.lookup(RankTier::Diamond, Role::Adc).unwrap();
        assert_eq!(adc.tier, RankTier::Diamond);

        // Tier exists but role does not: stays in tier, falls back to Mid
        // there, which misses, so no answer from this tier.
        assert!(table.lookup(RankTier::Diamond, Role::Top).is_none());
    }
}

use super::{Prize, PrizeTable};
use crate::random::RandomSource;

/// Two-gate allocation: the symbol decides eligibility, then the clamp
/// collapses most wins to the minimum tier before the sizing draw runs.
#[derive(Debug, Clone)]
pub struct PrizeAllocator {
    clamp_rate: f64,
    table: PrizeTable,
}

impl PrizeAllocator {
    pub fn new(clamp_rate: f64, table: PrizeTable) -> Self {
        let total = table.total();
        debug_assert!(
            (total - 1.0).abs() <= super::table::TOTAL_TOLERANCE,
            "sizing table sums to {}",
            total
        );
        if (total - 1.0).abs() > super::table::TOTAL_TOLERANCE {
            tracing::warn!(
                "Sizing table sums to {}; shortfall resolves to the minimum tier",
                total
            );
        }

        Self { clamp_rate, table }
    }

    pub fn table(&self) -> &PrizeTable {
        &self.table
    }

    pub fn clamp_rate(&self) -> f64 {
        self.clamp_rate
    }

    pub fn allocate<R: RandomSource + ?Sized>(&self, is_winning_symbol: bool, rng: &mut R) -> Prize {
        if !is_winning_symbol {
            return Prize::none();
        }

        if rng.next_unit() < self.clamp_rate {
            return self.table.minimum();
        }

        self.draw_tier(rng)
    }

    /// Sizing draw, reached only by winning cards that escaped the clamp.
    pub fn draw_tier<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Prize {
        let prize = self.table.draw(rng);
        tracing::debug!("Sizing draw produced {}", prize);
        prize
    }

    /// Analytic probability of every outcome for a card whose symbol wins
    /// with probability `winning_rate`. The no-prize outcome comes first.
    pub fn outcome_distribution(&self, winning_rate: f64) -> Vec<(Prize, f64)> {
        let escape = winning_rate * (1.0 - self.clamp_rate);
        let minimum = self.table.minimum();
        let mut clamped = false;
        let mut outcomes = vec![(Prize::none(), 1.0 - winning_rate)];

        for entry in self.table.entries() {
            let mut p = escape * entry.probability;
            if !clamped && entry.prize() == minimum {
                p += winning_rate * self.clamp_rate;
                clamped = true;
            }
            outcomes.push((entry.prize(), p));
        }

        outcomes
    }
}

impl Default for PrizeAllocator {
    fn default() -> Self {
        Self::new(0.95, PrizeTable::sizing())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prize::{PrizeKind, TierEntry};
    use crate::random::{RngSource, ScriptedSource};

    #[test]
    fn test_non_winning_symbol_never_draws() {
        let allocator = PrizeAllocator::default();
        let mut rng = ScriptedSource::new(vec![0.99]);
        assert_eq!(allocator.allocate(false, &mut rng), Prize::none());
        assert_eq!(rng.consumed(), 0);
    }

    #[test]
    fn test_clamp_returns_minimum() {
        let allocator = PrizeAllocator::default();
        let mut rng = ScriptedSource::new(vec![0.10]);
        assert_eq!(
            allocator.allocate(true, &mut rng),
            Prize::new(0.5, PrizeKind::ShortLeave)
        );
    }

    #[test]
    fn test_clamp_uses_smallest_tier_of_unordered_table() {
        let table = PrizeTable::new(vec![
            TierEntry::new(7.0, PrizeKind::ShortLeave, 0.5),
            TierEntry::new(0.5, PrizeKind::ShortLeave, 0.5),
        ]);
        let allocator = PrizeAllocator::new(0.95, table);
        let mut rng = ScriptedSource::new(vec![0.10]);
        assert_eq!(
            allocator.allocate(true, &mut rng),
            Prize::new(0.5, PrizeKind::ShortLeave)
        );
    }

    #[test]
    fn test_blank_tier_config_is_rejected() {
        let raw = r#"{
            "sizing_table": [
                { "amount": 0.5, "kind": "SHORT_LEAVE", "probability": 0.5 },
                { "amount": 0, "kind": "NONE", "probability": 0.5 }
            ]
        }"#;
        assert!(crate::config::GameConfig::from_json_str(raw).is_err());
    }

    #[test]
    fn test_escaped_clamp_reaches_top_tier() {
        let allocator = PrizeAllocator::default();
        let mut rng = ScriptedSource::new(vec![0.99, 0.999_999]);
        assert_eq!(
            allocator.allocate(true, &mut rng),
            Prize::new(100.0, PrizeKind::ShortLeave)
        );
    }

    #[test]
    fn test_winning_symbol_always_pays_something() {
        let allocator = PrizeAllocator::default();
        let mut rng = RngSource::seeded(42);
        for _ in 0..5_000 {
            let prize = allocator.allocate(true, &mut rng);
            assert!(prize.amount() >= 0.5);
            assert_ne!(prize.kind(), PrizeKind::None);
        }
    }

    #[test]
    fn test_outcome_distribution_sums_to_one() {
        let allocator = PrizeAllocator::default();
        let outcomes = allocator.outcome_distribution(0.02);
        let total: f64 = outcomes.iter().map(|(_, p)| p).sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert_eq!(outcomes[0].0, Prize::none());
        assert!((outcomes[0].1 - 0.98).abs() < 1e-12);
        // 0.02 * (0.95 + 0.05 * 0.8)
        assert!((outcomes[1].1 - 0.0198).abs() < 1e-12);
    }
}

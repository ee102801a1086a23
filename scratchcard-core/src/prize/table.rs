use super::{Prize, PrizeKind};
use crate::error::{Result, ScratchError};
use crate::random::RandomSource;
use serde::{Deserialize, Serialize};

/// Tolerance used when checking that a table sums to one.
pub const TOTAL_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierEntry {
    pub amount: f64,
    pub kind: PrizeKind,
    pub probability: f64,
}

impl TierEntry {
    pub const fn new(amount: f64, kind: PrizeKind, probability: f64) -> Self {
        Self {
            amount,
            kind,
            probability,
        }
    }

    pub fn prize(&self) -> Prize {
        Prize::new(self.amount, self.kind)
    }
}

/// Ordered weighted table. The smallest tier doubles as the fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrizeTable {
    entries: Vec<TierEntry>,
}

impl PrizeTable {
    pub fn new(entries: Vec<TierEntry>) -> Self {
        Self { entries }
    }

    /// Sizing table used once a winning card escapes the clamp.
    pub fn sizing() -> Self {
        Self::new(vec![
            TierEntry::new(0.5, PrizeKind::ShortLeave, 0.80),
            TierEntry::new(1.0, PrizeKind::ShortLeave, 0.15),
            TierEntry::new(3.0, PrizeKind::ShortLeave, 0.04),
            TierEntry::new(7.0, PrizeKind::ShortLeave, 0.008),
            TierEntry::new(15.0, PrizeKind::ShortLeave, 0.0015),
            TierEntry::new(30.0, PrizeKind::ShortLeave, 0.00045),
            TierEntry::new(100.0, PrizeKind::ShortLeave, 0.00005),
        ])
    }

    pub fn entries(&self) -> &[TierEntry] {
        &self.entries
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(|e| e.probability).sum()
    }

    /// Smallest tier by amount, used by the clamp and on fall-through.
    pub fn minimum(&self) -> Prize {
        self.entries
            .iter()
            .min_by(|a, b| a.amount.total_cmp(&b.amount))
            .map(TierEntry::prize)
            .unwrap_or_else(Prize::none)
    }

    pub fn validate(&self) -> Result<()> {
        if self.entries.is_empty() {
            return Err(ScratchError::config("Prize table cannot be empty"));
        }

        if let Some(blank) = self.entries.iter().find(|e| !e.prize().is_win()) {
            return Err(ScratchError::config(format!(
                "Prize table entry {}/{:?} is not a real prize",
                blank.amount, blank.kind
            )));
        }

        if let Some(bad) = self
            .entries
            .iter()
            .find(|e| !e.probability.is_finite() || e.probability < 0.0)
        {
            return Err(ScratchError::config(format!(
                "Invalid probability {} for {} day entry",
                bad.probability, bad.amount
            )));
        }

        let total = self.total();
        if (total - 1.0).abs() > TOTAL_TOLERANCE {
            return Err(ScratchError::config(format!(
                "Prize table probabilities sum to {}, expected 1",
                total
            )));
        }

        Ok(())
    }

    /// Returns the first entry whose cumulative probability reaches `draw`,
    /// or the smallest tier if the table falls short.
    pub fn pick(&self, draw: f64) -> Prize {
        let mut cumulative = 0.0;
        for entry in &self.entries {
            cumulative += entry.probability;
            if draw <= cumulative {
                return entry.prize();
            }
        }

        tracing::warn!(
            "Draw {} fell through prize table (total {}), using minimum tier",
            draw,
            cumulative
        );
        self.minimum()
    }

    pub fn draw<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Prize {
        self.pick(rng.next_unit())
    }
}

impl Default for PrizeTable {
    fn default() -> Self {
        Self::sizing()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizing_table_sums_to_one() {
        let table = PrizeTable::sizing();
        assert!((table.total() - 1.0).abs() < TOTAL_TOLERANCE);
        assert!(table.validate().is_ok());
    }

    #[test]
    fn test_pick_walks_cumulative_brackets() {
        let table = PrizeTable::sizing();
        assert_eq!(table.pick(0.0).amount(), 0.5);
        assert_eq!(table.pick(0.8).amount(), 0.5);
        assert_eq!(table.pick(0.81).amount(), 1.0);
        assert_eq!(table.pick(0.96).amount(), 3.0);
        assert_eq!(table.pick(0.995).amount(), 7.0);
        assert_eq!(table.pick(0.9997).amount(), 30.0);
        assert_eq!(table.pick(0.999_999).amount(), 100.0);
    }

    #[test]
    fn test_pick_falls_back_to_minimum() {
        let table = PrizeTable::new(vec![
            TierEntry::new(0.5, PrizeKind::ShortLeave, 0.3),
            TierEntry::new(5.0, PrizeKind::SickLeave, 0.2),
        ]);
        assert_eq!(table.pick(0.4), Prize::new(5.0, PrizeKind::SickLeave));
        assert_eq!(table.pick(0.9), Prize::new(0.5, PrizeKind::ShortLeave));
    }

    #[test]
    fn test_validate_rejects_defects() {
        assert!(PrizeTable::new(vec![]).validate().is_err());

        let short = PrizeTable::new(vec![TierEntry::new(1.0, PrizeKind::ShortLeave, 0.9)]);
        assert!(matches!(short.validate(), Err(ScratchError::Config(_))));

        let negative = PrizeTable::new(vec![
            TierEntry::new(1.0, PrizeKind::ShortLeave, 1.5),
            TierEntry::new(2.0, PrizeKind::ShortLeave, -0.5),
        ]);
        assert!(negative.validate().is_err());

        let blank_first = PrizeTable::new(vec![TierEntry::new(0.0, PrizeKind::None, 1.0)]);
        assert!(blank_first.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_blank_later_tier() {
        let table = PrizeTable::new(vec![
            TierEntry::new(0.5, PrizeKind::ShortLeave, 0.5),
            TierEntry::new(0.0, PrizeKind::None, 0.5),
        ]);
        assert!(matches!(table.validate(), Err(ScratchError::Config(_))));
    }

    #[test]
    fn test_minimum_is_smallest_amount_regardless_of_order() {
        let table = PrizeTable::new(vec![
            TierEntry::new(7.0, PrizeKind::ShortLeave, 0.6),
            TierEntry::new(0.5, PrizeKind::ShortLeave, 0.3),
            TierEntry::new(3.0, PrizeKind::SickLeave, 0.1),
        ]);
        assert!(table.validate().is_ok());
        assert_eq!(table.minimum(), Prize::new(0.5, PrizeKind::ShortLeave));
        // fall-through also lands on the smallest tier
        let short = PrizeTable::new(vec![
            TierEntry::new(7.0, PrizeKind::ShortLeave, 0.2),
            TierEntry::new(0.5, PrizeKind::ShortLeave, 0.2),
        ]);
        assert_eq!(short.pick(0.9), Prize::new(0.5, PrizeKind::ShortLeave));
    }
}

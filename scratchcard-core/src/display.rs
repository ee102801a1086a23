//! Presentation helpers applied after a prize is final. Nothing here feeds
//! back into the prize record.

use crate::prize::Prize;
use crate::random::RandomSource;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker classes a front-end applies to a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardClass {
    NoPrize,
    Scratched,
}

impl CardClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardClass::NoPrize => "no-prize",
            CardClass::Scratched => "scratched",
        }
    }
}

impl fmt::Display for CardClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text printed under the overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountLabel {
    pub text: String,
    /// True when the text is a decoy day count with no prize behind it.
    pub decorative: bool,
}

pub fn day_text(amount: f64) -> String {
    format!("{}天", amount)
}

/// Real amount for winners; a uniformly picked decoy from `decoy_days` otherwise.
pub fn amount_label<R: RandomSource + ?Sized>(
    prize: &Prize,
    decoy_days: &[u32],
    rng: &mut R,
) -> AmountLabel {
    if prize.is_win() {
        return AmountLabel {
            text: day_text(prize.amount()),
            decorative: false,
        };
    }

    let text = if decoy_days.is_empty() {
        String::new()
    } else {
        format!("{}天", decoy_days[rng.pick_index(decoy_days.len())])
    };

    AmountLabel {
        text,
        decorative: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prize::PrizeKind;
    use crate::random::ScriptedSource;

    const DECOYS: [u32; 6] = [1, 2, 3, 5, 7, 10];

    #[test]
    fn test_winner_shows_real_amount() {
        let mut rng = ScriptedSource::new(vec![0.5]);
        let label = amount_label(&Prize::new(0.5, PrizeKind::ShortLeave), &DECOYS, &mut rng);
        assert_eq!(label.text, "0.5天");
        assert!(!label.decorative);
        assert_eq!(rng.consumed(), 0);
    }

    #[test]
    fn test_loser_shows_decoy() {
        let mut rng = ScriptedSource::new(vec![0.99]);
        let prize = Prize::none();
        let label = amount_label(&prize, &DECOYS, &mut rng);
        assert_eq!(label.text, "10天");
        assert!(label.decorative);
        assert_eq!(prize, Prize::none());
    }

    #[test]
    fn test_whole_amounts_drop_fraction() {
        assert_eq!(day_text(100.0), "100天");
        assert_eq!(day_text(1.0), "1天");
    }
}

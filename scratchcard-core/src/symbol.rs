use crate::random::RandomSource;
use serde::{Deserialize, Serialize};

/// Decorative glyph printed on a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LuckySymbol {
    pub glyph: String,
    pub is_winning: bool,
}

#[derive(Debug, Clone)]
pub struct SymbolAssigner {
    pool: Vec<String>,
    winning: [String; 2],
    winning_rate: f64,
}

impl SymbolAssigner {
    pub fn new(pool: Vec<String>, winning: [String; 2], winning_rate: f64) -> Self {
        Self {
            pool,
            winning,
            winning_rate,
        }
    }

    pub fn pool(&self) -> &[String] {
        &self.pool
    }

    pub fn winning(&self) -> &[String; 2] {
        &self.winning
    }

    pub fn is_winning(&self, glyph: &str) -> bool {
        self.winning.iter().any(|w| w == glyph)
    }

    /// One gate draw, then one uniform pick from the chosen list.
    pub fn assign<R: RandomSource + ?Sized>(&self, rng: &mut R) -> LuckySymbol {
        let glyph = if rng.next_unit() < self.winning_rate || self.pool.is_empty() {
            &self.winning[rng.pick_index(self.winning.len())]
        } else {
            &self.pool[rng.pick_index(self.pool.len())]
        };

        LuckySymbol {
            glyph: glyph.clone(),
            is_winning: self.is_winning(glyph),
        }
    }
}

pub mod allocator;
pub mod table;

pub use allocator::PrizeAllocator;
pub use table::{PrizeTable, TierEntry};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of leave a prize grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrizeKind {
    None,
    ShortLeave,
    SickLeave,
}

impl PrizeKind {
    pub fn label(&self) -> &'static str {
        match self {
            PrizeKind::None => "谢谢参与",
            PrizeKind::ShortLeave => "年假",
            PrizeKind::SickLeave => "病假",
        }
    }
}

/// Prize hidden under a card. `amount > 0` exactly when `kind != None`.
/// Only built through `Prize::new`/`Prize::none`, so it is serialize-only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Prize {
    amount: f64,
    kind: PrizeKind,
}

impl Prize {
    pub fn none() -> Self {
        Self {
            amount: 0.0,
            kind: PrizeKind::None,
        }
    }

    /// Builds a prize, collapsing to `none()` when either side says "nothing".
    pub fn new(amount: f64, kind: PrizeKind) -> Self {
        if amount.is_nan() || amount <= 0.0 || kind == PrizeKind::None {
            return Self::none();
        }
        Self { amount, kind }
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn kind(&self) -> PrizeKind {
        self.kind
    }

    pub fn is_win(&self) -> bool {
        self.amount > 0.0
    }
}

impl fmt::Display for Prize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_win() {
            write!(f, "{}天 {}", self.amount, self.kind.label())
        } else {
            f.write_str(self.kind.label())
        }
    }
}

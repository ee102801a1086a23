use crate::card::Card;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const CELEBRATION_MESSAGE: &str = "🎉 中奖啦! 🎉";

/// Called once per card when it is revealed.
pub trait RevealHook {
    fn on_revealed(&mut self, card: &Card);
}

impl<F: FnMut(&Card)> RevealHook for F {
    fn on_revealed(&mut self, card: &Card) {
        self(card)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHook;

impl RevealHook for NoopHook {
    fn on_revealed(&mut self, _card: &Card) {}
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Banner {
    pub card_id: Uuid,
    pub message: String,
    pub amount: f64,
    pub shown_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Banner {
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

/// Shows a transient banner for winning reveals only.
#[derive(Debug, Clone)]
pub struct CelebrationBoard {
    duration: Duration,
    banners: Vec<Banner>,
}

impl CelebrationBoard {
    pub fn new(duration: std::time::Duration) -> Self {
        let duration = Duration::from_std(duration).unwrap_or_else(|_| Duration::milliseconds(1500));
        Self {
            duration,
            banners: Vec::new(),
        }
    }

    pub fn celebrate_at(&mut self, card: &Card, now: DateTime<Utc>) -> bool {
        if !card.prize().is_win() {
            return false;
        }

        self.banners.push(Banner {
            card_id: card.id(),
            message: CELEBRATION_MESSAGE.to_string(),
            amount: card.prize().amount(),
            shown_at: now,
            expires_at: now + self.duration,
        });
        tracing::info!("Celebrating card {} ({}天)", card.id(), card.prize().amount());
        true
    }

    pub fn active(&self, now: DateTime<Utc>) -> Vec<&Banner> {
        self.banners.iter().filter(|b| b.is_active(now)).collect()
    }

    /// Drops expired banners and returns how many were dismissed.
    pub fn prune(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.banners.len();
        self.banners.retain(|b| b.is_active(now));
        before - self.banners.len()
    }

    pub fn total_shown(&self) -> usize {
        self.banners.len()
    }
}

impl Default for CelebrationBoard {
    fn default() -> Self {
        Self::new(std::time::Duration::from_millis(1500))
    }
}

impl RevealHook for CelebrationBoard {
    fn on_revealed(&mut self, card: &Card) {
        self.celebrate_at(card, Utc::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::AmountLabel;
    use crate::prize::{Prize, PrizeKind};
    use crate::symbol::LuckySymbol;

    fn card(prize: Prize) -> Card {
        Card::new(
            Uuid::new_v4(),
            LuckySymbol {
                glyph: "福".to_string(),
                is_winning: prize.is_win(),
            },
            prize,
            AmountLabel {
                text: String::new(),
                decorative: !prize.is_win(),
            },
        )
    }

    #[test]
    fn test_losing_reveal_is_not_celebrated() {
        let mut board = CelebrationBoard::default();
        assert!(!board.celebrate_at(&card(Prize::none()), Utc::now()));
        assert_eq!(board.total_shown(), 0);
    }

    #[test]
    fn test_banner_auto_dismisses() {
        let mut board = CelebrationBoard::default();
        let now = Utc::now();
        assert!(board.celebrate_at(&card(Prize::new(3.0, PrizeKind::ShortLeave)), now));

        assert_eq!(board.active(now + Duration::milliseconds(1499)).len(), 1);
        assert!(board.active(now + Duration::milliseconds(1500)).is_empty());
        assert_eq!(board.prune(now + Duration::seconds(2)), 1);
        assert_eq!(board.total_shown(), 0);
    }
}

use crate::card::Card;
use crate::display::CardClass;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

/// Overlay lifecycle: Hidden -> Scratching -> Revealed (terminal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverlayState {
    Hidden,
    Scratching,
    Revealed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Unchanged,
    Started,
    Revealed,
}

/// Append-only set of revealed card ids for one game instance.
#[derive(Debug, Default)]
pub struct RevealRegistry {
    revealed: Mutex<HashSet<Uuid>>,
}

impl RevealRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomic check-and-insert. Returns false if `id` was already present.
    pub fn try_insert(&self, id: Uuid) -> bool {
        self.revealed.lock().insert(id)
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.revealed.lock().contains(&id)
    }

    pub fn len(&self) -> usize {
        self.revealed.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.lock().is_empty()
    }

    /// Only used by a full game reset.
    pub fn clear(&self) {
        self.revealed.lock().clear();
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RevealController {
    threshold: f64,
}

impl RevealController {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Feeds one progress sample for `card`.
    pub fn advance(&self, card: &mut Card, fraction: f64, registry: &RevealRegistry) -> Transition {
        let mut transition = Transition::Unchanged;
        match card.state() {
            OverlayState::Revealed => return transition,
            OverlayState::Hidden => {
                card.set_state(OverlayState::Scratching);
                transition = Transition::Started;
            }
            OverlayState::Scratching => {}
        }

        card.record_progress(fraction);
        if fraction < self.threshold || !registry.try_insert(card.id()) {
            return transition;
        }

        card.set_state(OverlayState::Revealed);
        card.record_progress(1.0);
        card.add_class(CardClass::Scratched);
        if !card.prize().is_win() {
            card.add_class(CardClass::NoPrize);
        }

        Transition::Revealed
    }
}

impl Default for RevealController {
    fn default() -> Self {
        Self::new(0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::AmountLabel;
    use crate::prize::Prize;
    use crate::symbol::LuckySymbol;

    fn card() -> Card {
        Card::new(
            Uuid::new_v4(),
            LuckySymbol {
                glyph: "寿".to_string(),
                is_winning: false,
            },
            Prize::none(),
            AmountLabel {
                text: "7天".to_string(),
                decorative: true,
            },
        )
    }

    #[test]
    fn test_state_machine_path() {
        let controller = RevealController::default();
        let registry = RevealRegistry::new();
        let mut card = card();

        assert_eq!(controller.advance(&mut card, 0.1, &registry), Transition::Started);
        assert_eq!(card.state(), OverlayState::Scratching);
        assert_eq!(controller.advance(&mut card, 0.3, &registry), Transition::Unchanged);
        assert_eq!(controller.advance(&mut card, 0.5, &registry), Transition::Revealed);

        assert!(card.is_revealed());
        assert_eq!(card.erased_fraction(), 1.0);
        assert!(card.has_class(CardClass::Scratched));
        assert!(card.has_class(CardClass::NoPrize));
        assert!(registry.contains(card.id()));
    }

    #[test]
    fn test_revealed_is_terminal() {
        let controller = RevealController::default();
        let registry = RevealRegistry::new();
        let mut card = card();

        assert_eq!(controller.advance(&mut card, 0.9, &registry), Transition::Revealed);
        for _ in 0..5 {
            assert_eq!(controller.advance(&mut card, 0.95, &registry), Transition::Unchanged);
        }
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_registered_id_blocks_second_reveal() {
        let controller = RevealController::default();
        let registry = RevealRegistry::new();
        let mut card = card();
        assert!(registry.try_insert(card.id()));

        assert_eq!(controller.advance(&mut card, 0.8, &registry), Transition::Started);
        assert_eq!(card.state(), OverlayState::Scratching);
    }

    #[test]
    fn test_registry_check_and_insert() {
        let registry = RevealRegistry::new();
        let id = Uuid::new_v4();
        assert!(registry.is_empty());
        assert!(registry.try_insert(id));
        assert!(!registry.try_insert(id));
        registry.clear();
        assert!(!registry.contains(id));
    }
}

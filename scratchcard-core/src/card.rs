use crate::display::{AmountLabel, CardClass};
use crate::prize::Prize;
use crate::reveal::OverlayState;
use crate::symbol::LuckySymbol;
use serde::Serialize;
use std::collections::BTreeSet;
use uuid::Uuid;

/// One scratch card. Symbol, prize and label are fixed once dealt.
#[derive(Debug, Clone, Serialize)]
pub struct Card {
    id: Uuid,
    symbol: LuckySymbol,
    prize: Prize,
    label: AmountLabel,
    classes: BTreeSet<CardClass>,
    state: OverlayState,
    erased_fraction: f64,
}

impl Card {
    pub fn new(id: Uuid, symbol: LuckySymbol, prize: Prize, label: AmountLabel) -> Self {
        let mut classes = BTreeSet::new();
        if !prize.is_win() {
            classes.insert(CardClass::NoPrize);
        }

        Self {
            id,
            symbol,
            prize,
            label,
            classes,
            state: OverlayState::Hidden,
            erased_fraction: 0.0,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn symbol(&self) -> &LuckySymbol {
        &self.symbol
    }

    pub fn is_winning_symbol(&self) -> bool {
        self.symbol.is_winning
    }

    pub fn prize(&self) -> &Prize {
        &self.prize
    }

    pub fn label(&self) -> &AmountLabel {
        &self.label
    }

    pub fn classes(&self) -> impl Iterator<Item = CardClass> + '_ {
        self.classes.iter().copied()
    }

    pub fn has_class(&self, class: CardClass) -> bool {
        self.classes.contains(&class)
    }

    pub fn state(&self) -> OverlayState {
        self.state
    }

    pub fn is_revealed(&self) -> bool {
        self.state == OverlayState::Revealed
    }

    pub fn erased_fraction(&self) -> f64 {
        self.erased_fraction
    }

    pub(crate) fn set_state(&mut self, state: OverlayState) {
        self.state = state;
    }

    pub(crate) fn record_progress(&mut self, fraction: f64) {
        self.erased_fraction = self.erased_fraction.max(fraction);
    }

    pub(crate) fn add_class(&mut self, class: CardClass) {
        self.classes.insert(class);
    }
}

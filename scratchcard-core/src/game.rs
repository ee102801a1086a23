use crate::card::Card;
use crate::celebration::{NoopHook, RevealHook};
use crate::config::GameConfig;
use crate::display::amount_label;
use crate::error::{Result, ScratchError};
use crate::input::{DragPhase, InputEvent, Point};
use crate::prize::{Prize, PrizeAllocator};
use crate::progress::ScratchProgressTracker;
use crate::random::{RandomSource, RngSource};
use crate::reveal::{RevealController, RevealRegistry, Transition};
use crate::surface::{OverlaySurface, PixelMask};
use crate::symbol::SymbolAssigner;
use rand::rngs::StdRng;
use std::collections::HashSet;
use uuid::Uuid;

/// What the page hands over for each card at setup.
#[derive(Debug)]
pub struct CardDescriptor<S> {
    pub id: Uuid,
    pub surface: S,
}

impl<S> CardDescriptor<S> {
    pub fn new(surface: S) -> Self {
        Self::with_id(Uuid::new_v4(), surface)
    }

    pub fn with_id(id: Uuid, surface: S) -> Self {
        Self { id, surface }
    }
}

#[derive(Debug, Default)]
pub struct SetupReport {
    pub dealt: usize,
    pub skipped: Vec<(Uuid, ScratchError)>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventOutcome {
    Ignored,
    Released,
    Erased { fraction: f64 },
    Revealed { prize: Prize },
}

#[derive(Debug)]
struct Slot<S> {
    card: Card,
    tracker: ScratchProgressTracker<S>,
    dragging: bool,
}

/// A set of independent cards sharing one reveal registry.
pub struct ScratchGame<S = PixelMask, H = NoopHook, R = RngSource<StdRng>> {
    id: Uuid,
    config: GameConfig,
    symbols: SymbolAssigner,
    allocator: PrizeAllocator,
    controller: RevealController,
    registry: RevealRegistry,
    slots: Vec<Slot<S>>,
    hook: H,
    rng: R,
}

/// Symbol, then prize, then label.
fn deal<R: RandomSource + ?Sized>(
    id: Uuid,
    symbols: &SymbolAssigner,
    allocator: &PrizeAllocator,
    decoy_days: &[u32],
    rng: &mut R,
) -> Card {
    let symbol = symbols.assign(rng);
    let prize = allocator.allocate(symbol.is_winning, rng);
    let label = amount_label(&prize, decoy_days, rng);
    Card::new(id, symbol, prize, label)
}

impl<S: OverlaySurface, H: RevealHook, R: RandomSource> ScratchGame<S, H, R> {
    pub fn new(
        config: GameConfig,
        descriptors: Vec<CardDescriptor<S>>,
        hook: H,
        mut rng: R,
    ) -> Result<(Self, SetupReport)> {
        config.validate()?;

        let symbols = config.symbol_assigner();
        let allocator = config.prize_allocator();
        let controller = RevealController::new(config.reveal_threshold);

        let mut report = SetupReport::default();
        let mut seen = HashSet::new();
        let mut slots = Vec::with_capacity(descriptors.len());

        for CardDescriptor { id, surface } in descriptors {
            if !seen.insert(id) {
                tracing::warn!("Skipping card {}: duplicate id", id);
                report.skipped.push((
                    id,
                    ScratchError::config(format!("Duplicate card id {}", id)),
                ));
                continue;
            }

            let tracker = match ScratchProgressTracker::new(surface) {
                Ok(tracker) => tracker,
                Err(e) => {
                    tracing::warn!("Skipping card {}: {}", id, e);
                    report.skipped.push((id, e));
                    continue;
                }
            };

            let card = deal(id, &symbols, &allocator, &config.decoy_days, &mut rng);
            tracing::debug!(
                "Dealt card {}: symbol {} prize {}",
                id,
                card.symbol().glyph,
                card.prize()
            );
            slots.push(Slot {
                card,
                tracker,
                dragging: false,
            });
        }

        report.dealt = slots.len();

        let game = Self {
            id: Uuid::new_v4(),
            config,
            symbols,
            allocator,
            controller,
            registry: RevealRegistry::new(),
            slots,
            hook,
            rng,
        };

        tracing::info!(
            "Game {} dealt {} cards ({} skipped)",
            game.id,
            report.dealt,
            report.skipped.len()
        );

        Ok((game, report))
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn allocator(&self) -> &PrizeAllocator {
        &self.allocator
    }

    pub fn registry(&self) -> &RevealRegistry {
        &self.registry
    }

    pub fn hook(&self) -> &H {
        &self.hook
    }

    pub fn hook_mut(&mut self) -> &mut H {
        &mut self.hook
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.slots.iter().map(|slot| &slot.card)
    }

    pub fn card_ids(&self) -> Vec<Uuid> {
        self.slots.iter().map(|slot| slot.card.id()).collect()
    }

    pub fn card(&self, card_id: Uuid) -> Result<&Card> {
        let idx = self.slot_index(card_id)?;
        Ok(&self.slots[idx].card)
    }

    pub fn surface(&self, card_id: Uuid) -> Result<&S> {
        let idx = self.slot_index(card_id)?;
        Ok(self.slots[idx].tracker.surface())
    }

    pub fn revealed_count(&self) -> usize {
        self.registry.len()
    }

    pub fn all_revealed(&self) -> bool {
        self.slots.iter().all(|slot| slot.card.is_revealed())
    }

    /// Routes one drag/touch event to a card.
    pub fn handle_event(&mut self, card_id: Uuid, event: &InputEvent) -> Result<EventOutcome> {
        let idx = self.slot_index(card_id)?;

        match event.phase {
            DragPhase::End => {
                self.slots[idx].dragging = false;
                Ok(EventOutcome::Released)
            }
            DragPhase::Start => {
                if self.registry.contains(card_id) {
                    tracing::debug!("Card {} already revealed, drag refused", card_id);
                    return Ok(EventOutcome::Ignored);
                }
                let Some(point) = event.position() else {
                    tracing::warn!("Drag start on card {} without a position", card_id);
                    return Ok(EventOutcome::Ignored);
                };
                self.slots[idx].dragging = true;
                Ok(self.erase_slot(idx, point))
            }
            DragPhase::Move => {
                if !self.slots[idx].dragging {
                    return Ok(EventOutcome::Ignored);
                }
                let Some(point) = event.position() else {
                    tracing::warn!("Drag move on card {} without a position", card_id);
                    return Ok(EventOutcome::Ignored);
                };
                Ok(self.erase_slot(idx, point))
            }
        }
    }

    /// Erases one brush disc at `(x, y)` regardless of drag state.
    pub fn erase_at(&mut self, card_id: Uuid, x: f64, y: f64) -> Result<EventOutcome> {
        let idx = self.slot_index(card_id)?;
        Ok(self.erase_slot(idx, Point::new(x, y)))
    }

    /// Wipes every card and deals fresh symbols and prizes.
    pub fn reset(&mut self) {
        self.registry.clear();

        for slot in &mut self.slots {
            slot.tracker.reset();
            slot.dragging = false;
            slot.card = deal(
                slot.card.id(),
                &self.symbols,
                &self.allocator,
                &self.config.decoy_days,
                &mut self.rng,
            );
        }

        tracing::info!("Game {} reset, {} cards re-dealt", self.id, self.slots.len());
    }

    fn erase_slot(&mut self, idx: usize, point: Point) -> EventOutcome {
        let slot = &mut self.slots[idx];
        let fraction = slot
            .tracker
            .on_erase(point.x, point.y, self.config.brush_radius);

        if slot.card.is_revealed() {
            return EventOutcome::Erased {
                fraction: slot.card.erased_fraction(),
            };
        }

        match self.controller.advance(&mut slot.card, fraction, &self.registry) {
            Transition::Revealed => {
                slot.tracker.finish();
                tracing::info!(
                    "Card {} revealed at {:.1}% erased: {}",
                    slot.card.id(),
                    fraction * 100.0,
                    slot.card.prize()
                );
                self.hook.on_revealed(&slot.card);
                EventOutcome::Revealed {
                    prize: *slot.card.prize(),
                }
            }
            Transition::Started => {
                tracing::debug!("Card {} scratching started", slot.card.id());
                EventOutcome::Erased { fraction }
            }
            Transition::Unchanged => {
                tracing::debug!("Card {} erased {:.3}", slot.card.id(), fraction);
                EventOutcome::Erased { fraction }
            }
        }
    }

    /// The card set is fixed at setup, so an unknown id is a caller bug:
    /// asserts in debug builds, returns `CardNotFound` in release.
    fn slot_index(&self, card_id: Uuid) -> Result<usize> {
        let idx = self.slots.iter().position(|slot| slot.card.id() == card_id);
        debug_assert!(idx.is_some(), "unknown card id {}", card_id);

        idx.ok_or_else(|| {
            tracing::error!("Unknown card id {} in game {}", card_id, self.id);
            ScratchError::CardNotFound(card_id)
        })
    }
}

impl<S, H, R> std::fmt::Debug for ScratchGame<S, H, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScratchGame")
            .field("id", &self.id)
            .field("cards", &self.slots.len())
            .field("revealed", &self.registry.len())
            .finish()
    }
}

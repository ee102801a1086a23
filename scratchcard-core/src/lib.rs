//! Scratch card engine
//!
//! Deals a set of independent scratch cards and tracks how much of each
//! overlay has been erased. Every card draws a lucky symbol; only the two
//! winning symbols are eligible for a prize, and most of those are clamped
//! to the smallest tier. A card reveals exactly once, when half of its
//! overlay is gone.

pub mod card;
pub mod celebration;
pub mod config;
pub mod display;
pub mod error;
pub mod game;
pub mod input;
pub mod prize;
pub mod progress;
pub mod random;
pub mod reveal;
pub mod surface;
pub mod symbol;

pub use card::Card;
pub use celebration::{Banner, CelebrationBoard, NoopHook, RevealHook};
pub use config::GameConfig;
pub use display::{AmountLabel, CardClass};
pub use error::{Result, ScratchError};
pub use game::{CardDescriptor, EventOutcome, ScratchGame, SetupReport};
pub use input::{DragPhase, InputEvent, Point, PointerSource};
pub use prize::{Prize, PrizeAllocator, PrizeKind, PrizeTable, TierEntry};
pub use progress::ScratchProgressTracker;
pub use random::{RandomSource, RngSource, ScriptedSource};
pub use reveal::{OverlayState, RevealController, RevealRegistry, Transition};
pub use surface::{OverlaySurface, PixelMask};
pub use symbol::{LuckySymbol, SymbolAssigner};

use rand::rngs::StdRng;

/// Deal `count` cards backed by in-memory pixel masks.
pub fn deal_pixel_cards<H: RevealHook>(
    config: GameConfig,
    count: usize,
    width: u32,
    height: u32,
    hook: H,
    seed: Option<u64>,
) -> Result<(ScratchGame<PixelMask, H, RngSource<StdRng>>, SetupReport)> {
    let rng = match seed {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::from_entropy(),
    };
    let descriptors = (0..count)
        .map(|_| CardDescriptor::new(PixelMask::new(width, height)))
        .collect();

    ScratchGame::new(config, descriptors, hook, rng)
}

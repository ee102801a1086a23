pub mod deal;
pub mod play;
pub mod stats;

pub use deal::{deal, sweep};
pub use play::play;
pub use stats::{show_odds, simulate};

use chrono::Utc;
use comfy_table::{presets::UTF8_FULL, Table};
use scratchcard_core::{Card, CelebrationBoard, OverlayState};

pub(crate) fn state_name(state: OverlayState) -> &'static str {
    match state {
        OverlayState::Hidden => "hidden",
        OverlayState::Scratching => "scratching",
        OverlayState::Revealed => "revealed",
    }
}

pub(crate) fn progress_bar(fraction: f64) -> String {
    let filled = (fraction.clamp(0.0, 1.0) * 20.0).round() as usize;
    format!(
        "[{}{}] {:>5.1}%",
        "#".repeat(filled),
        "-".repeat(20 - filled),
        fraction * 100.0
    )
}

/// Renders cards the way the page would: the symbol always, the amount
/// text only once revealed unless `show_prizes` is set.
pub(crate) fn card_table<'a>(cards: impl Iterator<Item = &'a Card>, show_prizes: bool) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["#", "Symbol", "Amount", "State", "Erased", "Classes"]);

    for (idx, card) in cards.enumerate() {
        let amount = if show_prizes || card.is_revealed() {
            if show_prizes {
                format!("{} ({})", card.label().text, card.prize())
            } else {
                card.label().text.clone()
            }
        } else {
            "░░░".to_string()
        };
        let classes = card
            .classes()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        table.add_row(vec![
            (idx + 1).to_string(),
            card.symbol().glyph.clone(),
            amount,
            state_name(card.state()).to_string(),
            format!("{:.1}%", card.erased_fraction() * 100.0),
            classes,
        ]);
    }

    table
}

pub(crate) fn print_banners(board: &mut CelebrationBoard) {
    let now = Utc::now();
    for banner in board.active(now) {
        println!("    {}  {}天", banner.message, banner.amount);
    }
    board.prune(now);
}

use super::{card_table, print_banners, progress_bar};
use crate::config::CliConfig;
use scratchcard_core::{
    deal_pixel_cards, CelebrationBoard, DragPhase, EventOutcome, GameConfig, InputEvent,
    NoopHook,
};

pub fn deal(
    game_config: GameConfig,
    cli_config: &CliConfig,
    cards: usize,
    seed: Option<u64>,
    show_prizes: bool,
    json: bool,
) -> anyhow::Result<()> {
    let (game, report) = deal_pixel_cards(
        game_config,
        cards,
        cli_config.surface_width,
        cli_config.surface_height,
        NoopHook,
        seed,
    )?;

    if json {
        let cards: Vec<_> = game.cards().collect();
        println!("{}", serde_json::to_string_pretty(&cards)?);
        return Ok(());
    }

    println!("Dealt {} cards (game {})", report.dealt, game.id());
    println!("{}", card_table(game.cards(), show_prizes));

    let winners = game.cards().filter(|c| c.is_winning_symbol()).count();
    if show_prizes {
        println!("Winning symbols: {}", winners);
    }

    Ok(())
}

pub fn sweep(
    game_config: GameConfig,
    cli_config: &CliConfig,
    cards: usize,
    seed: Option<u64>,
) -> anyhow::Result<()> {
    let board = CelebrationBoard::new(game_config.celebration_duration());
    let step = (game_config.brush_radius * 1.5).max(1.0);
    let (width, height) = (cli_config.surface_width, cli_config.surface_height);
    let (mut game, _) = deal_pixel_cards(game_config, cards, width, height, board, seed)?;

    for (idx, id) in game.card_ids().into_iter().enumerate() {
        println!("Card {} [{}]", idx + 1, game.card(id)?.symbol().glyph);
        game.handle_event(id, &InputEvent::mouse(DragPhase::Start, 0.0, 0.0))?;

        let mut y = 0.0;
        'rows: while y < f64::from(height) {
            let mut x = 0.0;
            while x < f64::from(width) {
                match game.handle_event(id, &InputEvent::mouse(DragPhase::Move, x, y))? {
                    EventOutcome::Revealed { .. } => {
                        let card = game.card(id)?;
                        println!("  {}", progress_bar(card.erased_fraction()));
                        println!("  Revealed: {}", card.label().text);
                        break 'rows;
                    }
                    EventOutcome::Erased { fraction } if x == 0.0 => {
                        println!("  {}", progress_bar(fraction));
                    }
                    _ => {}
                }
                x += step;
            }
            y += step;
        }

        game.handle_event(id, &InputEvent::mouse(DragPhase::End, 0.0, 0.0))?;
        print_banners(game.hook_mut());
    }

    println!();
    println!("{}", card_table(game.cards(), false));
    println!("Revealed {} of {} cards", game.revealed_count(), game.card_ids().len());

    Ok(())
}

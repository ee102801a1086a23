use super::{card_table, print_banners, progress_bar};
use crate::config::CliConfig;
use anyhow::{bail, Context};
use dialoguer::{theme::ColorfulTheme, Input, Select};
use scratchcard_core::{
    deal_pixel_cards, CelebrationBoard, DragPhase, EventOutcome, GameConfig, InputEvent, Point,
};

/// Parses a stroke written as `x,y x,y ...`.
pub fn parse_stroke(raw: &str) -> anyhow::Result<Vec<Point>> {
    let points = raw
        .split_whitespace()
        .map(|pair| {
            let (x, y) = pair
                .split_once(',')
                .with_context(|| format!("Expected x,y but got '{}'", pair))?;
            let x: f64 = x.trim().parse().with_context(|| format!("Bad x in '{}'", pair))?;
            let y: f64 = y.trim().parse().with_context(|| format!("Bad y in '{}'", pair))?;
            Ok(Point::new(x, y))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    if points.is_empty() {
        bail!("A stroke needs at least one point");
    }
    Ok(points)
}

pub fn play(
    game_config: GameConfig,
    cli_config: &CliConfig,
    cards: usize,
    seed: Option<u64>,
) -> anyhow::Result<()> {
    let board = CelebrationBoard::new(game_config.celebration_duration());
    let (mut game, report) = deal_pixel_cards(
        game_config,
        cards,
        cli_config.surface_width,
        cli_config.surface_height,
        board,
        seed,
    )?;

    println!(
        "Dealt {} cards, each {}x{}. Scratch half of a card to reveal it.",
        report.dealt, cli_config.surface_width, cli_config.surface_height
    );

    let theme = ColorfulTheme::default();
    loop {
        println!("{}", card_table(game.cards(), false));

        let ids = game.card_ids();
        let mut items: Vec<String> = game
            .cards()
            .enumerate()
            .map(|(idx, card)| format!("Card {} [{}]", idx + 1, card.symbol().glyph))
            .collect();
        items.push("Reset".to_string());
        items.push("Quit".to_string());

        let choice = Select::with_theme(&theme)
            .with_prompt("Pick a card")
            .items(&items)
            .default(0)
            .interact()?;

        if choice == ids.len() {
            game.reset();
            println!("All cards re-dealt.");
            continue;
        }
        if choice > ids.len() {
            break;
        }

        let id = ids[choice];
        let raw: String = Input::with_theme(&theme)
            .with_prompt("Stroke (x,y x,y ...)")
            .interact_text()?;
        let points = match parse_stroke(&raw) {
            Ok(points) => points,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        let mut last = None;
        for (i, point) in points.iter().enumerate() {
            let phase = if i == 0 { DragPhase::Start } else { DragPhase::Move };
            last = Some(game.handle_event(id, &InputEvent::mouse(phase, point.x, point.y))?);
        }
        game.handle_event(id, &InputEvent::mouse(DragPhase::End, 0.0, 0.0))?;

        let card = game.card(id)?;
        match last {
            Some(EventOutcome::Ignored) if card.is_revealed() => {
                println!("Card {} is already revealed.", choice + 1);
            }
            _ => {
                println!("{}", progress_bar(card.erased_fraction()));
                if card.is_revealed() {
                    println!("Revealed: {}", card.label().text);
                }
            }
        }
        print_banners(game.hook_mut());

        if game.all_revealed() {
            println!("{}", card_table(game.cards(), false));
            println!("Every card is revealed. Pick Reset to play again.");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stroke() {
        let points = parse_stroke("10,20  30.5,40").unwrap();
        assert_eq!(points, vec![Point::new(10.0, 20.0), Point::new(30.5, 40.0)]);
    }

    #[test]
    fn test_parse_stroke_rejects_garbage() {
        assert!(parse_stroke("").is_err());
        assert!(parse_stroke("10;20").is_err());
        assert!(parse_stroke("a,3").is_err());
    }
}

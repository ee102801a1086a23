use comfy_table::{presets::UTF8_FULL, Table};
use scratchcard_core::{GameConfig, RngSource};
use std::collections::HashMap;

pub fn show_odds(game_config: &GameConfig) -> anyhow::Result<()> {
    let allocator = game_config.prize_allocator();
    let outcomes = allocator.outcome_distribution(game_config.winning_symbol_rate);

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Outcome", "Probability", "1 in"]);
    for (prize, p) in &outcomes {
        let one_in = if *p > 0.0 {
            format!("{:.0}", 1.0 / p)
        } else {
            "-".to_string()
        };
        table.add_row(vec![prize.to_string(), format!("{:.8}%", p * 100.0), one_in]);
    }

    println!(
        "Winning symbol rate {}%, clamp {}%",
        game_config.winning_symbol_rate * 100.0,
        game_config.clamp_rate * 100.0
    );
    println!("{}", table);
    Ok(())
}

pub fn simulate(game_config: &GameConfig, rounds: u64, seed: Option<u64>) -> anyhow::Result<()> {
    let symbols = game_config.symbol_assigner();
    let allocator = game_config.prize_allocator();
    let mut rng = match seed {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::from_entropy(),
    };

    let mut counts: HashMap<String, u64> = HashMap::new();
    for _ in 0..rounds {
        let symbol = symbols.assign(&mut rng);
        let prize = allocator.allocate(symbol.is_winning, &mut rng);
        *counts.entry(prize.to_string()).or_default() += 1;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Outcome", "Observed", "Observed %", "Expected %"]);
    for (prize, p) in allocator.outcome_distribution(game_config.winning_symbol_rate) {
        let name = prize.to_string();
        let observed = counts.get(&name).copied().unwrap_or(0);
        table.add_row(vec![
            name,
            observed.to_string(),
            format!("{:.4}%", observed as f64 / rounds.max(1) as f64 * 100.0),
            format!("{:.4}%", p * 100.0),
        ]);
    }

    tracing::info!("Simulated {} cards", rounds);
    println!("{}", table);
    Ok(())
}

use anyhow::Result;
use colored::Colorize;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, Color, Table};
use stratos_core::{
    catalog, OptionSide, RiskLevel, StratosError, UNDERLYING_SYMBOL,
};

pub fn cmd_venues(format: &str) -> Result<()> {
    let venues = catalog::venues();

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&venues)?);
        return Ok(());
    }

    println!("{}", "Supported Venues".cyan().bold());
    println!();

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(vec![
            Cell::new("Id").fg(Color::White),
            Cell::new("Name").fg(Color::White),
            Cell::new("Kind").fg(Color::White),
        ]);

    for venue in &venues {
        table.add_row(vec![
            Cell::new(&venue.id),
            Cell::new(&venue.name),
            Cell::new(venue.kind.to_string()),
        ]);
    }

    println!("{table}");
    println!();
    println!("  Total: {} venues", venues.len());

    Ok(())
}

pub fn cmd_strategies(format: &str) -> Result<()> {
    let strategies = catalog::strategies();

    if format == "json" {
        let output: Vec<serde_json::Value> = strategies
            .iter()
            .map(|s| {
                serde_json::json!({
                    "id": s.id,
                    "name": s.name,
                    "risk": s.risk,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", "Strategy Templates".cyan().bold());
    println!();

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(vec![
            Cell::new("Id").fg(Color::White),
            Cell::new("Name").fg(Color::White),
            Cell::new("Risk").fg(Color::White),
        ]);

    for strategy in &strategies {
        table.add_row(vec![
            Cell::new(strategy.id.to_string()),
            Cell::new(strategy.name),
            risk_cell(strategy.risk),
        ]);
    }

    println!("{table}");

    Ok(())
}

pub fn cmd_staking(format: &str) -> Result<()> {
    let pools = catalog::staking_pools();

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&pools)?);
        return Ok(());
    }

    println!("{}", "Staking Pools".cyan().bold());
    println!();

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(vec![
            Cell::new("Pool").fg(Color::White),
            Cell::new("APY").fg(Color::White),
            Cell::new("TVL").fg(Color::White),
            Cell::new("Lock").fg(Color::White),
            Cell::new("Min/Max").fg(Color::White),
            Cell::new("Risk").fg(Color::White),
        ]);

    for pool in &pools {
        table.add_row(vec![
            Cell::new(&pool.name),
            Cell::new(&pool.apy).fg(Color::Green),
            Cell::new(&pool.total_staked),
            Cell::new(&pool.lock_period),
            Cell::new(format!("{} / {}", pool.min_stake, pool.max_stake)),
            risk_cell(pool.risk_level),
        ]);
    }

    println!("{table}");

    Ok(())
}

pub fn cmd_pricing(side: &str, format: &str) -> Result<()> {
    let side: OptionSide = side
        .parse()
        .map_err(|_| StratosError::Internal(format!("invalid chain side '{side}'")))?;
    let chain = catalog::option_chain(side);

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&chain)?);
        return Ok(());
    }

    println!(
        "{} {} {}",
        UNDERLYING_SYMBOL.cyan().bold(),
        "Options Chain".cyan().bold(),
        format!("({side})").dimmed()
    );
    println!();

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(vec![
            Cell::new("Strike").fg(Color::White),
            Cell::new("Bid").fg(Color::White),
            Cell::new("Ask").fg(Color::White),
            Cell::new("Last").fg(Color::White),
            Cell::new("Volume").fg(Color::White),
            Cell::new("Delta").fg(Color::White),
        ]);

    for quote in &chain {
        let delta_cell = if quote.delta >= 0.0 {
            Cell::new(quote.formatted_delta()).fg(Color::Green)
        } else {
            Cell::new(quote.formatted_delta()).fg(Color::Red)
        };

        table.add_row(vec![
            Cell::new(format!("${}", quote.strike)),
            Cell::new(format!("{:.2}", quote.bid)),
            Cell::new(format!("{:.2}", quote.ask)),
            Cell::new(format!("{:.2}", quote.last)),
            Cell::new(quote.volume),
            delta_cell,
        ]);
    }

    println!("{table}");

    Ok(())
}

fn risk_cell(risk: RiskLevel) -> Cell {
    match risk {
        RiskLevel::Low => Cell::new("Low").fg(Color::Green),
        RiskLevel::Medium => Cell::new("Medium").fg(Color::Yellow),
        RiskLevel::High => Cell::new("High").fg(Color::Red),
    }
}

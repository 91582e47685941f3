use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, Color, Table};
use stratos_core::{search_listings, AgentListing, Personality, StratosError};

#[derive(Subcommand)]
pub enum AgentsCommand {
    #[command(about = "List marketplace agents")]
    List {
        #[arg(short, long, help = "Filter by name or description fragment")]
        search: Option<String>,

        #[arg(short, long, help = "Filter by personality (conservative, moderate, aggressive)")]
        personality: Option<String>,

        #[arg(
            short,
            long,
            default_value = "text",
            help = "Output format (text, json)"
        )]
        format: String,
    },

    #[command(about = "Show detailed stats for a specific agent")]
    Show {
        #[arg(help = "Agent name")]
        name: String,
    },
}

pub async fn handle_agents_command(cmd: Option<AgentsCommand>) -> Result<()> {
    match cmd.unwrap_or(AgentsCommand::List {
        search: None,
        personality: None,
        format: "text".to_string(),
    }) {
        AgentsCommand::List {
            search,
            personality,
            format,
        } => cmd_agents_list(search.as_deref(), personality.as_deref(), &format),
        AgentsCommand::Show { name } => cmd_agents_show(&name),
    }
}

fn cmd_agents_list(
    search: Option<&str>,
    personality: Option<&str>,
    format: &str,
) -> Result<()> {
    let personality_filter = personality
        .map(|p| {
            p.parse::<Personality>()
                .map_err(|_| StratosError::UnknownPersonality(p.to_string()))
        })
        .transpose()?;

    let listings: Vec<AgentListing> = search_listings(search.unwrap_or(""))
        .into_iter()
        .filter(|l| personality_filter.map_or(true, |p| l.personality == p))
        .collect();

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&listings)?);
        return Ok(());
    }

    if listings.is_empty() {
        println!("{}", "No agents match the filter.".yellow());
        return Ok(());
    }

    println!("{}", "Marketplace Agents".cyan().bold());
    println!();

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(vec![
            Cell::new("Name").fg(Color::White),
            Cell::new("Personality").fg(Color::White),
            Cell::new("APY").fg(Color::White),
            Cell::new("PnL").fg(Color::White),
            Cell::new("Win Rate").fg(Color::White),
            Cell::new("Risk").fg(Color::White),
        ]);

    for listing in &listings {
        let pnl_cell = if listing.pnl_is_positive() {
            Cell::new(&listing.pnl).fg(Color::Green)
        } else {
            Cell::new(&listing.pnl).fg(Color::Red)
        };

        let risk_cell = match listing.risk_score {
            0..=39 => Cell::new(listing.risk_score).fg(Color::Green),
            40..=69 => Cell::new(listing.risk_score).fg(Color::Yellow),
            _ => Cell::new(listing.risk_score).fg(Color::Red),
        };

        table.add_row(vec![
            Cell::new(&listing.name),
            Cell::new(listing.personality.to_string()),
            Cell::new(&listing.apy),
            pnl_cell,
            Cell::new(&listing.win_rate),
            risk_cell,
        ]);
    }

    println!("{table}");
    println!();
    println!("  Total: {} agents", listings.len());

    Ok(())
}

fn cmd_agents_show(name: &str) -> Result<()> {
    let listing = search_listings("")
        .into_iter()
        .find(|l| l.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| StratosError::AgentNotFound(name.to_string()))?;

    println!("{} {}", "Agent:".cyan().bold(), listing.name.yellow());
    println!("{}", "═".repeat(50).dimmed());
    println!();
    println!("  {}", listing.description);
    println!();
    println!("  {:<15} {}", "Personality:".bold(), listing.personality);
    println!("  {:<15} {}/100", "Risk Score:".bold(), listing.risk_score);
    println!(
        "  {:<15} {}",
        "Status:".bold(),
        if listing.is_active {
            "Active".green()
        } else {
            "Inactive".red()
        }
    );
    println!();
    println!("  {}", "Performance".yellow().bold());
    println!("    {:<13} {}", "APY:", listing.apy);
    println!("    {:<13} {}", "PnL:", listing.pnl);
    println!("    {:<13} {}", "Volume:", listing.volume);
    println!("    {:<13} {}", "Sharpe:", listing.sharpe);
    println!("    {:<13} {}", "Max Drawdown:", listing.max_drawdown);
    println!("    {:<13} {}", "Win Rate:", listing.win_rate);

    Ok(())
}

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::process::ExitCode;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;

use commands::{
    handle_agents_command, handle_build_command, AgentsCommand, BuildCommand,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const NAME: &str = env!("CARGO_PKG_NAME");

#[derive(Parser)]
#[command(name = "stratos")]
#[command(author = "Stratos Labs <dev@stratos.trade>")]
#[command(version = VERSION)]
#[command(about = "Stratos - Conversational AI Trading Agent Builder")]
#[command(long_about = r#"
Stratos lets you describe a trading agent in plain language and turns the
description into a concrete configuration: strategy, risk level, and venues.

Use 'stratos build chat' for an interactive session, or 'stratos build once'
for a single request. The marketplace, staking, and pricing views are
available as read-only commands.
"#)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Build a trading agent from a natural-language description")]
    Build {
        #[command(subcommand)]
        action: Option<BuildCommand>,
    },

    #[command(about = "Browse marketplace agents")]
    Agents {
        #[command(subcommand)]
        action: Option<AgentsCommand>,
    },

    #[command(about = "List supported trading venues")]
    Venues {
        #[arg(
            short,
            long,
            default_value = "text",
            help = "Output format (text, json)"
        )]
        format: String,
    },

    #[command(about = "List available strategy templates")]
    Strategies {
        #[arg(
            short,
            long,
            default_value = "text",
            help = "Output format (text, json)"
        )]
        format: String,
    },

    #[command(about = "Show staking pools")]
    Staking {
        #[arg(
            short,
            long,
            default_value = "text",
            help = "Output format (text, json)"
        )]
        format: String,
    },

    #[command(about = "Show the options chain for the pricing view")]
    Pricing {
        #[arg(short, long, default_value = "calls", help = "Chain side (calls, puts)")]
        side: String,

        #[arg(
            short,
            long,
            default_value = "text",
            help = "Output format (text, json)"
        )]
        format: String,
    },

    #[command(about = "Show version information")]
    Version {
        #[arg(short, long)]
        detailed: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run(cli).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Build { action } => handle_build_command(action).await,
        Commands::Agents { action } => handle_agents_command(action).await,
        Commands::Venues { format } => commands::catalog::cmd_venues(&format),
        Commands::Strategies { format } => commands::catalog::cmd_strategies(&format),
        Commands::Staking { format } => commands::catalog::cmd_staking(&format),
        Commands::Pricing { side, format } => commands::catalog::cmd_pricing(&side, &format),
        Commands::Version { detailed } => cmd_version(detailed),
    }
}

fn cmd_version(detailed: bool) -> anyhow::Result<()> {
    if detailed {
        println!("{}", "Stratos Version Information".cyan().bold());
        println!("{}", "═".repeat(40).dimmed());
        println!("  {:<15} {}", "Version:".bold(), VERSION);
        println!("  {:<15} {}", "Name:".bold(), NAME);
        println!("  {:<15} Apache-2.0", "License:".bold());
        println!();
        println!("  {}", "Strategy Templates:".bold());
        for strategy in stratos_core::strategies() {
            println!("    - {} ({})", strategy.name, strategy.risk);
        }
        println!();
        println!("  {}", "Build Information:".bold());
        println!("    Rust Edition: 2021");
        #[cfg(debug_assertions)]
        println!("    Build:        Debug");
        #[cfg(not(debug_assertions))]
        println!("    Build:        Release");
    } else {
        println!("stratos {}", VERSION);
    }

    Ok(())
}

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;
use stratos_core::{
    lookup_venue, AgentConfiguration, BuilderController, MessageAuthor, SubmitOutcome,
};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::config::CliConfig;

#[derive(Subcommand)]
pub enum BuildCommand {
    #[command(about = "Interactive builder session")]
    Chat,

    #[command(about = "Classify a single request and print the configuration")]
    Once {
        #[arg(help = "Natural-language description of the agent")]
        message: String,

        #[arg(
            short,
            long,
            default_value = "text",
            help = "Output format (text, json)"
        )]
        format: String,
    },
}

pub async fn handle_build_command(action: Option<BuildCommand>) -> Result<()> {
    match action {
        Some(BuildCommand::Once { message, format }) => cmd_build_once(&message, &format).await,
        Some(BuildCommand::Chat) | None => cmd_build_chat().await,
    }
}

fn controller_from_config() -> Result<BuilderController> {
    let config = CliConfig::load()?;
    Ok(BuilderController::with_timing(config.timing()))
}

async fn cmd_build_once(message: &str, format: &str) -> Result<()> {
    let mut controller = controller_from_config()?;

    match controller.submit(message) {
        SubmitOutcome::Empty => {
            println!("{}", "Nothing to build: the message is empty.".yellow());
            return Ok(());
        }
        SubmitOutcome::Busy => anyhow::bail!("session unexpectedly busy"),
        SubmitOutcome::Scheduled(_) => {}
    }

    // One-shot mode skips the simulated delay.
    let config = controller
        .complete_pending()
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("no pending reply after submission"))?;

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let reply = controller
        .session()
        .transcript()
        .iter()
        .rev()
        .find(|m| m.author == MessageAuthor::Assistant)
        .map(|m| m.text.clone())
        .unwrap_or_default();

    println!("{} {}", "Assistant:".cyan().bold(), reply);
    println!();
    print_configuration(&config);

    Ok(())
}

async fn cmd_build_chat() -> Result<()> {
    let mut controller = controller_from_config()?;

    println!("{}", "Stratos Agent Builder".cyan().bold());
    println!("{}", "═".repeat(40).dimmed());
    println!();
    if let Some(greeting) = controller.session().transcript().first() {
        println!("{} {}", "Assistant:".cyan().bold(), greeting.text);
    }
    println!(
        "{}",
        "Describe the agent you want. Type 'exit' to leave.".dimmed()
    );
    println!();

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();
    let mut stdout = tokio::io::stdout();

    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let input = line.trim();
        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            break;
        }

        match controller.submit(input) {
            SubmitOutcome::Empty => continue,
            SubmitOutcome::Busy => {
                // Unreachable in this loop since every accepted submission is
                // revealed before the next prompt, but harmless to report.
                println!("{}", "Still thinking, hold on.".yellow());
                continue;
            }
            SubmitOutcome::Scheduled(_) => {}
        }

        println!("{}", "typing...".dimmed().italic());
        let config = controller.run_pending().await.cloned();

        if let Some(reply) = controller
            .session()
            .transcript()
            .iter()
            .rev()
            .find(|m| m.author == MessageAuthor::Assistant)
        {
            println!("{} {}", "Assistant:".cyan().bold(), reply.text);
        }

        if let Some(config) = config {
            println!();
            print_configuration(&config);
            println!();
        }
    }

    println!();
    println!("{}", "Session ended.".dimmed());
    Ok(())
}

fn print_configuration(config: &AgentConfiguration) {
    println!("  {}", "Agent Configuration".yellow().bold());
    println!("    {:<12} {}", "Name:".bold(), config.name);
    println!("    {:<12} {}", "Strategy:".bold(), config.strategy);
    println!("    {:<12} {}", "Risk:".bold(), config.risk_level);

    let venues: Vec<String> = config
        .venues
        .iter()
        .map(|id| {
            lookup_venue(id)
                .map(|v| v.name)
                .unwrap_or_else(|| id.clone())
        })
        .collect();
    println!("    {:<12} {}", "Venues:".bold(), venues.join(", "));
    println!("    {:<12} {}%", "Confidence:".bold(), config.confidence);
}

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use seniorsafe_agents::{SafetyDesk, STARTERS, WELCOME_MESSAGE};
use seniorsafe_core::responses::generate;
use seniorsafe_core::triage::lookup_error_message;
use seniorsafe_core::{
    classify_detailed, detect_emergency, format_emergency, format_resources, ScenarioTag,
    UrgencyTier,
};
use seniorsafe_observability::{init_tracing, AppMetrics};
use serde::Serialize;

#[derive(Debug, Parser)]
#[command(name = "seniorsafe")]
#[command(about = "SeniorSafe scam triage and reporting-agency lookup")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print emergency guidance for a message, if it needs any.
    Check { message: String },
    /// Show the urgency tier, scenario and matched phrase as JSON.
    Classify { message: String },
    /// List reporting agencies for a ZIP code.
    Resources {
        zip: String,
        #[arg(long)]
        json: bool,
    },
    /// Print the scripted guidance for a scenario tag.
    Guidance { scenario: String },
    /// Interactive session.
    Chat,
}

#[derive(Debug, Serialize)]
struct ClassifyOutput<'a> {
    message: &'a str,
    tier: UrgencyTier,
    scenario: Option<ScenarioTag>,
    matched_phrase: Option<&'static str>,
}

fn main() -> Result<()> {
    init_tracing("seniorsafe_cli");
    let cli = Cli::parse();

    match cli.command {
        Command::Check { message } => {
            let check = detect_emergency(&message);
            match check.guidance {
                Some(guidance) => println!("{guidance}"),
                None => println!(
                    "No emergency detected (urgency: {}). Continue with normal guidance.",
                    check.tier
                ),
            }
        }
        Command::Classify { message } => {
            let hit = classify_detailed(&message);
            let output = ClassifyOutput {
                message: &message,
                tier: hit.tier,
                scenario: hit.scenario,
                matched_phrase: hit.matched_phrase,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Command::Resources { zip, json } => {
            let desk = SafetyDesk::new(AppMetrics::shared());
            match desk.local_resources(&zip) {
                Ok(jurisdiction) if json => {
                    println!("{}", serde_json::to_string_pretty(&jurisdiction)?)
                }
                Ok(jurisdiction) => println!(
                    "{}",
                    format_resources(
                        &jurisdiction.resources,
                        jurisdiction.state.as_str(),
                        zip.trim()
                    )
                ),
                Err(error) => bail!("{}", lookup_error_message(error)),
            }
        }
        Command::Guidance { scenario } => {
            let tag = ScenarioTag::parse(&scenario)
                .with_context(|| format!("unknown scenario {scenario:?}"))?;
            let response = generate(UrgencyTier::Critical, Some(tag))
                .context("scenario has no guidance template")?;
            println!("{}", format_emergency(response));
        }
        Command::Chat => run_chat()?,
    }

    Ok(())
}

fn run_chat() -> Result<()> {
    let desk = SafetyDesk::new(AppMetrics::shared());

    println!("{WELCOME_MESSAGE}\n");
    println!("Quick start:");
    for starter in STARTERS {
        println!("- {}: {}", starter.label, starter.message);
    }
    println!("\nType 'exit' to quit.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let message = line.trim();

        if message.eq_ignore_ascii_case("exit") || message.eq_ignore_ascii_case("quit") {
            break;
        }
        if message.is_empty() {
            continue;
        }

        let reply = desk.handle_message(message);
        println!("\n{}\n", reply.reply_text);

        if !reply.suggested_actions.is_empty() {
            println!("Next steps you can take:");
            for action in reply.suggested_actions {
                println!("- {}", action.label);
            }
            println!();
        }
    }

    Ok(())
}

#![forbid(unsafe_code)]
use clap::{Parser, Subcommand};
use colored::*;
use scrollledger::block::Payload;
use scrollledger::config::load_config;
use scrollledger::ledger::Ledger;
use scrollledger::observer::TracingObserver;
use scrollledger::registry::NftRegistry;
use serde_json::json;
use std::time::Instant;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Runs an end-to-end mint / transfer / seal / validate walkthrough
    Demo {
        /// Number of NFTs to mint before sealing
        #[arg(long, default_value_t = 3)]
        mints: usize,
    },
    /// Times proof-of-work mining at a given difficulty
    Bench {
        /// Required count of leading zero hex characters
        #[arg(long, default_value_t = 4)]
        difficulty: usize,
        /// Number of blocks to mine
        #[arg(long, default_value_t = 3)]
        blocks: usize,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Demo { mints } => demo(*mints)?,
        Commands::Bench { difficulty, blocks } => bench(*difficulty, *blocks)?,
    }

    Ok(())
}

fn demo(mints: usize) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;
    println!(
        "{}",
        format!(
            "📜  ScrollLedger demo (difficulty {})",
            config.ledger.difficulty
        )
        .bright_cyan()
    );

    let ledger = Ledger::with_options(
        config.ledger.difficulty,
        &config.ledger.genesis_marker,
        Box::new(TracingObserver),
    )?;
    let mut registry = NftRegistry::with_ledger(ledger, &config.registry.house_owner);

    let mut first_token = None;
    for n in 1..=mints {
        let nft = registry.mint(
            &format!("Scroll #{}", n),
            json!({ "edition": n, "series": "demo" }),
        );
        println!(
            "  minted {} {}",
            nft.token_id.bright_yellow(),
            nft.name.bright_green()
        );
        first_token.get_or_insert(nft.token_id);
    }

    if let Some(token_id) = &first_token {
        registry.transfer(token_id, "alice")?;
        println!("  transferred {} to {}", token_id.bright_yellow(), "alice");
    }

    match registry.immortalize() {
        Some(receipt) => {
            println!("{}", "Pending records immortalized!".bright_green());
            println!("{}", serde_json::to_string_pretty(&receipt)?);
        }
        None => println!("{}", "Nothing to seal.".yellow()),
    }

    let info = registry.ledger().info();
    println!("{}", "Chain info:".bright_cyan());
    println!("{}", serde_json::to_string_pretty(&info)?);
    println!("{}", "Collection stats:".bright_cyan());
    println!("{}", serde_json::to_string_pretty(&registry.stats())?);

    if info.valid {
        println!("{}", "Chain is consistent.".bright_green());
    } else {
        println!("{}", "Chain failed validation!".bright_red());
    }

    Ok(())
}

fn bench(difficulty: usize, blocks: usize) -> Result<(), Box<dyn std::error::Error>> {
    println!(
        "{}",
        format!("⛏️   Mining {} blocks at difficulty {}", blocks, difficulty).bright_cyan()
    );

    let mut ledger = Ledger::new(difficulty)?;
    for n in 1..=blocks {
        let start = Instant::now();
        let receipt = ledger.append_raw(Payload::Marker(format!("bench entry {}", n)));
        println!(
            "  block {} in {:.2}s  {}",
            receipt.index,
            start.elapsed().as_secs_f64(),
            receipt.digest.bright_yellow()
        );
    }

    println!(
        "valid: {}",
        if ledger.validate() {
            "true".bright_green()
        } else {
            "false".bright_red()
        }
    );
    Ok(())
}

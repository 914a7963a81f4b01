//! Big O Advisor Binary
//!
//! Rates a five-card starting hand and suggests a preflop action.

use bigo::*;
use clap::Parser;
use colored::Colorize;

const SAMPLE: [&str; HAND_SIZE] = ["As", "Kd", "Qc", "Jh", "2s"];

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(help = "Five hole cards, e.g. As Kd Qc Jh 2s (defaults to that sample hand)")]
    cards: Vec<String>,
    #[arg(long, help = "Itemize the bonuses behind the rating")]
    explain: bool,
    #[arg(long, help = "Print the result as a JSON object")]
    json: bool,
    #[arg(short, long, action = clap::ArgAction::Count, help = "Log more (-v debug, -vv trace)")]
    verbose: u8,
}

impl Args {
    fn level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
    /// "As Kd" "Qc Jh 2s" and As Kd Qc Jh 2s are the same hand
    fn tokens(&self) -> Vec<String> {
        if self.cards.is_empty() {
            SAMPLE.iter().map(|s| s.to_string()).collect()
        } else {
            self.cards
                .iter()
                .flat_map(|arg| arg.split_whitespace())
                .map(String::from)
                .collect()
        }
    }
}

fn main() {
    let args = Args::parse();
    log(args.level());
    if let Err(e) = run(&args) {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let ref tokens = args.tokens();
    log::info!("evaluating {}", tokens.join(" "));
    let breakdown = explain(tokens)?;
    let action = suggest(tokens)?;
    let hand = Hand::try_from(tokens.as_slice())?;
    if args.json {
        let json = serde_json::json!({
            "hand": hand,
            "breakdown": breakdown,
            "rating": breakdown.rating(),
            "action": action,
        });
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        println!("Hand: {}", hand);
        println!("Rating: {}", evaluate(tokens)?);
        println!("Suggested action: {}", paint(action));
        if args.explain {
            println!("{}", breakdown);
        }
    }
    Ok(())
}

fn paint(action: Action) -> colored::ColoredString {
    match action {
        Action::Raise => action.to_string().green(),
        Action::Call => action.to_string().yellow(),
        Action::Fold => action.to_string().red(),
    }
}

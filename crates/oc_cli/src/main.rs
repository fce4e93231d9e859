//! Cricket simulation CLI
//!
//! Runs auto-played matches from the command line: single matches with
//! ball-by-ball commentary, batch runs for outcome statistics, and a dump
//! of the resolution tables per difficulty.

use anyhow::Result;
use clap::{Parser, Subcommand};

use oc_core::engine::probability;
use oc_core::{
    commentary, Difficulty, Innings, MatchConfig, MatchEngine, MatchWinner, SessionManager,
};

#[derive(Parser)]
#[command(name = "oc_cli")]
#[command(about = "Turn-based cricket match simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Auto-play one match and print commentary plus the scorecard
    Simulate {
        /// Overs per innings
        #[arg(long, default_value = "5")]
        overs: u16,

        /// Batting difficulty: easy | normal | hard
        #[arg(long, default_value = "normal")]
        difficulty: String,

        /// RNG seed; omit for a random match
        #[arg(long)]
        seed: Option<u64>,

        /// Suppress ball-by-ball commentary
        #[arg(long, default_value = "false")]
        quiet: bool,
    },

    /// Auto-play many matches and print win/tie frequencies
    Batch {
        /// Number of matches
        #[arg(long, default_value = "1000")]
        matches: u64,

        /// Overs per innings
        #[arg(long, default_value = "5")]
        overs: u16,

        /// Batting difficulty: easy | normal | hard
        #[arg(long, default_value = "normal")]
        difficulty: String,

        /// Seed for the first match; subsequent matches increment it
        #[arg(long, default_value = "0")]
        seed: u64,
    },

    /// Print the outcome tables for a difficulty
    Tables {
        /// Batting difficulty: easy | normal | hard
        #[arg(long, default_value = "normal")]
        difficulty: String,
    },

    /// Exercise the JSON API: new match + one ball, printing raw responses
    Json {
        /// RNG seed
        #[arg(long, default_value = "0")]
        seed: u64,
    },
}

fn parse_difficulty(s: &str) -> Result<Difficulty> {
    s.parse::<Difficulty>().map_err(|e| anyhow::anyhow!(e))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate { overs, difficulty, seed, quiet } => {
            let config = MatchConfig::new(overs, parse_difficulty(&difficulty)?);
            let mut engine = match seed {
                Some(seed) => MatchEngine::with_seed(config, seed)?,
                None => MatchEngine::new(config)?,
            };

            while !engine.is_over() {
                engine.play_ball(None)?;
            }

            let state = engine.state();
            if !quiet {
                let mut innings = Innings::Player;
                println!("--- Player innings ---");
                for event in &state.history {
                    if event.innings != innings {
                        innings = event.innings;
                        println!("--- Computer innings (target {}) ---", state.player_score + 1);
                    }
                    println!("{}", commentary::describe(event));
                }
                println!();
            }

            for side in [Innings::Player, Innings::Computer] {
                let stats = engine.innings_stats(side);
                println!(
                    "{:<8} {}  ({} balls, {}x4, {}x6, SR {:.1})",
                    side.name(),
                    stats.scoreline(),
                    stats.balls_faced,
                    stats.fours,
                    stats.sixes,
                    stats.strike_rate()
                );
            }

            if let Some(summary) = engine.match_summary() {
                println!("\n{}", summary.headline());
            }
        }

        Commands::Batch { matches, overs, difficulty, seed } => {
            let config = MatchConfig::new(overs, parse_difficulty(&difficulty)?);
            let mut player_wins = 0u64;
            let mut computer_wins = 0u64;
            let mut ties = 0u64;

            for i in 0..matches {
                let mut engine = MatchEngine::with_seed(config, seed.wrapping_add(i))?;
                while !engine.is_over() {
                    engine.play_ball(None)?;
                }
                match engine.match_summary().map(|s| s.winner) {
                    Some(MatchWinner::Player) => player_wins += 1,
                    Some(MatchWinner::Computer) => computer_wins += 1,
                    Some(MatchWinner::Tie) => ties += 1,
                    None => anyhow::bail!("finished match without a summary"),
                }
            }

            let pct = |n: u64| n as f64 / matches as f64 * 100.0;
            println!("{} matches, {} overs, {} difficulty", matches, overs, difficulty);
            println!("  player   {:>6} ({:.1}%)", player_wins, pct(player_wins));
            println!("  computer {:>6} ({:.1}%)", computer_wins, pct(computer_wins));
            println!("  tie      {:>6} ({:.1}%)", ties, pct(ties));
        }

        Commands::Tables { difficulty } => {
            let difficulty = parse_difficulty(&difficulty)?;
            let tables = probability::tables_for(difficulty);

            println!("Batting ({:?}), cumulative thresholds per outcome:", difficulty);
            println!("{:<12} {:>6} {:>6} {:>6} {:>6} {:>6}", "shot", 0, 1, 2, 4, 6);
            for shot in oc_core::ShotType::ALL {
                let c = tables.shot(shot).cumulative;
                println!(
                    "{:<12} {:>6.2} {:>6.2} {:>6.2} {:>6.2} {:>6.2}",
                    shot.name(),
                    c[0],
                    c[1],
                    c[2],
                    c[3],
                    c[4]
                );
            }

            println!("\nBowling band edges (difficulty-independent):");
            println!("{:<12} {:>7} {:>7}", "delivery", "wicket", "dot");
            for delivery in oc_core::DeliveryType::ALL {
                let bands = tables.delivery(delivery);
                println!("{:<12} {:>7.2} {:>7.2}", delivery.name(), bands.wicket, bands.dot);
            }
        }

        Commands::Json { seed } => {
            let mut manager = SessionManager::new();
            let request = format!(r#"{{"schema_version":1,"seed":{}}}"#, seed);
            let response = oc_core::new_match_json(&mut manager, &request)?;
            println!("new_match  -> {}", response);

            let value: serde_json::Value = serde_json::from_str(&response)?;
            let session_id = value["session_id"]
                .as_str()
                .ok_or_else(|| anyhow::anyhow!("response missing session_id"))?
                .to_string();

            let request = format!(
                r#"{{"schema_version":1,"session_id":"{}","action":{{"shot":"drive"}}}}"#,
                session_id
            );
            let response = oc_core::play_ball_json(&mut manager, &request)?;
            println!("play_ball  -> {}", response);
        }
    }

    Ok(())
}

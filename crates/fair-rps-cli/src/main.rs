//! Fair RPS command line
//!
//! Plays one round of rock-paper-scissors over any odd number of moves.
//! The HMAC of the computer's move is printed before you choose and the key
//! afterwards, so the round can be checked with `fair-rps verify`.
//!
//! Usage: fair-rps Rock Paper Scissors Lizard Spock

mod render;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::Select;
use fair_rps_core::{verify_commitment, EngineConfig, GameError, HashAlgorithm, Outcome, Round};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "fair-rps", author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Move names: an odd number (at least 3) of distinct names
    moves: Vec<String>,

    /// Hash function used for the HMAC commitment
    #[arg(long, env = "FAIR_RPS_ALGORITHM", default_value_t = HashAlgorithm::Sha3_256)]
    algorithm: HashAlgorithm,

    /// Play this move (1-based) instead of showing the menu
    #[arg(long)]
    pick: Option<usize>,

    /// Print the round receipt as JSON when the round is over
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a revealed key against the HMAC shown before the move
    Verify {
        /// The computer's move as revealed after the round
        #[arg(long)]
        message: String,

        /// Revealed HMAC key (hex)
        #[arg(long)]
        key: String,

        /// HMAC shown before the move (hex)
        #[arg(long)]
        digest: String,

        #[arg(long, env = "FAIR_RPS_ALGORITHM", default_value_t = HashAlgorithm::Sha3_256)]
        algorithm: HashAlgorithm,
    },
}

/// What the user picked from the menu
enum Choice {
    Move(usize),
    Help,
    Exit,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{} {err:#}", "error:".bold().bright_red());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    init_tracing()?;
    let cli = Cli::parse();

    match &cli.command {
        Some(Command::Verify {
            message,
            key,
            digest,
            algorithm,
        }) => verify(*algorithm, message, key, digest),
        None => play(&cli),
    }
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")
}

fn play(cli: &Cli) -> Result<()> {
    let config = EngineConfig::with_algorithm(cli.algorithm);
    let mut round = Round::with_config(config);

    match round.setup(cli.moves.as_slice()) {
        Ok(()) => {}
        Err(GameError::Setup(reason)) => {
            eprintln!("{} {}", "Invalid input:".bold().bright_red(), reason);
            eprintln!("Example: fair-rps Rock Paper Scissors");
            std::process::exit(1);
        }
        Err(err) => return Err(err.into()),
    }
    info!(moves = round.move_count(), algorithm = %cli.algorithm, "round ready");

    let moves = round.moves();
    println!("{}", render::separator(render::BANNER_WIDTH));
    println!("{} {}", "HMAC:".bold().blue(), round.pending_display().green());
    println!("{}", render::separator(render::BANNER_WIDTH));

    let index = match cli.pick {
        Some(pick) => pick_index(pick, moves.len())?,
        None => loop {
            match prompt(&moves)? {
                Choice::Move(index) => break index,
                Choice::Help => {
                    println!("{}", render::separator(render::BANNER_WIDTH));
                    print!("{}", render::outcome_table(&moves, &round.outcome_table()));
                    println!("{}", render::separator(render::BANNER_WIDTH));
                }
                Choice::Exit => {
                    println!("{}", "Bye!".bold().cyan());
                    return Ok(());
                }
            }
        },
    };

    let outcome = round.submit_move(index)?;

    println!("{} {}", "Your move:".bold().bright_green(), moves[index]);
    println!(
        "{} {}\n",
        "Computer's move:".bold().blue(),
        round.pending_display()
    );
    let message = render::outcome_message(outcome);
    match outcome {
        Outcome::Win => println!("{}", message.bold().green()),
        Outcome::Lose => println!("{}", message.bold().bright_red()),
        Outcome::Draw => println!("{}", message.bold().cyan()),
    }

    let key = round
        .revealed_key()
        .context("round finished without a revealed key")?;
    println!("{}", render::separator(render::BANNER_WIDTH + 4));
    println!("{} {}", "HMAC key:".bold().blue(), key.green());
    println!("{}", render::separator(render::BANNER_WIDTH + 4));

    if cli.json {
        let receipt = round
            .receipt()
            .context("round finished without a receipt")?;
        println!("{}", receipt.to_json()?);
    }
    Ok(())
}

fn prompt(moves: &[String]) -> Result<Choice> {
    let items = render::menu_items(moves);
    let selected = Select::new()
        .with_prompt("Available moves")
        .items(&items)
        .default(0)
        .interact()?;
    debug!(selected, "menu selection");

    Ok(if selected < moves.len() {
        Choice::Move(selected)
    } else if selected == moves.len() {
        Choice::Help
    } else {
        Choice::Exit
    })
}

/// Turn a 1-based `--pick` into a move index
fn pick_index(pick: usize, count: usize) -> Result<usize> {
    if pick == 0 || pick > count {
        bail!("--pick must be between 1 and {count}, got {pick}");
    }
    Ok(pick - 1)
}

fn verify(algorithm: HashAlgorithm, message: &str, key: &str, digest: &str) -> Result<()> {
    if verify_commitment(algorithm, message, key, digest)? {
        println!(
            "{}",
            "HMAC matches: the move was fixed before you played"
                .bold()
                .green()
        );
        Ok(())
    } else {
        bail!("HMAC does not match the revealed move and key")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_moves() {
        let cli = Cli::try_parse_from(["fair-rps", "Rock", "Paper", "Scissors"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.moves, ["Rock", "Paper", "Scissors"]);
        assert_eq!(cli.algorithm, HashAlgorithm::Sha3_256);
        assert!(!cli.json);
    }

    #[test]
    fn test_parse_algorithm_and_pick() {
        let cli = Cli::try_parse_from([
            "fair-rps",
            "--algorithm",
            "sha256",
            "--pick",
            "2",
            "a",
            "b",
            "c",
        ])
        .unwrap();
        assert_eq!(cli.algorithm, HashAlgorithm::Sha256);
        assert_eq!(cli.pick, Some(2));
    }

    #[test]
    fn test_unknown_algorithm_rejected() {
        assert!(Cli::try_parse_from(["fair-rps", "--algorithm", "md5", "a", "b", "c"]).is_err());
    }

    #[test]
    fn test_parse_verify() {
        let cli = Cli::try_parse_from([
            "fair-rps", "verify", "--message", "Rock", "--key", "00", "--digest", "11",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Verify { ref message, .. }) if message == "Rock"
        ));
    }

    #[test]
    fn test_pick_index() {
        assert_eq!(pick_index(1, 3).unwrap(), 0);
        assert_eq!(pick_index(3, 3).unwrap(), 2);
        assert!(pick_index(0, 3).is_err());
        assert!(pick_index(4, 3).is_err());
    }

    #[test]
    fn test_verify_round() {
        let mut round: Round = Round::default();
        round.setup(&["a", "b", "c"]).unwrap();
        let digest = round.pending_display();
        round.submit_move(0).unwrap();
        let key = round.revealed_key().unwrap();

        assert!(verify(
            HashAlgorithm::Sha3_256,
            &round.pending_display(),
            &key,
            &digest
        )
        .is_ok());
        assert!(verify(HashAlgorithm::Sha3_256, "zzz", &key, &digest).is_err());
    }
}

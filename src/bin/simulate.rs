use std::error::Error;
use std::process;
use std::thread;
use std::time::Duration;

use clap::{ArgAction, Parser};
use tracing::{info, warn};

use crazy_eights::{
    Bot, Game, GameError, Side, create_bot_from_spec, describe_action, label_for_spec,
    render_state, winner_points,
};

/// Default base seed for deterministic runs.
const DEFAULT_SEED: u64 = 0xDEC0_1DED_5EED_F00D;

#[derive(Parser, Debug)]
#[command(
    name = "simulate",
    about = "Play Crazy Eights against the computer, or run batches of games."
)]
struct Args {
    /// Number of games to play
    #[arg(short = 'g', long = "games", default_value_t = 1)]
    games: usize,

    /// Base RNG seed; game N is dealt with seed + N
    #[arg(short = 's', long = "seed", default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Who sits in the human's chair: human[:name], random[:seed] or heuristic
    #[arg(long = "seat", default_value = "human")]
    seat: String,

    /// Safety cap on turns per game; longer games are aborted
    #[arg(long = "max-turns", default_value_t = 500)]
    max_turns: usize,

    /// Show the table and every event as the game goes
    #[arg(long = "visualize", action = ArgAction::SetTrue)]
    visualize: bool,

    /// Pause before each computer turn, in milliseconds
    #[arg(long = "think-ms", default_value_t = 0)]
    think_ms: u64,

    /// Log progress at info level
    #[arg(long = "show-output", action = ArgAction::SetTrue)]
    show_output: bool,

    /// Log every transition at debug level
    #[arg(short = 'v', long = "verbose", action = ArgAction::SetTrue)]
    verbose: bool,
}

#[derive(Debug, Default)]
struct Tally {
    human_wins: usize,
    computer_wins: usize,
    aborted: usize,
    human_points: u64,
    computer_points: u64,
}

fn main() {
    let args = Args::parse();

    let filter = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    if args.games == 0 {
        return Err("--games must be at least 1".into());
    }
    let interactive = label_for_spec(&args.seat) == "human";
    if interactive && args.games > 1 {
        warn!(games = args.games, "playing several interactive games in a row");
    }
    let show = args.visualize || interactive;
    let mut seat = create_bot_from_spec(&args.seat, args.seed)?;
    let mut tally = Tally::default();

    for index in 0..args.games {
        let seed = args.seed.wrapping_add(index as u64);
        let mut game = Game::builder().with_seed(seed).build()?;
        game.start()?;
        if show {
            println!("\n=== Game {} (seed {seed:#x}) ===", index + 1);
        }
        match play_game(&mut game, seat.as_mut(), &args, show)? {
            Some(Side::Human) => tally.human_wins += 1,
            Some(Side::Computer) => tally.computer_wins += 1,
            None => tally.aborted += 1,
        }
        let snapshot = game.snapshot();
        if let Some((winner, points)) = winner_points(&snapshot) {
            match winner {
                Side::Human => tally.human_points += u64::from(points),
                Side::Computer => tally.computer_points += u64::from(points),
            }
            info!(game = index + 1, ?winner, points, "game finished");
            if show {
                println!("{}", render_state(&snapshot));
                println!("Winner scores {points} points.");
            }
        } else {
            warn!(game = index + 1, max_turns = args.max_turns, "game aborted");
        }
    }

    println!(
        "Seat ({}): {} wins, {} points",
        label_for_spec(&args.seat),
        tally.human_wins,
        tally.human_points
    );
    println!(
        "Computer: {} wins, {} points",
        tally.computer_wins, tally.computer_points
    );
    if tally.aborted > 0 {
        println!("Aborted after {} turns: {}", args.max_turns, tally.aborted);
    }
    Ok(())
}

/// Drives one game to the end. Returns `None` when the turn cap was hit.
fn play_game(
    game: &mut Game,
    seat: &mut dyn Bot,
    args: &Args,
    show: bool,
) -> Result<Option<Side>, GameError> {
    let mut turns = 0usize;
    while !game.is_finished() {
        print_events(game, show);
        if turns >= args.max_turns {
            return Ok(None);
        }
        match game.turn_owner() {
            Side::Human => {
                let snapshot = game.snapshot();
                let legal_actions = game.legal_actions(Side::Human);
                if legal_actions.is_empty() {
                    return Err(GameError::WrongPhase(game.phase()));
                }
                let action = seat.select_action(&snapshot, &legal_actions);
                if args.visualize {
                    println!("{}", render_state(&snapshot));
                    println!("Chosen action: {}", describe_action(&snapshot, &action));
                }
                game.apply_action(Side::Human, action)?;
            }
            Side::Computer => {
                if args.think_ms > 0 {
                    thread::sleep(Duration::from_millis(args.think_ms));
                }
                game.play_computer_turn()?;
            }
        }
        turns += 1;
    }
    print_events(game, show);
    Ok(game.winner())
}

fn print_events(game: &mut Game, show: bool) {
    let events = game.drain_events();
    if show {
        for event in events {
            println!("  - {event}");
        }
    }
}

//! Beast Cave - terminal front end
//!
//! Reads one command per line and prints the board after every action.
//! All game rules live in the library; this file only maps keys to session
//! calls and turns snapshots and events into text.

use std::io::{self, Write};
use std::path::PathBuf;

use beast_cave::core::error::Result;
use beast_cave::core::types::Coord;
use beast_cave::session::{Occupant, SessionSnapshot};
use beast_cave::simulation::{ActionOutcome, DeathCause, GameEvent, Percept, SessionStatus};
use beast_cave::world::{GRID_HEIGHT, GRID_WIDTH};
use beast_cave::{ActionResult, GameConfig, GameSession};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Hunt the treasure, dodge the pits, and mind the beast
#[derive(Parser, Debug)]
#[command(name = "beast_cave")]
#[command(about = "Play the beast cave hazard-search game in the terminal")]
struct Args {
    /// Random seed for reproducible caves
    #[arg(long)]
    seed: Option<u64>,

    /// TOML config file (placement and scoring overrides)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print a JSON snapshot after every action instead of the board
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("beast_cave=info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let mut session = GameSession::new(config)?;

    println!("\n=== BEAST CAVE ===");
    println!("Find the treasure and climb out at the start cell.");
    println!();
    println!("Commands:");
    println!("  a / d   - Turn left / right");
    println!("  w       - Move forward");
    println!("  g       - Grab");
    println!("  f       - Shoot your one arrow");
    println!("  n       - New game (Enter also works once a game is over)");
    println!("  s       - Print the snapshot as JSON");
    println!("  q       - Quit");
    println!();

    show(&session.snapshot(), args.json)?;

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();

        if session.status().is_over() && input.is_empty() {
            let snapshot = session.new_session()?;
            show(&snapshot, args.json)?;
            continue;
        }

        let result = match input {
            "" => continue,
            "q" | "quit" => break,
            "n" | "new" => {
                let snapshot = session.new_session()?;
                show(&snapshot, args.json)?;
                continue;
            }
            "s" | "status" => {
                println!("{}", session.snapshot().to_json()?);
                continue;
            }
            "a" | "left" => session.turn_left(),
            "d" | "right" => session.turn_right(),
            "w" | "move" => session.move_forward(),
            "g" | "grab" => session.grab(),
            "f" | "shoot" => session.shoot(),
            _ => {
                println!("Unknown command. Available: a, d, w, g, f, n, s, q");
                continue;
            }
        };

        report(&result);
        show(&result.snapshot, args.json)?;
    }

    println!("\nGoodbye! Final score: {}", session.score());
    Ok(())
}

fn report(result: &ActionResult) {
    match result.outcome {
        ActionOutcome::SessionOver => {
            println!("The game is over. Press Enter or 'n' for a new one.");
            return;
        }
        ActionOutcome::NoProjectile => {
            println!("Your quiver is empty.");
            return;
        }
        ActionOutcome::Applied => {}
    }

    for event in &result.events {
        match event {
            GameEvent::Bump => println!("*bump* You walked into a wall."),
            GameEvent::Grab => println!("You pick up the treasure!"),
            GameEvent::Shot => println!("You loose your arrow..."),
            GameEvent::Scream => println!("A terrible scream echoes through the cave!"),
            GameEvent::Died(DeathCause::Beast) => println!("The beast devours you."),
            GameEvent::Died(DeathCause::Pit) => println!("You fall into a pit."),
            GameEvent::Won => println!("You escaped with the treasure!"),
            GameEvent::Turned(_) | GameEvent::Move { .. } => {}
        }
    }
}

fn show(snapshot: &SessionSnapshot, json: bool) -> Result<()> {
    if json {
        println!("{}", snapshot.to_json()?);
    } else {
        print!("{}", render_board(snapshot));
    }
    Ok(())
}

fn render_board(snapshot: &SessionSnapshot) -> String {
    let mut out = String::new();

    for y in (0..GRID_HEIGHT as i32).rev() {
        out.push_str("  ");
        for x in 0..GRID_WIDTH as i32 {
            let glyph = match snapshot.cell(Coord::new(x, y)) {
                Some(cell) if cell.current => snapshot.agent.orientation.glyph(),
                Some(cell) => match cell.occupant {
                    Some(Occupant::Pit) => 'O',
                    Some(Occupant::Beast { alive: true }) => 'B',
                    Some(Occupant::Beast { alive: false }) => 'x',
                    Some(Occupant::Treasure) => '$',
                    None if cell.visited => '.',
                    None => '#',
                },
                None => '?',
            };
            out.push(glyph);
            out.push(' ');
        }
        out.push('\n');
    }

    let percepts: Vec<&str> = snapshot
        .percepts
        .iter()
        .map(|p| match p {
            Percept::Stench => "stench",
            Percept::Breeze => "breeze",
            Percept::Glitter => "glitter",
        })
        .collect();

    out.push_str(&format!(
        "Score: {} | Arrows: {} | Treasure: {} | Senses: {}\n",
        snapshot.score,
        snapshot.agent.arrows,
        if snapshot.agent.has_treasure { "yes" } else { "no" },
        if percepts.is_empty() { "nothing".to_string() } else { percepts.join(", ") },
    ));

    match snapshot.status {
        SessionStatus::InProgress => {}
        SessionStatus::Won => out.push_str(&format!("*** YOU WIN *** Final score: {}\n", snapshot.score)),
        SessionStatus::Lost => out.push_str(&format!("*** GAME OVER *** Final score: {}\n", snapshot.score)),
    }
    out
}

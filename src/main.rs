use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use wordsearch::{
    format_elapsed, init_logging, print_round, Coord, Difficulty, Direction, GameSession,
    SessionState, SettingsStore, WordList,
};

const GAME_KEY: &str = "wordsearch";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
enum Commands {
    /// Play a round in the terminal.
    Play {
        #[arg(long, help = "Word category; defaults to the saved or random one")]
        category: Option<String>,
        #[arg(long, value_enum)]
        difficulty: Option<Difficulty>,
        #[arg(long, help = "Number of words to hide (1-10)")]
        count: Option<usize>,
        #[arg(long, help = "Fix RNG seed for reproducible puzzles (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Word list JSON file; built-in list when omitted")]
        words: Option<PathBuf>,
        #[arg(long, default_value = ".wordsearch")]
        config_dir: PathBuf,
    },
    /// List the available word categories.
    Categories {
        #[arg(long)]
        words: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            category,
            difficulty,
            count,
            seed,
            words,
            config_dir,
        } => {
            let word_list = load_word_list(words)?;

            let store = SettingsStore::new(config_dir);
            let mut settings = store.load(GAME_KEY);
            if let Some(category) = category {
                settings.category = category;
            }
            if let Some(difficulty) = difficulty {
                settings.difficulty = difficulty;
            }
            if let Some(count) = count {
                settings.count = count;
            }

            let mut rng = match seed {
                Some(s) => {
                    println!("Using fixed seed: {} (puzzle will be reproducible)", s);
                    SmallRng::seed_from_u64(s)
                }
                None => {
                    let mut seed_rng = rand::rng();
                    SmallRng::from_rng(&mut seed_rng)
                }
            };

            let mut session = GameSession::new();
            if let Err(e) = session.start_round(&mut rng, &word_list, "en", &settings) {
                // validation and missing-category errors are user-facing
                println!("{}", e);
                return Ok(());
            }
            store.save(GAME_KEY, &settings);

            play(&mut session, &mut rng)?;
        }
        Commands::Categories { words } => {
            let word_list = load_word_list(words)?;
            for category in word_list.categories("en").map_err(anyhow::Error::from)? {
                println!("{}", category);
            }
        }
    }
    Ok(())
}

fn load_word_list(path: Option<PathBuf>) -> anyhow::Result<WordList> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading word list {}", path.display()))?;
            WordList::from_json_str(&text)
                .with_context(|| format!("parsing word list {}", path.display()))
        }
        None => Ok(WordList::builtin()),
    }
}

fn play(session: &mut GameSession, rng: &mut SmallRng) -> anyhow::Result<()> {
    println!("\nSelect a word by typing its start and end cells: row col row col");
    println!("Commands: hint, quit\n");
    let start = Instant::now();
    let mut hint: Option<Coord> = None;

    loop {
        if session.tick(start.elapsed()) == SessionState::RoundLost {
            println!("Time's up! Try again!");
            session.abort();
            return Ok(());
        }
        print_round(session, hint.take());

        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            session.abort();
            return Ok(());
        }
        let input = line.trim();

        if session.tick(start.elapsed()) == SessionState::RoundLost {
            println!("Time's up! Try again!");
            session.abort();
            return Ok(());
        }

        match input {
            "q" | "quit" => {
                session.abort();
                return Ok(());
            }
            "h" | "hint" => {
                hint = session.hint(rng);
                if hint.is_none() {
                    println!("No hint available.");
                }
                continue;
            }
            _ => {}
        }

        let coords: Vec<usize> = input.split_whitespace().filter_map(|t| t.parse().ok()).collect();
        let [r1, c1, r2, c2] = coords[..] else {
            println!("Enter four numbers (row col row col), or 'hint' / 'quit'.");
            continue;
        };

        match select_line(session, (r1, c1), (r2, c2)) {
            Some(word) => println!("Found {}!", word),
            None => println!("Not one of the hidden words."),
        }

        if session.state() == SessionState::RoundWon {
            if let Some(result) = session.result() {
                println!(
                    "\nYou won! Time: {} | Score: {} points",
                    format_elapsed(result.elapsed_secs),
                    result.score
                );
            }
            session.abort();
            return Ok(());
        }
    }
}

/// Feed a straight drag from `from` to `to` into the session, cell by cell.
fn select_line(session: &mut GameSession, from: Coord, to: Coord) -> Option<String> {
    session.begin_selection(from);
    if let Some(dir) = Direction::between(from, to) {
        let mut step = 1;
        while let Some(coord) = dir.offset(from, step) {
            session.extend_selection(coord);
            if coord == to {
                break;
            }
            step += 1;
        }
    }
    session.end_selection()
}

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{info, LevelFilter};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::{backend::CrosstermBackend, Terminal};
use simple_logger::SimpleLogger;

use connect_four::config::AppConfig;
use connect_four::game::{DropOutcome, Game, GameOutcome};
use connect_four::ui::App;

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Two-player Connect Four")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Play without the TUI, printing the board to stdout
    #[arg(long)]
    headless: bool,

    /// Comma-separated columns (0-6) to play in headless mode
    #[arg(long, value_delimiter = ',')]
    moves: Vec<usize>,

    /// After the scripted moves, play random legal columns until the game ends
    #[arg(long)]
    random: bool,

    /// Seed for --random
    #[arg(long)]
    seed: Option<u64>,

    /// Increase log verbosity in headless mode (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.headless {
        let level = match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };
        SimpleLogger::new()
            .with_level(level)
            .init()
            .context("initializing logger")?;
    }

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    if cli.headless {
        run_headless(&cli, &config)
    } else {
        run_tui(&config).context("running terminal UI")
    }
}

fn run_tui(config: &AppConfig) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::with_config(config);
    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}

fn run_headless(cli: &Cli, config: &AppConfig) -> Result<()> {
    let mut game = Game::with_rules(config.rules);
    info!("playing with rules {:?}", game.rules());

    for (turn, &column) in cli.moves.iter().enumerate() {
        let outcome = game
            .drop_piece(column)
            .with_context(|| format!("move {} (column {column})", turn + 1))?;
        report(&outcome);
    }

    if cli.random {
        let mut rng = match cli.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        while !game.is_terminal() {
            let legal = game.legal_columns();
            let column = legal[rng.random_range(0..legal.len())];
            report(&game.drop_piece(column)?);
        }
    }

    print!("{}", game.board());
    match game.outcome() {
        Some(GameOutcome::Winner(player)) => println!("Winner: {}", player.name()),
        Some(GameOutcome::Draw) => println!("Draw"),
        None => println!("In progress, {} to move", game.current_player().name()),
    }
    Ok(())
}

fn report(outcome: &DropOutcome) {
    match *outcome {
        DropOutcome::Placed { row, column, player } => {
            info!("{} -> column {column}, row {row}", player.name())
        }
        DropOutcome::Won {
            row,
            column,
            player,
            axis,
        } => info!(
            "{} -> column {column}, row {row}: wins ({})",
            player.name(),
            axis.name()
        ),
        DropOutcome::Ignored { column } => info!("column {column} is full, move ignored"),
    }
}

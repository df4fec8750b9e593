use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use chat_connect_four::callback::{invite_button, BoardUpdate, Reply, Router};
use chat_connect_four::config::AppConfig;
use chat_connect_four::game::{Game, COLS};
use chat_connect_four::names::NameStore;
use chat_connect_four::render::{render_board, render_invite, render_update};

/// Connect Four whose state travels in button payloads.
#[derive(Parser)]
#[command(name = "connect4", about = "Stateless Connect Four for chat buttons", version)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect4.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the encoded state of a fresh game
    New { first: i64, second: i64 },

    /// Draw the board held in an encoded state
    Show { state: String },

    /// Print the invitation message and its join payload
    Invite { host: i64 },

    /// Route one button payload as if `actor` pressed it
    Press {
        #[arg(long = "as")]
        actor: i64,
        payload: String,
    },

    /// Store a display name in the name cache
    Name { id: i64, name: String },

    /// Print the default configuration as TOML
    DefaultConfig,

    /// Play a hot-seat game on this terminal, every move going through a payload
    Play {
        #[arg(long, default_value_t = 1)]
        blue: i64,
        #[arg(long, default_value_t = 2)]
        red: i64,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    let router = Router::new(&config.transport);

    match cli.command {
        Command::New { first, second } => {
            if first == second {
                bail!("a game needs two different players");
            }
            println!("{}", Game::create(first, second).encode());
        }
        Command::Show { state } => {
            let game = Game::decode(&state)?;
            println!("{}", render_board(game.board(), &config.render));
            println!(
                "turn: {} ({})",
                game.turn().name(),
                game.player_to_move()
            );
            println!("outcome: {:?}", game.evaluate());
        }
        Command::Invite { host } => {
            let names = open_names(&config)?;
            println!("{}", render_invite(&names.display(host), &config.render));
            println!("[{}] {}", invite_button(host).label, invite_button(host).payload);
        }
        Command::Press { actor, payload } => {
            let names = open_names(&config)?;
            match router.handle(actor, &payload)? {
                Reply::Ignored => println!("ignored"),
                Reply::Rejected(rejection) => println!("{}", rejection.notice()),
                Reply::Update(update) => print_update(&update, &names, &config),
            }
        }
        Command::Name { id, name } => {
            let mut names = open_names(&config)?;
            names.set(id, name);
            names
                .save()
                .with_context(|| format!("saving {}", config.names.path.display()))?;
        }
        Command::DefaultConfig => print!("{}", AppConfig::default_toml()),
        Command::Play { blue, red } => play(&router, &config, blue, red)?,
    }

    Ok(())
}

fn open_names(config: &AppConfig) -> Result<NameStore> {
    NameStore::open(&config.names.path)
        .with_context(|| format!("opening name cache {}", config.names.path.display()))
}

fn print_update(update: &BoardUpdate, names: &NameStore, config: &AppConfig) {
    println!("{}", render_update(update, names, &config.render));
    for button in &update.buttons {
        println!("[{}] {}", button.label, button.payload);
    }
}

/// Hot-seat loop. The game is re-decoded from its payload on every move,
/// exactly as a chat adapter would do it.
fn play(router: &Router, config: &AppConfig, blue: i64, red: i64) -> Result<()> {
    if blue == red {
        bail!("a game needs two different players");
    }
    let names = open_names(config)?;

    let mut update = match router.handle(red, &invite_button(blue).payload)? {
        Reply::Update(update) => update,
        other => bail!("could not start game: {:?}", other),
    };
    info!(state = %update.game.encode(), "game started");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        println!("{}\n", render_update(&update, &names, &config.render));
        if update.outcome.is_terminal() {
            break;
        }

        print!("column 1-{COLS} (q to quit): ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let input = line.trim();
        if input == "q" {
            break;
        }

        // Labels are 1-based; anything else goes through untouched and is
        // turned down by the router
        let column = match input.parse::<usize>() {
            Ok(n) if n >= 1 => (n - 1).to_string(),
            _ => input.to_string(),
        };
        let payload = format!("game:{}:{}", update.game.encode(), column);
        let actor = update.game.player_to_move();

        match router.handle(actor, &payload)? {
            Reply::Update(next) => update = next,
            Reply::Rejected(rejection) => println!("{}", rejection.notice()),
            Reply::Ignored => {}
        }
    }

    info!(outcome = ?update.outcome, "game finished");
    Ok(())
}

use anyhow::{Context, Result};
use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt};

use wordle_stats::{
    args::{Args, Command, GameArgs},
    config::Config,
    db::{self, SqliteStore},
    delivery::{SystemClipboard, deliver},
    evaluation::FinishedGame,
    gate::Submission,
    registration::HttpRegistrationClient,
    session::Session,
    share::{ShareEncoder, ShareFlags},
    ui::{ExitReason, run_ui},
};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_args(&args)?;
    let _guard = init_tracing(&config)?;

    match args.command.unwrap_or(Command::Stats) {
        Command::Stats => open_stats(&config, None).await,
        Command::Finish(game) => open_stats(&config, Some(game)).await,
        Command::Share(game) => share(&config, &game),
        Command::Register { email, name } => register(&config, &email, &name).await,
    }
}

/// Log to a daily file so the terminal UI stays clean.
fn init_tracing(config: &Config) -> Result<WorkerGuard> {
    let log_dir = config.log_dir();
    std::fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let appender = tracing_appender::rolling::daily(&log_dir, "wordle-stats.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}

fn flags(game: &GameArgs) -> ShareFlags {
    ShareFlags {
        hard_mode: game.hard,
        dark_mode: game.dark,
        high_contrast: game.high_contrast,
    }
}

async fn start_session(config: &Config) -> Result<Session<SqliteStore, HttpRegistrationClient>> {
    let pool = db::create_pool(&config.data_dir).await?;
    let store = SqliteStore::new(pool);
    let client = HttpRegistrationClient::new(config.registration_url.clone());

    Session::start(store, client, config).await
}

async fn open_stats(config: &Config, game: Option<GameArgs>) -> Result<()> {
    let mut session = start_session(config).await?;

    let share_flags = match game {
        Some(game) => {
            let finished = FinishedGame::from_patterns(&game.rows, game.lost, config.max_guesses)?;
            session.finish_game(finished).await?;
            flags(&game)
        }
        None => ShareFlags::default(),
    };

    match run_ui(session, share_flags, Box::new(SystemClipboard))? {
        ExitReason::Replay => println!("Enjoy another round!"),
        ExitReason::Closed | ExitReason::Quit => {}
    }

    Ok(())
}

fn share(config: &Config, game: &GameArgs) -> Result<()> {
    let finished = FinishedGame::from_patterns(&game.rows, game.lost, config.max_guesses)?;
    let encoder = ShareEncoder::new(config.game_title.clone(), config.max_guesses);
    let text = encoder.encode(finished.rows(), finished.did_lose(), flags(game));

    println!("{text}");
    let outcome = deliver(&mut SystemClipboard, &text);
    eprintln!("{}", outcome.message());

    Ok(())
}

async fn register(config: &Config, email: &str, name: &str) -> Result<()> {
    let mut session = start_session(config).await?;

    match session.gate_mut().submit(email, name).await {
        Ok(Submission::Started(watch)) => {
            println!("Unlocked. Sending your details...");
            let status = watch.finished().await;
            println!("Registration: {:?}", status);
        }
        Ok(Submission::AlreadyUnlocked) => println!("Already unlocked."),
        Ok(Submission::Suppressed) => println!("A registration is already being sent."),
        Err(e) if e.is_validation() => eprintln!("{e}"),
        Err(e) => return Err(e).context("Registration failed"),
    }

    Ok(())
}

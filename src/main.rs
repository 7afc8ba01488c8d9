use chrono::Utc;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use edutainment::config::{Command, Options, USAGE};
use edutainment::constants::INPUT_POLL_MS;
use edutainment::game::Game;
use edutainment::input::{handle_key, App, InputResult};
use edutainment::profile::{Profile, ProfileStore};
use edutainment::{build_info, logging, ui};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{error, info, warn};

fn main() -> io::Result<()> {
    let options = match Options::parse(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Run 'edutainment --help' for usage.");
            std::process::exit(1);
        }
    };

    match options.command {
        Command::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
        Command::Version => {
            println!("{}", build_info::version_line());
            return Ok(());
        }
        _ => {}
    }

    let store = match &options.data_dir {
        Some(dir) => ProfileStore::with_dir(dir)?,
        None => ProfileStore::new()?,
    };

    if let Err(e) = logging::init(store.data_dir()) {
        eprintln!("Warning: could not open log file: {}", e);
    }

    match options.command {
        Command::PrintStats => return print_stats(&store),
        Command::ResetStats => {
            store.reset()?;
            info!("profile reset");
            println!("High score and stats cleared.");
            return Ok(());
        }
        _ => {}
    }

    if !store.exists() {
        info!(path = %store.profile_path().display(), "no saved profile, starting fresh");
    }
    let profile = match store.load() {
        Ok(profile) => profile,
        Err(e) => {
            warn!(error = %e, "unreadable profile, starting fresh");
            println!("Warning: could not read saved profile: {}", e);
            println!("Starting with a fresh profile.");
            Profile::default()
        }
    };

    let mut game = profile.into_game();
    options.apply_to(&mut game);

    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(game);
    let result = run(&mut terminal, &mut app, &store, &mut rng);

    // Restore terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    save_profile(&store, &app.game);
    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    store: &ProfileStore,
    rng: &mut StdRng,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if !event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            continue;
        }

        if let Event::Key(key_event) = event::read()? {
            // Windows reports releases too
            if key_event.kind != KeyEventKind::Press {
                continue;
            }
            match handle_key(key_event, app, rng) {
                InputResult::Continue => {}
                InputResult::NeedsSave => save_profile(store, &app.game),
                InputResult::Quit => return Ok(()),
            }
        }
    }
}

fn save_profile(store: &ProfileStore, game: &Game) {
    let profile = Profile::from_game(game, Utc::now().timestamp());
    if let Err(e) = store.save(&profile) {
        error!(error = %e, path = %store.profile_path().display(), "failed to save profile");
    }
}

fn print_stats(store: &ProfileStore) -> io::Result<()> {
    let profile = store.load()?;
    println!("Player's Life Stats\n");
    for line in ui::dialogs::stats_lines(&profile.stats, profile.high_score) {
        println!("  {}", line);
    }
    Ok(())
}

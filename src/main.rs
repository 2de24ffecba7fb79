mod app;
mod bus;
mod coordinator;
mod domain;
mod input;
mod persistence;
mod ui;

use anyhow::Result;
use app::App;
use bus::EventBus;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event as TermEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::Store;
use persistence::{ensure_data_dir, init_local_dir, load_state, save_state, store_file, KvStore};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "taskpad")]
#[command(about = "A keyboard-driven terminal todo list with projects, due dates, and priorities", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .taskpad directory in the current directory
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            let data_dir = init_local_dir()?;
            println!("Initialized taskpad directory: {}", data_dir.display());
            println!();
            println!("Taskpad will now use this local directory for storage.");
            println!("Run 'taskpad' to start managing todos.");
            Ok(())
        }
        None => run_tui(),
    }
}

fn run_tui() -> Result<()> {
    // Show which directory we're using
    let data_dir = ensure_data_dir()?;
    eprintln!("Using taskpad directory: {}", data_dir.display());

    // Load persisted collections, seeding samples where storage is empty
    let mut kv = KvStore::open(store_file()?)?;
    let loaded = load_state(&kv)?;
    let mut app = App::new(Store::new(loaded.projects, loaded.todos, loaded.todo_samples));

    // Install the event handlers once for the whole session
    let bus = EventBus::new();
    app::wire_events(&bus);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app, &bus);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Flush state once at session end, best-effort
    if let Err(e) = save_state(
        &mut kv,
        app.store.projects(),
        app.store.todos(),
        app.store.todo_samples(),
    ) {
        eprintln!("Error saving state: {}", e);
    } else if let Err(e) = kv.flush() {
        eprintln!("Error writing store: {}", e);
    }

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    bus: &EventBus<App>,
) -> Result<()> {
    loop {
        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with a timeout so the overdue markers stay current
        if event::poll(Duration::from_millis(200))? {
            if let TermEvent::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    input::handle_key(app, bus, key)?;
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

//! Terminal entry point: CLI flags, terminal setup and teardown, and
//! the frame loop that feeds input and elapsed time to the scenes.

use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flap::scenes::{Scene, SceneKind, Transition};
use flap::ui;
use flap::utils::persistence::FileStore;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    // Handle CLI arguments before touching the terminal
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "flap {} ({})",
                    flap::build_info::BUILD_DATE,
                    flap::build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Flap - Terminal One-Button Flyer\n");
                println!("Usage: flap [flag]\n");
                println!("Flags:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown flag: {}", other);
                eprintln!("Run 'flap --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let mut store = FileStore::load();
    let mut scene = Scene::build(SceneKind::Menu, &store);

    // Terminal takeover happens after flag handling so --help prints plainly
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut scene, &mut store);

    // Restore the terminal even when the loop errored
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    scene: &mut Scene,
    store: &mut FileStore,
) -> io::Result<()> {
    let mut last_frame = Instant::now();

    loop {
        terminal.draw(|frame| ui::draw(frame, scene))?;

        // Poll for input (50ms non-blocking)
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key_event) = event::read()? {
                let transition = scene.handle_input(key_event.code);
                if apply_transition(scene, store, transition) {
                    return Ok(());
                }
            }
        }

        // Wall-clock elapsed since the last update; the core clamps it
        let dt_ms = last_frame.elapsed().as_millis() as u64;
        last_frame = Instant::now();

        let transition = scene.update(dt_ms, store);
        if apply_transition(scene, store, transition) {
            return Ok(());
        }
    }
}

/// Returns true when the transition quits the program.
fn apply_transition(scene: &mut Scene, store: &FileStore, transition: Transition) -> bool {
    match transition {
        Transition::None => false,
        Transition::To(kind) => {
            scene.exit();
            *scene = Scene::build(kind, store);
            false
        }
        Transition::Quit => {
            scene.exit();
            true
        }
    }
}

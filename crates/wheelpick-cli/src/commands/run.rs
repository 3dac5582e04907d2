use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal, Stderr};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, info, warn};

use wheelpick_core::{
    selection_channel, spawn_selection_handler, AppConfig, InputMode, Item, WheelEngine,
};
use wheelpick_tui::{draw, handle_key_event, App, AppEvent, EventHandler};

type PickerTerminal = Terminal<CrosstermBackend<Stderr>>;

/// Command-line overrides for one picker session
pub struct RunOptions {
    pub initial: Option<usize>,
    pub wheel_only: bool,
    pub print_index: bool,
    pub stream: bool,
    pub title: Option<String>,
}

/// Gather raw entries from arguments, a file, or piped stdin.
///
/// Stdin is read when `file` is `-`, or when no entries were given and stdin
/// is not a terminal.
pub fn collect_entries(mut entries: Vec<String>, file: Option<&Path>) -> Result<Vec<String>> {
    match file {
        Some(path) if path == Path::new("-") => {
            entries.extend(read_entries(io::stdin().lock())?);
        }
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            entries.extend(read_entries(BufReader::new(file))?);
        }
        None if entries.is_empty() && !io::stdin().is_terminal() => {
            entries.extend(read_entries(io::stdin().lock())?);
        }
        None => {}
    }
    Ok(entries)
}

fn read_entries<R: BufRead>(reader: R) -> Result<Vec<String>> {
    reader
        .lines()
        .map(|line| line.context("Failed to read entry"))
        .collect()
}

/// Run the picker. Returns `true` when an entry was confirmed.
///
/// The picker draws on stderr so the chosen value can be piped from stdout.
pub async fn run(config: &AppConfig, items: Vec<Item<String>>, options: RunOptions) -> Result<bool> {
    info!(count = items.len(), "Starting picker");

    let (tx, rx) = selection_channel();
    let mut engine = WheelEngine::from_config(items, config)?.with_event_sender(tx);
    if options.wheel_only {
        engine = engine.with_input_mode(InputMode::WheelOnly);
    }
    if let Some(initial) = options.initial {
        engine = engine.with_initial_index(initial);
    }

    let stream = should_stream(options.stream, io::stdout().is_terminal());
    if options.stream && !stream {
        warn!("--stream ignored: stdout is the terminal the picker draws on");
    }
    let print_index = options.print_index;
    let handler = spawn_selection_handler(rx, move |item, index| {
        debug!(index, label = %item.label, "Selection changed");
        if stream {
            println!("{}", render_choice(index, &item.value, print_index));
        }
    });

    let mut app = App::new(engine, config.presentation.clone());
    if let Some(title) = options.title {
        app = app.with_title(title);
    }

    let event_handler = EventHandler::new(config.general.tick_rate_ms)
        .with_animation_tick(config.scroll.animation_tick_duration());

    // Setup terminal
    enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen, EnableMouseCapture, SetTitle("wheelpick"))?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app, &event_handler);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result?;

    let choice = app
        .selection()
        .map(|(index, item)| render_choice(index, &item.value, print_index));

    // Dropping the engine closes the channel and lets the handler drain
    drop(app);
    handler.await?;

    match choice {
        Some(choice) => {
            info!(%choice, "Picker confirmed");
            println!("{}", choice);
            Ok(true)
        }
        None => {
            info!("Picker cancelled");
            Ok(false)
        }
    }
}

fn event_loop(
    terminal: &mut PickerTerminal,
    app: &mut App<String>,
    event_handler: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| draw(frame, app))?;

        // Poll faster while the wheel is moving
        let event = if app.needs_fast_update() {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };

        let now = Instant::now();
        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, app.pending_key);
                    app.handle_action(action, now);
                }
                AppEvent::Mouse(mouse) => app.handle_mouse(mouse, now),
                AppEvent::Resize(_, _) | AppEvent::Tick => {}
            }
        }

        app.on_tick(Instant::now());

        if app.should_quit() {
            return Ok(());
        }
    }
}

/// Streamed lines would land inside the picker frame when stdout is the terminal
fn should_stream(requested: bool, stdout_is_terminal: bool) -> bool {
    requested && !stdout_is_terminal
}

fn render_choice(index: usize, value: &str, print_index: bool) -> String {
    if print_index {
        index.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    #[test]
    fn test_read_entries() {
        let entries = read_entries(Cursor::new("one\ntwo=2\n\nthree\n")).unwrap();
        assert_eq!(entries, vec!["one", "two=2", "", "three"]);

        let items = wheelpick_core::parse_items(entries).unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[1].value, "2");
    }

    #[test]
    fn test_collect_entries_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "b").unwrap();
        writeln!(file, "c").unwrap();

        let entries = collect_entries(vec!["a".to_string()], Some(file.path())).unwrap();
        assert_eq!(entries, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_collect_entries_missing_file() {
        let path = Path::new("/nonexistent/wheelpick/entries.txt");
        assert!(collect_entries(Vec::new(), Some(path)).is_err());
    }

    #[test]
    fn test_stream_needs_redirected_stdout() {
        assert!(should_stream(true, false));
        assert!(!should_stream(true, true));
        assert!(!should_stream(false, false));
    }

    #[test]
    fn test_render_choice() {
        assert_eq!(render_choice(3, "03", false), "03");
        assert_eq!(render_choice(3, "03", true), "3");
    }
}

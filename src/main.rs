use std::time::Duration;

use suggest_box::app::App;
use suggest_box::catalog::CatalogProvider;
use suggest_box::config::SuggestConfig;
use suggest_box::logging;
use suggest_box::terminal::{Terminal, TerminalEvent};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> suggest_box::Result<()> {
    logging::init_from_env()?;

    let config = match std::env::args().nth(1) {
        Some(path) => SuggestConfig::load(path)?,
        None => SuggestConfig::default(),
    };
    let catalog = config.catalog_provider().load()?;
    let mut app = App::new(catalog, &config);

    let mut terminal = Terminal::new()?;
    // enter() may fail halfway; restore whatever it managed to switch on.
    let result = match terminal.enter() {
        Ok(()) => event_loop(&mut terminal, &mut app),
        Err(err) => Err(err.into()),
    };
    let restored = terminal.exit();
    result?;
    restored?;

    if !app.value().is_empty() {
        println!("{}", app.value());
    }
    Ok(())
}

fn event_loop(terminal: &mut Terminal, app: &mut App) -> suggest_box::Result<()> {
    let mut render_requested = true;

    loop {
        if render_requested {
            terminal.render_frame(&app.frame())?;
            render_requested = false;
        }

        match terminal.poll_event(Duration::from_millis(100))? {
            TerminalEvent::Key(key) => render_requested = app.handle_key(key),
            TerminalEvent::Click(pos) => render_requested = app.handle_click(pos),
            TerminalEvent::Resize => render_requested = true,
            TerminalEvent::Tick => {}
        }

        if app.should_exit() {
            break;
        }
    }

    Ok(())
}

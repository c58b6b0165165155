use std::cell::RefCell;
use std::fs::File;
use std::rc::Rc;

use droplist::{
    Dropdown, DropdownConfig, Event, Key, PointerListeners, Rect, Rgb, SelectOption, Terminal,
    TextStyle, WidthTag,
};
use simplelog::{Config, LevelFilter, WriteLogger};

mod error;
mod options;

use error::DemoError;

const LOG_FILE: &str = "droplist-demo.log";
const LOG_ENV: &str = "DROPLIST_LOG";
const GENERATED_COUNT: usize = 10_000;

fn main() -> Result<(), DemoError> {
    init_logging()?;

    let status = Rc::new(RefCell::new(String::from("Nothing selected yet")));
    let listeners = PointerListeners::new();

    let mut colors = Dropdown::new(
        DropdownConfig::new().width(WidthTag::Lg),
        options::colors(),
        report("colors", Rc::clone(&status)),
    );
    let mut generated = Dropdown::new(
        DropdownConfig::new().multi_select(true),
        options::generated(GENERATED_COUNT),
        report("generated", Rc::clone(&status)),
    );
    colors.mount(&listeners);
    generated.mount(&listeners);

    let mut dropdowns = [colors, generated];
    let mut term = Terminal::new()?;

    draw(&mut term, &mut dropdowns, &status.borrow())?;
    loop {
        // One frame per event, so each press is judged against the layout
        // the previous one produced.
        for event in term.poll(None)? {
            if is_quit(&event, &dropdowns) {
                log::info!("quit requested");
                return Ok(());
            }
            route(&event, &listeners, &mut dropdowns);
            draw(&mut term, &mut dropdowns, &status.borrow())?;
        }
    }
}

fn draw(term: &mut Terminal, dropdowns: &mut [Dropdown], status: &str) -> Result<(), DemoError> {
    term.draw(|buf| {
        let white = Rgb::new(255, 255, 255);
        buf.set_string(1, 0, "droplist demo", buf.width(), white, TextStyle::new().bold());
        buf.set_string(
            1,
            buf.height().saturating_sub(1),
            status,
            buf.width(),
            white,
            TextStyle::new(),
        );

        let mut x = 1;
        for dropdown in dropdowns.iter_mut() {
            let width = dropdown.config().width.cells();
            let area = Rect::new(x, 2, width, buf.height().saturating_sub(3));
            dropdown.render(buf, area);
            x += width + 2;
        }
    })?;
    Ok(())
}

fn init_logging() -> Result<(), DemoError> {
    let level = std::env::var(LOG_ENV)
        .ok()
        .and_then(|value| value.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info);
    let log_file = File::create(LOG_FILE)?;
    WriteLogger::init(level, Config::default(), log_file)?;
    log::info!("logging at {level} to {LOG_FILE}");
    Ok(())
}

/// Build a change callback that logs the new selection and updates the
/// status line.
fn report(name: &'static str, status: Rc<RefCell<String>>) -> impl FnMut(&[SelectOption]) {
    move |selected| {
        let preview: Vec<&str> = selected.iter().take(5).map(SelectOption::value).collect();
        log::info!(
            "{name}: {} selected, first {:?}",
            selected.len(),
            preview
        );
        *status.borrow_mut() = format!("{name}: {} selected", selected.len());
    }
}

fn is_quit(event: &Event, dropdowns: &[Dropdown]) -> bool {
    match event {
        Event::Key {
            key: Key::Char('c'),
            modifiers,
        } if modifiers.ctrl => true,
        Event::Key {
            key: Key::Char('q') | Key::Escape,
            ..
        } => dropdowns.iter().all(|d| !d.is_open()),
        _ => false,
    }
}

fn route(event: &Event, listeners: &PointerListeners, dropdowns: &mut [Dropdown]) {
    match event {
        Event::Click { .. } => {
            // Capture phase first, so other dropdowns can close.
            if let Some(pointer) = event.pointer() {
                listeners.dispatch(&pointer);
            }
            // Later dropdowns are painted on top.
            for dropdown in dropdowns.iter_mut().rev() {
                if dropdown.handle_event(event).is_consumed() {
                    break;
                }
            }
        }
        Event::Scroll { .. } => {
            for dropdown in dropdowns.iter_mut().rev() {
                if dropdown.handle_event(event).is_consumed() {
                    break;
                }
            }
        }
        Event::MouseMove { .. } | Event::Key { .. } => {
            for dropdown in dropdowns.iter_mut() {
                dropdown.handle_event(event);
            }
        }
        Event::Resize { width, height } => {
            log::debug!("resize to {width}x{height}");
        }
    }
}

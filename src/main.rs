use std::{cell::RefCell, io, rc::Rc};

use ratzilla::{
    event::{KeyCode, KeyEvent},
    utils::set_document_title,
    DomBackend, WebRenderer,
};
use tui_textarea::{Input, Key};

use codelearn::{
    backend::{mount_background, BrowserHost},
    logging, ui, App, Config,
};

fn main() -> io::Result<()> {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));

    let (config, errors) = Config::from_location();
    logging::init(config.log_level);
    for error in errors {
        tracing::warn!("{error}, using the default");
    }
    tracing::debug!(?config, "starting");

    set_document_title("CodeLearn - Interactive Programming Education")?;

    // Lives as long as the render loop below.
    let background = match mount_background(&config.matrix) {
        Ok(background) => Some(background),
        Err(e) => {
            tracing::warn!("unable to mount the background: {e}");
            None
        }
    };

    let backend = DomBackend::new()?;
    let terminal = ratatui::Terminal::new(backend)?;

    let app = Rc::new(RefCell::new(App::new(BrowserHost::new()?, config)));

    terminal.on_key_event({
        let event_state = app.clone();
        move |key_event| {
            if let Some(input) = to_input(key_event) {
                event_state.borrow_mut().handle_input(input);
            }
        }
    });

    terminal.draw_web({
        let render_state = app.clone();
        move |frame| {
            let _background = &background;
            ui::draw(frame, &render_state.borrow());
        }
    });

    Ok(())
}

fn to_input(key_event: KeyEvent) -> Option<Input> {
    let key = match key_event.code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::F(n) => Key::F(n),
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Enter => Key::Enter,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Tab => Key::Tab,
        KeyCode::Delete => Key::Delete,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::Esc => Key::Esc,
        _ => return None,
    };
    Some(Input {
        key,
        ctrl: key_event.ctrl,
        alt: key_event.alt,
        shift: key_event.shift,
    })
}

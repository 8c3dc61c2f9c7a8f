use crate::application::{App, Control};
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) {
            match key {
                KeyCode::Char('c') | KeyCode::Char('q') => {
                    app.should_quit = true;
                    return;
                }
                KeyCode::Char('l') => {
                    app.cycle_language();
                    return;
                }
                _ => {}
            }
        }

        match key {
            KeyCode::Tab | KeyCode::Down => app.focus_next(),
            KeyCode::BackTab | KeyCode::Up => app.focus_prev(),
            KeyCode::PageUp => app.scroll_up(5),
            KeyCode::PageDown => app.scroll_down(5),
            KeyCode::Esc => app.go_back(),
            KeyCode::Enter => app.activate_focused(),
            KeyCode::Backspace => app.backspace(),
            KeyCode::Char(c) => Self::handle_char(app, c),
            _ => {}
        }
    }

    /// Characters go to the focused field. With a button focused, `q`
    /// quits and digits pick the n-th option.
    fn handle_char(app: &mut App, c: char) {
        if let Some(Control::Field(_)) = app.focused() {
            app.type_char(c);
            return;
        }

        match c {
            'q' => app.should_quit = true,
            '1'..='9' => {
                let index = c as usize - '1' as usize;
                if index < app.controls().len() {
                    app.focus = index;
                    app.activate_focused();
                }
            }
            _ => {}
        }
    }
}

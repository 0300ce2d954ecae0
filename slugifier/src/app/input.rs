/// Key event handling and field-specific editing.
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

use super::{App, Field};

impl App {
    /// Dispatch a key event. Returns `true` if the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => return true,
            KeyCode::Esc => return true,
            KeyCode::Char('y') if ctrl => self.copy(now),
            KeyCode::Enter => self.copy(now),
            KeyCode::Tab | KeyCode::Down => self.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.focus_prev(),
            _ if ctrl || key.modifiers.contains(KeyModifiers::ALT) => {
                if key.code == KeyCode::Char('u') && self.focus == Field::Text {
                    self.clear_text();
                }
            }
            _ => match self.focus {
                Field::Text => self.handle_text_key(key.code),
                Field::Limit => self.handle_limit_key(key.code),
                Field::Separator => self.handle_separator_key(key.code),
            },
        }
        false
    }

    fn handle_text_key(&mut self, code: KeyCode) {
        let len = self.form.text().chars().count();
        match code {
            KeyCode::Char(c) => {
                let mut text = self.form.text().to_string();
                text.insert(byte_index(&text, self.cursor), c);
                self.cursor += 1;
                self.form.set_text(text);
            }
            KeyCode::Backspace if self.cursor > 0 => {
                let mut text = self.form.text().to_string();
                self.cursor -= 1;
                text.remove(byte_index(&text, self.cursor));
                self.form.set_text(text);
            }
            KeyCode::Delete if self.cursor < len => {
                let mut text = self.form.text().to_string();
                text.remove(byte_index(&text, self.cursor));
                self.form.set_text(text);
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(len),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = len,
            _ => {}
        }
    }

    fn clear_text(&mut self) {
        self.cursor = 0;
        self.form.set_text(String::new());
    }

    fn handle_limit_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => {
                self.limit_buffer.push(c);
            }
            KeyCode::Backspace => {
                self.limit_buffer.pop();
            }
            _ => return,
        }
        self.form.set_limit_input(&self.limit_buffer);
    }

    fn handle_separator_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left => self.form.set_separator(self.form.separator().prev()),
            KeyCode::Right | KeyCode::Char(' ') => {
                self.form.set_separator(self.form.separator().next())
            }
            KeyCode::Char(c @ ('-' | '_')) => self.form.set_separator_input(&c.to_string()),
            _ => {}
        }
    }
}

/// Byte offset of the `char_idx`-th character, or the end of the string.
fn byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::make_app;
    use slugifier_core::params::LIMIT_MIN;
    use slugifier_core::Separator;

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE), Instant::now())
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn typing_updates_result_live() {
        let (mut app, _) = make_app();
        type_str(&mut app, "Hello");
        assert_eq!(app.form.result(), "hello");
        type_str(&mut app, " Wörld");
        assert_eq!(app.form.result(), "hello-world");
    }

    #[test]
    fn cursor_editing() {
        let (mut app, _) = make_app();
        type_str(&mut app, "helo");
        press(&mut app, KeyCode::Left);
        type_str(&mut app, "l");
        assert_eq!(app.form.text(), "hello");
        press(&mut app, KeyCode::Home);
        press(&mut app, KeyCode::Delete);
        assert_eq!(app.form.text(), "ello");
        press(&mut app, KeyCode::End);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.form.text(), "ell");
        assert_eq!(app.cursor, 3);
    }

    #[test]
    fn multibyte_cursor_editing() {
        let (mut app, _) = make_app();
        type_str(&mut app, "déjà");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.form.text(), "déj");
        assert_eq!(app.form.result(), "dej");
    }

    #[test]
    fn ctrl_u_clears_text() {
        let (mut app, _) = make_app();
        type_str(&mut app, "abc");
        app.handle_key(
            KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
            Instant::now(),
        );
        assert_eq!(app.form.text(), "");
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn limit_edit_then_blur() {
        let (mut app, _) = make_app();
        type_str(&mut app, "abcdefghijklmnopqrstuvwxyz");
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Field::Limit);

        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.limit_display(), "");
        type_str(&mut app, "5");
        assert_eq!(app.form.limit(), 5);
        assert_eq!(app.form.result(), "abcde");

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.form.limit(), LIMIT_MIN);
        assert_eq!(app.form.result(), "abcdefghij");
    }

    #[test]
    fn limit_ignores_letters() {
        let (mut app, _) = make_app();
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "x");
        assert_eq!(app.limit_display(), "60");
    }

    #[test]
    fn separator_selection() {
        let (mut app, _) = make_app();
        type_str(&mut app, "a b");
        app.set_focus(Field::Separator);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.form.separator(), Separator::Underscore);
        assert_eq!(app.form.result(), "a_b");
        press(&mut app, KeyCode::Char('-'));
        assert_eq!(app.form.separator(), Separator::Dash);
        assert_eq!(app.form.result(), "a-b");
    }

    #[test]
    fn enter_copies() {
        let (mut app, clip) = make_app();
        type_str(&mut app, "Copy Me");
        press(&mut app, KeyCode::Enter);
        assert_eq!(*clip.copied.borrow(), vec!["copy-me".to_string()]);
    }

    #[test]
    fn esc_and_ctrl_c_quit() {
        let (mut app, _) = make_app();
        assert!(press(&mut app, KeyCode::Esc));
        assert!(app.handle_key(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Instant::now()
        ));
        assert!(!press(&mut app, KeyCode::Char('q')));
    }
}

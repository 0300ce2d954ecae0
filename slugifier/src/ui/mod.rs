mod form;

use crate::app::App;
use ratatui::Frame;

/// Top-level render entry point.
pub fn render(f: &mut Frame, app: &App) {
    form::render_form(f, app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::make_app;
    use crate::app::Field;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::time::Instant;

    fn draw(app: &App) -> String {
        let backend = TestBackend::new(80, 16);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn renders_labels_and_defaults() {
        let (app, _) = make_app();
        let screen = draw(&app);
        assert!(screen.contains("Slugifier"));
        assert!(screen.contains("Text"));
        assert!(screen.contains("Limit"));
        assert!(screen.contains("Separator"));
        assert!(screen.contains("Dash"));
        assert!(screen.contains("Result"));
        assert!(screen.contains("60"));
        assert!(screen.contains("Enter text to slugify"));
    }

    #[test]
    fn renders_result() {
        let (mut app, _) = make_app();
        app.form.set_text("Hello World From The Terminal");
        let screen = draw(&app);
        assert!(screen.contains("hello-world-from-the-terminal"));
    }

    #[test]
    fn copy_button_follows_feedback() {
        let (mut app, _) = make_app();
        app.form.set_text("abc");
        assert!(draw(&app).contains("Copy"));
        app.copy(Instant::now());
        assert!(draw(&app).contains("…"));
    }

    #[test]
    fn renders_status_message() {
        let (mut app, _) = make_app();
        app.status = Some("Copy failed: nope".to_string());
        assert!(draw(&app).contains("Copy failed: nope"));
    }

    #[test]
    fn limit_field_shows_edit_buffer_when_focused() {
        let (mut app, _) = make_app();
        app.set_focus(Field::Limit);
        app.limit_buffer = "7".to_string();
        app.form.set_limit_input("7");
        let screen = draw(&app);
        assert!(!screen.contains("60"));
    }
}

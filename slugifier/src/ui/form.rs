use crate::app::{App, Field};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use slugifier_core::feedback::CopyState;

const PLACEHOLDER: &str = "Enter text to slugify";

pub fn render_form(f: &mut Frame, app: &App) {
    let area = f.area();

    let chunks = Layout::vertical([
        Constraint::Length(1), // header bar
        Constraint::Length(3), // text | limit | separator
        Constraint::Length(3), // result | copy
        Constraint::Length(1), // status line
        Constraint::Min(0),
        Constraint::Length(1), // footer bar
    ])
    .split(area);

    // ── Header bar ────────────────────────────────────────────────────────────
    let header_style = Style::default()
        .fg(Color::White)
        .bg(Color::DarkGray)
        .add_modifier(Modifier::BOLD);
    let header = Paragraph::new(Line::from(Span::styled(" Slugifier", header_style)))
        .style(Style::default().bg(Color::DarkGray));
    f.render_widget(header, chunks[0]);

    // ── Inputs ────────────────────────────────────────────────────────────────
    let inputs = Layout::horizontal([
        Constraint::Min(20),    // text (flexible)
        Constraint::Length(10), // limit
        Constraint::Length(18), // separator
    ])
    .split(chunks[1]);

    render_text(f, app, inputs[0]);
    render_limit(f, app, inputs[1]);
    render_separator(f, app, inputs[2]);

    // ── Result + copy button ──────────────────────────────────────────────────
    let output = Layout::horizontal([Constraint::Min(10), Constraint::Length(10)]).split(chunks[2]);

    let result = Paragraph::new(app.form.result().to_string()).block(field_block(" Result ", false));
    f.render_widget(result, output[0]);

    let button_style = match app.feedback.state() {
        CopyState::Copying => Style::default().fg(Color::Yellow),
        CopyState::Copied => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        CopyState::Idle if app.can_copy() => {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        }
        CopyState::Idle => Style::default().fg(Color::DarkGray),
    };
    let button = Paragraph::new(app.feedback.label())
        .alignment(Alignment::Center)
        .style(button_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(button_style),
        );
    f.render_widget(button, output[1]);

    // ── Status line ───────────────────────────────────────────────────────────
    if let Some(ref msg) = app.status {
        let status = Paragraph::new(Line::from(Span::styled(
            format!(" {msg}"),
            Style::default().fg(Color::Red),
        )));
        f.render_widget(status, chunks[3]);
    }

    // ── Footer bar ────────────────────────────────────────────────────────────
    let footer_text = match app.focus {
        Field::Text => " [Tab] next field  [Enter/^Y] copy  [^U] clear  [Esc] quit",
        Field::Limit => " [Tab] next field  [0-9] edit limit  [Enter/^Y] copy  [Esc] quit",
        Field::Separator => " [Tab] next field  [←→] change separator  [Enter/^Y] copy  [Esc] quit",
    };
    let footer = Paragraph::new(Line::from(footer_text))
        .style(Style::default().fg(Color::White).bg(Color::DarkGray));
    f.render_widget(footer, chunks[5]);
}

fn field_block(title: &str, focused: bool) -> Block<'_> {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
}

fn render_text(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Field::Text;
    let block = field_block(" Text ", focused);
    let inner = block.inner(area);

    let text = app.form.text();
    let para = if text.is_empty() {
        Paragraph::new(Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray)))
    } else {
        // Scroll horizontally so the cursor stays visible.
        let width = inner.width as usize;
        let start = app.cursor.saturating_sub(width.saturating_sub(1));
        let visible: String = text.chars().skip(start).take(width).collect();
        Paragraph::new(visible)
    };
    f.render_widget(para.block(block), area);

    if focused && inner.width > 0 {
        let width = inner.width as usize;
        let offset = app.cursor.min(width.saturating_sub(1)) as u16;
        f.set_cursor_position((inner.x + offset, inner.y));
    }
}

fn render_limit(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Field::Limit;
    let block = field_block(" Limit ", focused);
    let inner = block.inner(area);
    let value = app.limit_display();
    let len = value.chars().count() as u16;
    f.render_widget(Paragraph::new(value).block(block), area);

    if focused && inner.width > 0 {
        f.set_cursor_position((inner.x + len.min(inner.width - 1), inner.y));
    }
}

fn render_separator(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Field::Separator;
    let label = app.form.separator().label();
    let line = if focused {
        Line::from(vec![
            Span::styled("◂ ", Style::default().fg(Color::Cyan)),
            Span::raw(label),
            Span::styled(" ▸", Style::default().fg(Color::Cyan)),
        ])
    } else {
        Line::from(label)
    };
    f.render_widget(
        Paragraph::new(line).block(field_block(" Separator ", focused)),
        area,
    );
}

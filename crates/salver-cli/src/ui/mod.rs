//! TUI rendering — orchestrates the form and the chrome around it.

pub mod form;

use chrono::Local;
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Paragraph},
};

use crate::app::{App, Status};

// ─── Root draw ────────────────────────────────────────────────────────────────

/// Draws the whole screen, once per frame.
pub fn draw(f: &mut Frame, app: &App) {
  // One-row header and status bar, form in between.
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1),
      Constraint::Min(0),
      Constraint::Length(1),
    ])
    .split(f.area());

  draw_header(f, rows[0]);
  form::draw(f, rows[1], app);
  draw_status(f, rows[2], app);
}

// ─── Header ───────────────────────────────────────────────────────────────────

fn draw_header(f: &mut Frame, area: Rect) {
  let bar = Block::default().style(Style::default().bg(Color::DarkGray));
  let inner = bar.inner(area);
  f.render_widget(bar, area);

  let hints = Span::styled(
    " salver  [Tab] next  [Esc] quit",
    Style::default()
      .fg(Color::White)
      .add_modifier(Modifier::BOLD),
  );
  let clock = Span::styled(
    format!("{} ", Local::now().format("%Y-%m-%d")),
    Style::default().fg(Color::DarkGray),
  );

  // The date overwrites only the cells it occupies, so both fit one row.
  f.render_widget(Paragraph::new(Line::from(hints)), inner);
  f.render_widget(Paragraph::new(Line::from(clock).right_aligned()), inner);
}

// ─── Status bar ───────────────────────────────────────────────────────────────

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
  let mode_label = if app.sending { "SENDING" } else { "FORM" };

  let (text, style) = match &app.status {
    Status::Idle => (
      "Tab/↓ next  Shift-Tab/↑ prev  Enter submit  Esc quit".to_string(),
      Style::default().fg(Color::DarkGray),
    ),
    Status::Error(message) => (message.clone(), Style::default().fg(Color::Red)),
    Status::Success(message) => (message.clone(), Style::default().fg(Color::Green)),
  };

  let mode_span = Span::styled(
    format!(" {mode_label} "),
    Style::default()
      .fg(Color::Black)
      .bg(Color::Cyan)
      .add_modifier(Modifier::BOLD),
  );
  let text_span = Span::styled(format!("  {text}"), style);

  let line = Line::from(vec![mode_span, text_span]);
  f.render_widget(
    Paragraph::new(line).style(Style::default().bg(Color::Black)),
    area,
  );
}

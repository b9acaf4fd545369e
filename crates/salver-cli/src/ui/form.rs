//! Contact form pane — five inputs and the submit control.

use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, FIELD_COUNT, FIELD_LABELS, Focus, REQUIRED};

/// Render the form into `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let mut constraints = vec![Constraint::Length(3); FIELD_COUNT];
  constraints.push(Constraint::Length(3)); // submit control
  constraints.push(Constraint::Min(0));

  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints(constraints)
    .split(area);

  for index in 0..FIELD_COUNT {
    draw_input(f, rows[index], app, index);
  }
  draw_submit(f, rows[FIELD_COUNT], app);
}

fn draw_input(f: &mut Frame, area: Rect, app: &App, index: usize) {
  let focused = app.focus.field_index() == Some(index);

  let marker = if REQUIRED[index] { " *" } else { "" };
  let title = format!(" {}{marker} ", FIELD_LABELS[index]);

  let border_style = if focused {
    Style::default().fg(Color::Cyan)
  } else {
    Style::default().fg(Color::DarkGray)
  };
  let block = Block::default()
    .title(title)
    .borders(Borders::ALL)
    .border_style(border_style);

  let value = &app.values[index];
  let text = if focused && !app.sending {
    format!("{value}_")
  } else {
    value.clone()
  };

  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(Paragraph::new(text), inner);
}

fn draw_submit(f: &mut Frame, area: Rect, app: &App) {
  let focused = app.focus == Focus::Submit;
  let label = if app.sending { "Sending…" } else { "Send Message" };

  let label_style = if app.sending {
    Style::default().fg(Color::DarkGray)
  } else if focused {
    Style::default()
      .fg(Color::Black)
      .bg(Color::Cyan)
      .add_modifier(Modifier::BOLD)
  } else {
    Style::default().fg(Color::Cyan)
  };
  let border_style = if focused && !app.sending {
    Style::default().fg(Color::Cyan)
  } else {
    Style::default().fg(Color::DarkGray)
  };

  let block = Block::default()
    .borders(Borders::ALL)
    .border_style(border_style);
  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(
    Paragraph::new(Line::from(Span::styled(format!(" {label} "), label_style)).centered()),
    inner,
  );
}

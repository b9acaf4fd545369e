//! Application state machine and key dispatcher.
//!
//! All form behaviour lives here as synchronous state transitions; the
//! event loop in `main` owns the terminal and the network call, so every
//! transition is unit-testable without either.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use salver_core::ContactSubmission;

use crate::client::{ApiClient, SubmitOutcome};

// ─── Form layout ──────────────────────────────────────────────────────────────

pub const FIELD_COUNT: usize = 5;

/// Display labels for the inputs, in focus order.
pub const FIELD_LABELS: [&str; FIELD_COUNT] =
  ["Name", "Email", "Phone", "Subject", "Message"];

/// Which inputs must be filled before a submission goes out.
pub const REQUIRED: [bool; FIELD_COUNT] = [true, true, false, true, true];

// ─── User-facing copy ─────────────────────────────────────────────────────────

pub const MISSING_FIELDS_MSG: &str =
  "Please fill in all required fields (Name, Email, Subject, Message)";
pub const SENT_MSG: &str =
  "Thank you! Your message has been sent successfully. I'll get back to you soon.";
pub const FAILED_MSG: &str = "Something went wrong. Please try again.";
pub const UNREACHABLE_MSG: &str =
  "Unable to send message. Please check your connection or try again later.";

// ─── Focus ────────────────────────────────────────────────────────────────────

/// Which control has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
  Name,
  Email,
  Phone,
  Subject,
  Message,
  Submit,
}

impl Focus {
  pub fn next(self) -> Self {
    match self {
      Focus::Name => Focus::Email,
      Focus::Email => Focus::Phone,
      Focus::Phone => Focus::Subject,
      Focus::Subject => Focus::Message,
      Focus::Message => Focus::Submit,
      Focus::Submit => Focus::Name,
    }
  }

  pub fn previous(self) -> Self {
    match self {
      Focus::Name => Focus::Submit,
      Focus::Email => Focus::Name,
      Focus::Phone => Focus::Email,
      Focus::Subject => Focus::Phone,
      Focus::Message => Focus::Subject,
      Focus::Submit => Focus::Message,
    }
  }

  /// Index into [`App::values`]; `None` for the submit control.
  pub fn field_index(self) -> Option<usize> {
    match self {
      Focus::Name => Some(0),
      Focus::Email => Some(1),
      Focus::Phone => Some(2),
      Focus::Subject => Some(3),
      Focus::Message => Some(4),
      Focus::Submit => None,
    }
  }
}

// ─── Status ───────────────────────────────────────────────────────────────────

/// One-line message under the form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Status {
  #[default]
  Idle,
  Error(String),
  Success(String),
}

// ─── Key and submit outcomes ──────────────────────────────────────────────────

/// What the event loop should do after a key.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyOutcome {
  Continue,
  Quit,
  /// Enter was pressed on the submit control; run [`App::begin_submit`].
  Submit,
}

/// What [`App::begin_submit`] decided.
#[derive(Debug, PartialEq, Eq)]
pub enum SubmitAction {
  /// Client-side validation failed; no request goes out.
  Rejected,
  /// The trimmed values to POST.
  Send(ContactSubmission),
}

// ─── App ──────────────────────────────────────────────────────────────────────

/// Top-level application state.
pub struct App {
  /// Control with keyboard focus.
  pub focus: Focus,

  /// Values of the five inputs, indexed by [`Focus::field_index`].
  pub values: [String; FIELD_COUNT],

  /// Whether a submission is in flight. While set, the submit control
  /// renders as busy and the event loop reads no keys.
  pub sending: bool,

  /// Message shown in the status bar.
  pub status: Status,

  /// Shared HTTP client.
  pub client: ApiClient,
}

impl App {
  /// Create an [`App`] with an empty form.
  pub fn new(client: ApiClient) -> Self {
    Self {
      focus: Focus::Name,
      values: Default::default(),
      sending: false,
      status: Status::Idle,
      client,
    }
  }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Process a key event.
  pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
    // Ctrl-C quits no matter what has focus.
    if key.modifiers.contains(KeyModifiers::CONTROL)
      && key.code == KeyCode::Char('c')
    {
      return KeyOutcome::Quit;
    }

    match key.code {
      KeyCode::Esc => return KeyOutcome::Quit,

      // Navigation
      KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
      KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.previous(),

      // Enter submits on the submit control, advances focus elsewhere.
      KeyCode::Enter => {
        if self.focus == Focus::Submit {
          return KeyOutcome::Submit;
        }
        self.focus = self.focus.next();
      }

      // Editing
      KeyCode::Backspace => {
        if let Some(index) = self.focus.field_index() {
          self.values[index].pop();
        }
      }
      KeyCode::Char(c) => {
        if let Some(index) = self.focus.field_index() {
          self.values[index].push(c);
        }
      }

      _ => {}
    }
    KeyOutcome::Continue
  }

  // ── Submission ────────────────────────────────────────────────────────────

  /// Validate the form and, if it passes, mark the submission in flight.
  ///
  /// Field values are kept either way; only a successful round trip clears
  /// them.
  pub fn begin_submit(&mut self) -> SubmitAction {
    let trimmed = self.values.clone().map(|value| value.trim().to_string());

    let missing = REQUIRED
      .iter()
      .zip(trimmed.iter())
      .any(|(required, value)| *required && value.is_empty());
    if missing {
      self.status = Status::Error(MISSING_FIELDS_MSG.to_string());
      return SubmitAction::Rejected;
    }

    self.sending = true;
    self.status = Status::Idle;

    let [name, email, phone, subject, message] = trimmed;
    SubmitAction::Send(ContactSubmission {
      name:    Some(name),
      email:   Some(email),
      phone:   Some(phone),
      subject: Some(subject),
      message: Some(message),
    })
  }

  /// Fold the outcome of the POST back into the form.
  pub fn finish_submit(&mut self, outcome: SubmitOutcome) {
    self.sending = false;
    match outcome {
      SubmitOutcome::Accepted => {
        self.values = Default::default();
        self.focus = Focus::Name;
        self.status = Status::Success(SENT_MSG.to_string());
      }
      SubmitOutcome::Rejected { message } => {
        self.status =
          Status::Error(message.unwrap_or_else(|| FAILED_MSG.to_string()));
      }
      SubmitOutcome::Unreachable => {
        self.status = Status::Error(UNREACHABLE_MSG.to_string());
      }
    }
  }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

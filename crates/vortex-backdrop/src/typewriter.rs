//! Line-by-line typewriter reveal
//!
//! The host owns a single timer: it calls [`Typewriter::step`], renders the
//! returned line, and schedules the next step after `delay_ms`. Cancelling
//! or restarting only touches this state, so a stale timer firing late
//! finds nothing to emit.

/// Delay after a blank (paragraph break) line
pub const PARAGRAPH_DELAY_MS: u32 = 150;
/// Base delay after a text line
pub const LINE_BASE_DELAY_MS: u32 = 30;
/// Line length beyond which the delay stops growing
pub const LINE_LENGTH_CAP: u32 = 60;

/// Typewriter state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TypewriterState {
    #[default]
    Idle,
    Running,
    Done,
    Cancelled,
}

/// A revealed line
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypedLine {
    Text(String),
    ParagraphBreak,
}

/// One reveal step: the line to show and the wait before the next step
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeStep {
    pub line: TypedLine,
    pub delay_ms: u32,
}

/// Typewriter state machine (idle → running → done)
#[derive(Clone, Debug, Default)]
pub struct Typewriter {
    lines: Vec<String>,
    next_line: usize,
    state: TypewriterState,
}

impl Typewriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin revealing `lines`.
    ///
    /// Refused (returns false) while a reveal is already running.
    pub fn start<I, S>(&mut self, lines: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if self.state == TypewriterState::Running {
            return false;
        }
        self.lines = lines.into_iter().map(Into::into).collect();
        self.next_line = 0;
        self.state = TypewriterState::Running;
        true
    }

    /// Emit the next line, or finish.
    ///
    /// Returns `None` when not running; the final call of a reveal moves
    /// the state to [`TypewriterState::Done`].
    pub fn step(&mut self) -> Option<TypeStep> {
        if self.state != TypewriterState::Running {
            return None;
        }
        let Some(line) = self.lines.get(self.next_line) else {
            self.state = TypewriterState::Done;
            return None;
        };
        self.next_line += 1;

        if line.trim().is_empty() {
            return Some(TypeStep {
                line: TypedLine::ParagraphBreak,
                delay_ms: PARAGRAPH_DELAY_MS,
            });
        }

        let length = u32::try_from(line.chars().count()).unwrap_or(u32::MAX);
        Some(TypeStep {
            line: TypedLine::Text(line.clone()),
            delay_ms: LINE_BASE_DELAY_MS + length.min(LINE_LENGTH_CAP),
        })
    }

    /// Stop a running reveal
    pub fn cancel(&mut self) -> bool {
        if self.state == TypewriterState::Running {
            self.state = TypewriterState::Cancelled;
            true
        } else {
            false
        }
    }

    pub fn state(&self) -> TypewriterState {
        self.state
    }

    /// Lines emitted so far in the current reveal
    pub fn revealed(&self) -> usize {
        self.next_line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(typewriter: &mut Typewriter) -> Vec<TypeStep> {
        std::iter::from_fn(|| typewriter.step()).collect()
    }

    #[test]
    fn test_reveal_sequence() {
        let mut typewriter = Typewriter::new();
        assert!(typewriter.start(["Hello", "", "A much longer line of dossier text"]));

        let steps = drain(&mut typewriter);
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0].line, TypedLine::Text("Hello".into()));
        assert_eq!(steps[0].delay_ms, 35);
        assert_eq!(steps[1].line, TypedLine::ParagraphBreak);
        assert_eq!(steps[1].delay_ms, PARAGRAPH_DELAY_MS);
        assert_eq!(steps[2].delay_ms, 30 + 34);
        assert_eq!(typewriter.state(), TypewriterState::Done);
    }

    #[test]
    fn test_delay_capped() {
        let mut typewriter = Typewriter::new();
        typewriter.start(["x".repeat(200)]);
        let step = typewriter.step().unwrap();
        assert_eq!(step.delay_ms, LINE_BASE_DELAY_MS + LINE_LENGTH_CAP);
    }

    #[test]
    fn test_whitespace_line_is_break() {
        let mut typewriter = Typewriter::new();
        typewriter.start(["   "]);
        assert_eq!(typewriter.step().unwrap().line, TypedLine::ParagraphBreak);
    }

    #[test]
    fn test_start_refused_while_running() {
        let mut typewriter = Typewriter::new();
        assert!(typewriter.start(["one", "two"]));
        typewriter.step();
        assert!(!typewriter.start(["other"]));
        assert_eq!(typewriter.revealed(), 1);
    }

    #[test]
    fn test_cancel_then_restart() {
        let mut typewriter = Typewriter::new();
        typewriter.start(["one", "two"]);
        typewriter.step();
        assert!(typewriter.cancel());
        assert!(!typewriter.cancel());
        assert_eq!(typewriter.state(), TypewriterState::Cancelled);
        assert!(typewriter.step().is_none());

        assert!(typewriter.start(["fresh"]));
        assert_eq!(typewriter.revealed(), 0);
        assert_eq!(drain(&mut typewriter).len(), 1);
        assert_eq!(typewriter.state(), TypewriterState::Done);
    }

    #[test]
    fn test_empty_reveal_finishes_immediately() {
        let mut typewriter = Typewriter::new();
        typewriter.start(Vec::<String>::new());
        assert!(typewriter.step().is_none());
        assert_eq!(typewriter.state(), TypewriterState::Done);
    }
}

//! Terminal message scheduler.
//!
//! Status lines are queued FIFO and revealed one at a time with a typewriter
//! effect: the host calls [`Console::tick`] at a fixed cadence and each tick
//! uncovers one more character behind a block caret. A finished line is
//! committed to an append-only visible log, then the console idles for a
//! short cooldown before draining the next queued message. At most one line
//! is ever mid-reveal.

use std::collections::VecDeque;

use crate::utils::time::clock_stamp;

/// The caret glyph appended to the revealed prefix while typing.
pub const CARET: char = '█';

/// Severity of a console line; the UI maps it to a palette color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warn,
    Error,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }
}

/// A message waiting in the display queue.
#[derive(Debug, Clone)]
pub struct QueuedMessage {
    pub text: String,
    pub severity: Severity,
}

/// A fully revealed line in the visible log.
#[derive(Debug, Clone)]
pub struct LogLine {
    /// Wall-clock stamp captured when the reveal started.
    pub timestamp: String,
    pub severity: Severity,
    pub text: String,
}

/// A line mid-reveal.
#[derive(Debug, Clone)]
struct Reveal {
    message: QueuedMessage,
    timestamp: String,
    /// Characters currently visible, `0..=char_len`.
    cursor: usize,
    /// Cached so multi-byte text ticks per character, not per byte.
    char_len: usize,
}

/// Owned display queue driving the terminal panel.
#[derive(Debug)]
pub struct Console {
    queue: VecDeque<QueuedMessage>,
    revealing: Option<Reveal>,
    lines: Vec<LogLine>,
    /// Ticks left to idle before draining the next message.
    cooldown: u32,
    /// Cooldown armed after each committed line, in type ticks.
    cooldown_ticks: u32,
}

impl Console {
    /// Creates a console that idles `cooldown_ticks` ticks between lines.
    pub fn new(cooldown_ticks: u32) -> Self {
        Self {
            queue: VecDeque::new(),
            revealing: None,
            lines: Vec::new(),
            cooldown: 0,
            cooldown_ticks,
        }
    }

    /// Queues a message. When nothing is mid-reveal it starts typing at the
    /// next tick, cutting any pending inter-line cooldown short.
    pub fn enqueue(&mut self, text: impl Into<String>, severity: Severity) {
        self.queue.push_back(QueuedMessage {
            text: text.into(),
            severity,
        });
        self.drain_next();
    }

    /// Begins revealing the head of the queue unless a reveal is in progress.
    pub fn drain_next(&mut self) {
        if self.revealing.is_some() {
            return;
        }
        self.cooldown = 0;
        if let Some(message) = self.queue.pop_front() {
            let char_len = message.text.chars().count();
            self.revealing = Some(Reveal {
                message,
                timestamp: clock_stamp(),
                cursor: 0,
                char_len,
            });
        }
    }

    /// Advances the reveal by one character, or counts the cooldown down.
    ///
    /// A text of L characters occupies exactly L + 1 ticks: the first L grow
    /// the visible prefix and the last one commits the full line.
    pub fn tick(&mut self) {
        match &mut self.revealing {
            Some(reveal) if reveal.cursor < reveal.char_len => {
                reveal.cursor += 1;
            }
            Some(_) => {
                if let Some(reveal) = self.revealing.take() {
                    self.lines.push(LogLine {
                        timestamp: reveal.timestamp,
                        severity: reveal.message.severity,
                        text: reveal.message.text,
                    });
                }
                self.cooldown = self.cooldown_ticks;
                if self.cooldown == 0 {
                    self.drain_next();
                }
            }
            None => {
                if self.cooldown > 0 {
                    self.cooldown -= 1;
                    if self.cooldown == 0 {
                        self.drain_next();
                    }
                } else if !self.queue.is_empty() {
                    self.drain_next();
                }
            }
        }
    }

    /// Wipes the committed log. The queue and any line mid-reveal are
    /// untouched; an in-flight line keeps typing and commits into the now
    /// empty log.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Committed lines, oldest first.
    pub fn lines(&self) -> &[LogLine] {
        &self.lines
    }

    /// The line currently being typed: timestamp, severity, and the visible
    /// prefix with the caret appended.
    pub fn revealing_line(&self) -> Option<(&str, Severity, String)> {
        self.revealing.as_ref().map(|reveal| {
            let mut visible: String = reveal.message.text.chars().take(reveal.cursor).collect();
            visible.push(CARET);
            (
                reveal.timestamp.as_str(),
                reveal.message.severity,
                visible,
            )
        })
    }

    /// True while a reveal is in progress.
    pub fn is_revealing(&self) -> bool {
        self.revealing.is_some()
    }

    /// Messages still waiting in the queue.
    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    /// True when nothing is queued, revealing, or cooling down.
    pub fn is_idle(&self) -> bool {
        self.revealing.is_none() && self.queue.is_empty() && self.cooldown == 0
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new(10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Ticks until the console goes fully idle, bounded so a broken state
    /// machine fails the test instead of hanging it.
    fn drain_fully(console: &mut Console) {
        for _ in 0..10_000 {
            if console.is_idle() {
                return;
            }
            console.tick();
        }
        panic!("console never went idle");
    }

    #[test]
    fn test_committed_order_matches_enqueue_order() {
        let mut console = Console::new(3);
        console.enqueue("first", Severity::Info);
        console.enqueue("second", Severity::Warn);
        console.enqueue("third", Severity::Error);

        drain_fully(&mut console);

        let texts: Vec<&str> = console.lines().iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_severity_preserved_through_reveal() {
        let mut console = Console::new(0);
        console.enqueue("ok", Severity::Success);
        drain_fully(&mut console);

        assert_eq!(console.lines()[0].severity, Severity::Success);
    }

    #[test]
    fn test_single_reveal_at_a_time() {
        let mut console = Console::new(5);
        console.enqueue("alpha", Severity::Info);
        console.enqueue("beta", Severity::Info);

        assert!(console.is_revealing());
        assert_eq!(console.queued(), 1);

        console.tick();
        console.tick();
        assert!(console.is_revealing());
        assert_eq!(console.queued(), 1);
        assert!(console.lines().is_empty());
    }

    #[test]
    fn test_reveal_takes_length_plus_one_ticks() {
        let mut console = Console::new(10);
        console.enqueue("SYNC", Severity::Info);

        for _ in 0..4 {
            console.tick();
            assert!(console.lines().is_empty());
        }
        console.tick();
        assert_eq!(console.lines().len(), 1);
        assert_eq!(console.lines()[0].text, "SYNC");
    }

    #[test]
    fn test_empty_text_commits_after_one_tick() {
        let mut console = Console::new(10);
        console.enqueue("", Severity::Info);

        console.tick();
        assert_eq!(console.lines().len(), 1);
        assert_eq!(console.lines()[0].text, "");
    }

    #[test]
    fn test_caret_trails_the_visible_prefix() {
        let mut console = Console::new(0);
        console.enqueue("AB", Severity::Info);

        let (_, _, visible) = console.revealing_line().unwrap();
        assert_eq!(visible, "█");

        console.tick();
        let (_, _, visible) = console.revealing_line().unwrap();
        assert_eq!(visible, "A█");

        console.tick();
        let (_, _, visible) = console.revealing_line().unwrap();
        assert_eq!(visible, "AB█");

        console.tick();
        assert!(console.revealing_line().is_none());
        assert_eq!(console.lines()[0].text, "AB");
    }

    #[test]
    fn test_multibyte_text_reveals_per_character() {
        let mut console = Console::new(0);
        console.enqueue("Ωμ", Severity::Info);

        console.tick();
        let (_, _, visible) = console.revealing_line().unwrap();
        assert_eq!(visible, "Ω█");

        console.tick();
        console.tick();
        assert_eq!(console.lines()[0].text, "Ωμ");
    }

    #[test]
    fn test_cooldown_delays_next_message() {
        let mut console = Console::new(2);
        console.enqueue("a", Severity::Info);
        console.enqueue("b", Severity::Info);

        console.tick();
        console.tick();
        assert_eq!(console.lines().len(), 1);
        assert!(!console.is_revealing());

        console.tick();
        assert!(!console.is_revealing());
        console.tick();
        assert!(console.is_revealing());
    }

    #[test]
    fn test_zero_cooldown_drains_immediately() {
        let mut console = Console::new(0);
        console.enqueue("a", Severity::Info);
        console.enqueue("b", Severity::Info);

        console.tick();
        console.tick();
        assert_eq!(console.lines().len(), 1);
        assert!(console.is_revealing());
    }

    #[test]
    fn test_enqueue_during_cooldown_starts_immediately() {
        let mut console = Console::new(50);
        console.enqueue("a", Severity::Info);
        console.tick();
        console.tick();
        assert_eq!(console.lines().len(), 1);
        assert!(!console.is_revealing());

        console.enqueue("late", Severity::Info);
        assert!(console.is_revealing());
    }

    #[test]
    fn test_clear_keeps_queue_and_reveal() {
        let mut console = Console::new(0);
        console.enqueue("committed", Severity::Info);
        drain_fully(&mut console);

        console.enqueue("typing", Severity::Warn);
        console.enqueue("waiting", Severity::Info);
        console.tick();

        console.clear();
        assert!(console.lines().is_empty());
        assert!(console.is_revealing());
        assert_eq!(console.queued(), 1);

        drain_fully(&mut console);
        let texts: Vec<&str> = console.lines().iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["typing", "waiting"]);
    }

    #[test]
    fn test_log_is_append_only_between_clears() {
        let mut console = Console::new(0);
        console.enqueue("one", Severity::Info);
        drain_fully(&mut console);
        let first = console.lines()[0].text.clone();

        console.enqueue("two", Severity::Info);
        drain_fully(&mut console);

        assert_eq!(console.lines()[0].text, first);
        assert_eq!(console.lines().len(), 2);
    }

    #[test]
    fn test_interleaved_messages_commit_in_full() {
        let mut console = Console::new(1);
        console.enqueue("AAAA", Severity::Info);
        console.enqueue("BB", Severity::Warn);

        // A commits before any B character is revealed.
        for _ in 0..5 {
            console.tick();
            if let Some((_, severity, _)) = console.revealing_line() {
                assert_eq!(severity, Severity::Info);
            }
        }
        assert_eq!(console.lines().len(), 1);
        assert_eq!(console.lines()[0].text, "AAAA");

        drain_fully(&mut console);
        assert_eq!(console.lines()[1].text, "BB");
        assert_eq!(console.lines()[1].severity, Severity::Warn);
    }

    #[test]
    fn test_timestamp_captured_at_reveal_start() {
        let mut console = Console::new(0);
        console.enqueue("x", Severity::Info);

        let (stamp, _, _) = console.revealing_line().map(|(s, v, t)| (s.to_string(), v, t)).unwrap();
        drain_fully(&mut console);
        assert_eq!(console.lines()[0].timestamp, stamp);
    }
}

//! Keyboard input sources.
//!
//! The pager pulls decoded key presses from an [`InputSource`]. Sources are
//! injected at construction, so several pagers can run against independent
//! sources and tests can script the exact keystrokes they need.

use std::collections::VecDeque;

use crossterm::{
    event::{self, Event, KeyCode},
    terminal,
};

use crate::error::Result;
use crate::key::KeyPress;

/// One event delivered by an input source.
///
/// `ch` is the printable character of the key, if any. `key` is the decoded
/// descriptor; it is `None` when the decoder could not classify the input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputEvent {
    /// The character produced by the key, if it produces one.
    pub ch: Option<char>,
    /// The decoded key, if the raw input could be classified.
    pub key: Option<KeyPress>,
}

impl InputEvent {
    /// An event carrying a decoded key and no character.
    pub fn key(key: KeyPress) -> Self {
        Self {
            ch: None,
            key: Some(key),
        }
    }

    /// Shorthand for [`InputEvent::key`] with a parsed descriptor like `"ctrl+c"`.
    pub fn parse(descriptor: &str) -> Self {
        Self::key(KeyPress::parse(descriptor))
    }

    /// Converts a crossterm event. Anything other than a decodable key press
    /// yields an event with `key: None`.
    pub fn from_crossterm(event: &Event) -> Self {
        match event {
            Event::Key(key_event) => Self {
                ch: match key_event.code {
                    KeyCode::Char(c) => Some(c),
                    _ => None,
                },
                key: KeyPress::from_key_event(key_event),
            },
            _ => Self::default(),
        }
    }
}

/// Keyboard capability consumed by the pager.
pub trait InputSource {
    /// Switches raw (unbuffered, non-echoing) mode on or off.
    fn set_raw_mode(&mut self, enabled: bool) -> Result<()>;

    /// Starts or resumes delivery of events.
    fn resume(&mut self) -> Result<()>;

    /// Stops delivery of events.
    fn pause(&mut self) -> Result<()>;

    /// Blocks until the next event. `None` means the source is exhausted
    /// or paused and no further events will arrive.
    fn read_event(&mut self) -> Result<Option<InputEvent>>;
}

/// Reads key events from the controlling terminal through crossterm.
///
/// Raw mode is switched off again on [`pause`](InputSource::pause) and when
/// the source is dropped, so the terminal is never left in raw mode.
#[derive(Debug)]
pub struct TermInput {
    raw: bool,
    paused: bool,
}

impl TermInput {
    /// Creates a paused source with raw mode off.
    pub fn new() -> Self {
        Self {
            raw: false,
            paused: true,
        }
    }
}

impl Default for TermInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for TermInput {
    fn set_raw_mode(&mut self, enabled: bool) -> Result<()> {
        if enabled {
            terminal::enable_raw_mode()?;
        } else {
            terminal::disable_raw_mode()?;
        }
        self.raw = enabled;
        Ok(())
    }

    fn resume(&mut self) -> Result<()> {
        self.paused = false;
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        self.paused = true;
        if self.raw {
            self.set_raw_mode(false)?;
        }
        Ok(())
    }

    fn read_event(&mut self) -> Result<Option<InputEvent>> {
        if self.paused {
            return Ok(None);
        }
        let event = event::read()?;
        Ok(Some(InputEvent::from_crossterm(&event)))
    }
}

impl Drop for TermInput {
    fn drop(&mut self) {
        if self.raw {
            let _ = terminal::disable_raw_mode();
        }
    }
}

/// A pre-loaded queue of events.
///
/// Records the raw-mode and pause state the pager requested so tests can
/// assert on them.
///
/// ```rust
/// use list_pager::input::{InputEvent, InputSource, ScriptedInput};
///
/// let mut input = ScriptedInput::new([InputEvent::parse("down")]);
/// input.resume().unwrap();
/// assert_eq!(input.read_event().unwrap(), Some(InputEvent::parse("down")));
/// assert_eq!(input.read_event().unwrap(), None);
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedInput {
    events: VecDeque<InputEvent>,
    raw: bool,
    paused: bool,
    pause_count: usize,
}

impl ScriptedInput {
    /// Creates a source that will deliver `events` in order once resumed.
    pub fn new(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
            raw: false,
            paused: true,
            pause_count: 0,
        }
    }

    /// Appends an event to the queue.
    pub fn push(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    /// Events not yet delivered.
    pub fn remaining(&self) -> usize {
        self.events.len()
    }

    /// Whether raw mode is currently on.
    pub fn is_raw(&self) -> bool {
        self.raw
    }

    /// Whether the source is paused.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// How many times [`pause`](InputSource::pause) was called.
    pub fn pause_count(&self) -> usize {
        self.pause_count
    }
}

impl Default for ScriptedInput {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl InputSource for ScriptedInput {
    fn set_raw_mode(&mut self, enabled: bool) -> Result<()> {
        self.raw = enabled;
        Ok(())
    }

    fn resume(&mut self) -> Result<()> {
        self.paused = false;
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        self.paused = true;
        self.pause_count += 1;
        Ok(())
    }

    fn read_event(&mut self) -> Result<Option<InputEvent>> {
        if self.paused {
            return Ok(None);
        }
        Ok(self.events.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    #[test]
    fn test_from_crossterm_key() {
        let event = Event::Key(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE));
        let input = InputEvent::from_crossterm(&event);
        assert_eq!(input.ch, Some('j'));
        assert_eq!(input.key, Some(KeyPress::new("j")));
    }

    #[test]
    fn test_from_crossterm_non_key_has_no_descriptor() {
        let input = InputEvent::from_crossterm(&Event::Resize(80, 24));
        assert_eq!(input, InputEvent::default());
    }

    #[test]
    fn test_punctuation_keeps_char_but_no_key() {
        let event = Event::Key(KeyEvent::new(KeyCode::Char('?'), KeyModifiers::NONE));
        let input = InputEvent::from_crossterm(&event);
        assert_eq!(input.ch, Some('?'));
        assert!(input.key.is_none());
    }

    #[test]
    fn test_scripted_input_is_paused_until_resumed() {
        let mut input = ScriptedInput::new([InputEvent::parse("up")]);
        assert_eq!(input.read_event().unwrap(), None);
        assert_eq!(input.remaining(), 1);

        input.resume().unwrap();
        assert_eq!(input.read_event().unwrap(), Some(InputEvent::parse("up")));

        input.pause().unwrap();
        input.pause().unwrap();
        assert!(input.is_paused());
        assert_eq!(input.pause_count(), 2);
    }
}

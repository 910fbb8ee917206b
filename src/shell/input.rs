//! Line input for the shell. Reading a line is the only place the shell
//! blocks, so it is also where an interrupt is observed.

use crossbeam_channel::{Receiver, bounded, select, unbounded};
use std::collections::VecDeque;
use std::io::{self, BufRead};
use std::thread;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("interrupted")]
    Interrupted,
    #[error("input closed")]
    Closed,
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

pub trait LineSource {
    /// Next line without its trailing line ending.
    fn read_line(&mut self) -> Result<String, InputError>;
}

/// Stdin lines and Ctrl-C notifications, delivered through channels.
pub struct TerminalInput {
    lines: Receiver<io::Result<String>>,
    interrupts: Receiver<()>,
}

impl TerminalInput {
    /// Installs the Ctrl-C handler and starts the stdin reader thread.
    /// The handler can only be installed once per process.
    pub fn spawn() -> Result<Self, ctrlc::Error> {
        let (interrupt_tx, interrupts) = bounded(1);
        ctrlc::set_handler(move || {
            let _ = interrupt_tx.try_send(());
        })?;

        let (line_tx, lines) = unbounded();
        thread::spawn(move || {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                if line_tx.send(line).is_err() {
                    break;
                }
            }
            debug!("stdin reader finished");
        });

        Ok(Self::from_channels(lines, interrupts))
    }

    fn from_channels(lines: Receiver<io::Result<String>>, interrupts: Receiver<()>) -> Self {
        Self { lines, interrupts }
    }

    fn interrupted(&self) -> bool {
        self.interrupts.try_recv().is_ok()
    }
}

impl LineSource for TerminalInput {
    /// A pending interrupt always wins over lines already buffered.
    fn read_line(&mut self) -> Result<String, InputError> {
        if self.interrupted() {
            return Err(InputError::Interrupted);
        }
        select! {
            recv(self.interrupts) -> _ => Err(InputError::Interrupted),
            recv(self.lines) -> msg => match msg {
                _ if self.interrupted() => Err(InputError::Interrupted),
                Ok(Ok(line)) => Ok(strip_line_ending(line)),
                Ok(Err(err)) => Err(InputError::Io(err)),
                Err(_) => Err(InputError::Closed),
            },
        }
    }
}

fn strip_line_ending(mut line: String) -> String {
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    line
}

#[derive(Debug)]
enum Scripted {
    Line(String),
    Interrupt,
}

/// Pre-recorded input. Once the script runs out, reads report
/// [`InputError::Closed`].
#[derive(Debug, Default)]
pub struct ScriptedInput {
    script: VecDeque<Scripted>,
}

impl ScriptedInput {
    pub fn new<I, T>(lines: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut input = Self::default();
        for line in lines {
            input = input.line(line);
        }
        input
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.script.push_back(Scripted::Line(line.into()));
        self
    }

    /// Queues an interrupt, as if Ctrl-C arrived during that read.
    pub fn interrupt(mut self) -> Self {
        self.script.push_back(Scripted::Interrupt);
        self
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl LineSource for ScriptedInput {
    fn read_line(&mut self) -> Result<String, InputError> {
        match self.script.pop_front() {
            Some(Scripted::Line(line)) => Ok(line),
            Some(Scripted::Interrupt) => Err(InputError::Interrupted),
            None => Err(InputError::Closed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_input_replays_lines_then_closes() {
        let mut input = ScriptedInput::new(["1", "two"]);
        assert_eq!(input.read_line().unwrap(), "1");
        assert_eq!(input.read_line().unwrap(), "two");
        assert!(matches!(input.read_line(), Err(InputError::Closed)));
    }

    #[test]
    fn scripted_interrupt_surfaces_in_order() {
        let mut input = ScriptedInput::new(["1"]).interrupt().line("ignored");
        assert_eq!(input.read_line().unwrap(), "1");
        assert!(matches!(input.read_line(), Err(InputError::Interrupted)));
        assert_eq!(input.remaining(), 1);
    }

    #[test]
    fn pending_interrupt_beats_buffered_lines() {
        let (line_tx, lines) = unbounded();
        let (interrupt_tx, interrupts) = bounded(1);
        for line in ["2", "term", ""] {
            line_tx.send(Ok(line.to_string())).unwrap();
        }
        interrupt_tx.send(()).unwrap();
        let mut input = TerminalInput::from_channels(lines, interrupts);

        for _ in 0..32 {
            assert!(matches!(input.read_line(), Err(InputError::Interrupted)));
            interrupt_tx.try_send(()).unwrap();
        }
    }

    #[test]
    fn terminal_input_delivers_lines_then_closes() {
        let (line_tx, lines) = unbounded();
        let (_interrupt_tx, interrupts) = bounded(1);
        line_tx.send(Ok("5".to_string())).unwrap();
        drop(line_tx);
        let mut input = TerminalInput::from_channels(lines, interrupts);

        assert_eq!(input.read_line().unwrap(), "5");
        assert!(matches!(input.read_line(), Err(InputError::Closed)));
    }

    #[test]
    fn line_endings_are_stripped() {
        assert_eq!(strip_line_ending("abc\r\n".to_string()), "abc");
        assert_eq!(strip_line_ending("abc".to_string()), "abc");
    }
}

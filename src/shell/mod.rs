//! Menu loop that dispatches to the planner operations.

pub mod input;
pub mod terminal;

use crate::config::PlannerConfig;
use crate::operations::{add_entries, export_plans_to_file, list_plans, prompt, search_plans};
use crate::persistence::PlanStorage;
use crate::store::PlanStore;
use input::{InputError, LineSource};
use std::io::{self, Write};
use thiserror::Error;
use tracing::debug;

const MENU_WIDTH: usize = 50;
const TITLE: &str = "YouTube Content Planning";

#[derive(Debug, Error)]
pub enum ShellError {
    /// Ctrl-C arrived while waiting for input.
    #[error("interrupted")]
    Interrupted,
    #[error("input closed")]
    InputClosed,
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

impl From<InputError> for ShellError {
    fn from(value: InputError) -> Self {
        match value {
            InputError::Interrupted => Self::Interrupted,
            InputError::Closed => Self::InputClosed,
            InputError::Io(err) => Self::Io(err),
        }
    }
}

pub type ShellResult<T> = Result<T, ShellError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Search,
    List,
    Export,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::Search),
            "3" => Some(Self::List),
            "4" => Some(Self::Export),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// How the loop ended. Every variant is a clean shutdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellExit {
    Requested,
    Interrupted,
    InputClosed,
}

pub struct Shell<S, L, W> {
    store: PlanStore<S>,
    input: L,
    out: W,
    config: PlannerConfig,
    notice: Option<String>,
}

impl<S, L, W> Shell<S, L, W>
where
    S: PlanStorage,
    L: LineSource,
    W: Write,
{
    pub fn new(store: PlanStore<S>, input: L, out: W, config: PlannerConfig) -> Self {
        Self {
            store,
            input,
            out,
            config,
            notice: None,
        }
    }

    /// Message shown once under the next menu render.
    pub fn with_notice(mut self, notice: impl Into<String>) -> Self {
        self.notice = Some(notice.into());
        self
    }

    pub fn store(&self) -> &PlanStore<S> {
        &self.store
    }

    pub fn into_parts(self) -> (PlanStore<S>, W) {
        (self.store, self.out)
    }

    /// Runs until the user exits, input closes or Ctrl-C arrives. Only a
    /// failure to write to the output is returned as an error.
    pub fn run(&mut self) -> io::Result<ShellExit> {
        loop {
            match self.step() {
                Ok(Some(exit)) => return Ok(exit),
                Ok(None) => {}
                Err(ShellError::Interrupted) => {
                    debug!("interrupt received");
                    writeln!(self.out, "\nExiting program.")?;
                    self.out.flush()?;
                    return Ok(ShellExit::Interrupted);
                }
                Err(ShellError::InputClosed) => {
                    debug!("input closed");
                    writeln!(self.out, "\nExiting program.")?;
                    self.out.flush()?;
                    return Ok(ShellExit::InputClosed);
                }
                Err(ShellError::Io(err)) => return Err(err),
            }
        }
    }

    fn step(&mut self) -> ShellResult<Option<ShellExit>> {
        self.render_menu()?;
        let raw = prompt(&mut self.input, &mut self.out, "Enter your choice: ")?;
        let Some(choice) = MenuChoice::parse(&raw) else {
            writeln!(self.out, "Invalid choice. Please try again.")?;
            self.pause()?;
            return Ok(None);
        };
        debug!(?choice, "menu choice");

        match choice {
            MenuChoice::Add => {
                add_entries(&mut self.store, &mut self.input, &mut self.out)?;
            }
            MenuChoice::Search => {
                search_plans(&self.store, &mut self.input, &mut self.out)?;
            }
            MenuChoice::List => {
                list_plans(&self.store, &mut self.out)?;
            }
            MenuChoice::Export => {
                export_plans_to_file(&self.store, &self.config.export_path, &mut self.out)?;
            }
            MenuChoice::Exit => {
                writeln!(self.out, "Exiting program.")?;
                self.out.flush()?;
                return Ok(Some(ShellExit::Requested));
            }
        }
        self.pause()?;
        Ok(None)
    }

    fn render_menu(&mut self) -> ShellResult<()> {
        if self.config.clear_screen {
            terminal::clear_screen(&mut self.out)?;
        }
        writeln!(self.out, "\n{}", terminal::centered(TITLE, MENU_WIDTH))?;
        if let Some(notice) = self.notice.take() {
            writeln!(self.out, "{notice}")?;
        }
        writeln!(self.out, "1. Add New Planning Entry")?;
        writeln!(self.out, "2. Search in Plans")?;
        writeln!(self.out, "3. Display All Plans")?;
        writeln!(self.out, "4. Export to Excel")?;
        writeln!(self.out, "5. Exit")?;
        Ok(())
    }

    fn pause(&mut self) -> ShellResult<()> {
        prompt(&mut self.input, &mut self.out, "\nPress Enter to continue...")?;
        Ok(())
    }
}

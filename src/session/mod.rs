//! Line-oriented command loop.
//!
//! The session prints a banner, then repeatedly reads a command at `?> `, asks for
//! its parameters, and prints the result. Navigation errors are reported and the loop
//! carries on; only I/O failures on the terminal end it early.

mod command;

pub use command::Command;

use std::io::{self, BufRead, Write};

use rust_decimal::Decimal;
use spacesim_core::notation::{format_exponential, to_eng_string, to_sci_string};
use spacesim_navigation::{
    Catalog, NavigationError, calculate_distance, calculate_transmission_delay, convert_to_au,
    present_planet, travel_time,
};
use thiserror::Error;

pub const WELCOME: &str = "Welcome to the space simulator. Type Q to quit";
pub const COMMANDS_HEADER: &str = "The available commands are: \n";
pub const FAREWELL: &str = "Closing the space travel simulator";
pub const FAULTY_PLANET: &str = "Faulty planet name, please try again";

pub const QUIT: &str = "Q";
/// Planet input that makes `Show Planets` list the whole table.
pub const ALL_PLANETS: &str = "All";
/// Ship input that lists the known ships before asking again.
pub const LIST_SHIPS: &str = "?";

pub const MAIN_PROMPT: &str = "?> ";
pub const PLANET_PROMPT: &str = "Select Planet> ";
pub const SECOND_PLANET_PROMPT: &str = "Select Second planet> ";
pub const SHIP_PROMPT: &str = "Ship Name > ";
pub const DESTINATION_PROMPT: &str = "Select Second planet > ";
pub const SHIP_RETRY_PROMPT: &str = "Ship ?";

/// Fractional digits in distance and travel-time output.
const EXPONENTIAL_DIGITS: usize = 5;

/// Fatal session failures.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Stopped,
}

/// Why a command stopped before printing its result.
#[derive(Debug, Error)]
enum Interrupt {
    #[error(transparent)]
    Navigation(#[from] NavigationError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("end of input")]
    EndOfInput,
}

impl From<io::Error> for Interrupt {
    fn from(err: io::Error) -> Self {
        Interrupt::Session(SessionError::Io(err))
    }
}

/// An interactive session over any line reader and writer.
pub struct Session<'a, R, W> {
    catalog: &'a Catalog,
    input: R,
    output: W,
    state: SessionState,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(catalog: &'a Catalog, input: R, output: W) -> Self {
        Self {
            catalog,
            input,
            output,
            state: SessionState::Running,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print the banner, process commands until `Q` or end of input, then say goodbye.
    pub fn run(&mut self) -> Result<(), SessionError> {
        self.setup()?;
        while self.state == SessionState::Running {
            self.step()?;
        }
        self.shutdown()
    }

    fn setup(&mut self) -> Result<(), SessionError> {
        writeln!(self.output, "{WELCOME}")?;
        writeln!(self.output, "{COMMANDS_HEADER}")?;
        for command in Command::ALL {
            writeln!(self.output, "{}", command.label())?;
        }
        Ok(())
    }

    fn shutdown(&mut self) -> Result<(), SessionError> {
        writeln!(self.output, "{FAREWELL}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Read and handle a single line from the main prompt.
    pub fn step(&mut self) -> Result<(), SessionError> {
        let Some(line) = self.prompt(MAIN_PROMPT)? else {
            log::debug!("end of input at main prompt");
            self.state = SessionState::Stopped;
            return Ok(());
        };
        if line == QUIT {
            self.state = SessionState::Stopped;
            return Ok(());
        }
        let Some(command) = Command::from_label(&line) else {
            log::debug!("ignoring unknown command {line:?}");
            return Ok(());
        };

        log::debug!("dispatching {command:?}");
        match self.execute(command) {
            Ok(()) => Ok(()),
            Err(Interrupt::Navigation(err)) => {
                log::warn!("{} failed: {err}", command.label());
                writeln!(self.output, "{err}")?;
                Ok(())
            }
            Err(Interrupt::EndOfInput) => {
                log::debug!("end of input during {command:?}");
                self.state = SessionState::Stopped;
                Ok(())
            }
            Err(Interrupt::Session(err)) => Err(err),
        }
    }

    fn execute(&mut self, command: Command) -> Result<(), Interrupt> {
        let catalog = self.catalog;
        let planet = self.ask(PLANET_PROMPT)?;

        match command {
            Command::ShowPlanets => {
                if planet == ALL_PLANETS {
                    for entry in catalog.planets() {
                        writeln!(self.output, "{}", present_planet(catalog, &entry.name))?;
                    }
                } else if catalog.contains_planet(&planet) {
                    writeln!(self.output, "{}", present_planet(catalog, &planet))?;
                } else {
                    writeln!(self.output, "{FAULTY_PLANET}")?;
                }
            }
            Command::ConvertAu => {
                if catalog.contains_planet(&planet) {
                    let au = convert_to_au(catalog, &planet)?;
                    writeln!(self.output, "{}", to_eng_string(au))?;
                }
            }
            Command::CalculateDistance => {
                let second = self.ask(SECOND_PLANET_PROMPT)?;
                let end = catalog
                    .planet_distance(&second)
                    .ok_or(NavigationError::UnknownPlanet(second))?;
                let start = catalog.distance_or(&planet, Decimal::ZERO);
                let distance = calculate_distance(start, end);
                writeln!(
                    self.output,
                    "{}",
                    format_exponential(distance, EXPONENTIAL_DIGITS)
                )?;
            }
            Command::Travel => {
                let mut ship = self.ask(SHIP_PROMPT)?;
                let destination = self.ask(DESTINATION_PROMPT)?;
                if ship == LIST_SHIPS {
                    let names: Vec<&str> = catalog.ship_names().collect();
                    writeln!(self.output, "{}", names.join(", "))?;
                    ship = self.ask(SHIP_RETRY_PROMPT)?;
                }
                let seconds = travel_time(catalog, &ship, &planet, &destination)?;
                writeln!(
                    self.output,
                    "{}",
                    format_exponential(seconds, EXPONENTIAL_DIGITS)
                )?;
            }
            Command::CalculateDelay => {
                let delay = calculate_transmission_delay(catalog, &planet)?;
                writeln!(self.output, "{}", to_sci_string(delay))?;
            }
        }
        Ok(())
    }

    fn ask(&mut self, text: &str) -> Result<String, Interrupt> {
        self.prompt(text)?.ok_or(Interrupt::EndOfInput)
    }

    /// Print `text` without a newline and read one line. `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>, SessionError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

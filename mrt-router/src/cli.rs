//! Command-line front end: one-shot queries and the interactive prompt loop.
//!
//! Everything here is generic over its input and output so sessions can be
//! driven from tests.

use std::io::{self, BufRead, Write};

use chrono::NaiveDateTime;
use tracing::debug;

use crate::domain::{RouteError, Station, TimeError, parse_departure};
use crate::planner::{Route, Router};
use crate::stations::StationResolver;

const DEPARTURE_PROMPT: &str = "When do you want to start your journey?
Type 'now' to start now, any other key to customize time: ";
const TIME_PROMPT: &str = "Type the time in HH:mm 24-hour format (e.g. 21:09)\n";
const DATE_PROMPT: &str = "Type the date in DD/MM/YYYY format (e.g. 20/08/1995)\n";

/// Errors from a one-shot query.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("no station matches {0:?}")]
    UnknownStation(String),

    #[error("expected 'now' or \"HH:MM DD/MM/YYYY\": {0}")]
    Time(#[from] TimeError),

    #[error(transparent)]
    Route(#[from] RouteError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Parse a departure given as `now` or `HH:MM DD/MM/YYYY`.
pub fn parse_at(s: &str, now: NaiveDateTime) -> Result<NaiveDateTime, TimeError> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("now") {
        return Ok(now);
    }
    let (time, date) = s.split_once(' ').unwrap_or((s, ""));
    parse_departure(time, date)
}

/// Resolve both stations and plan a single route.
pub fn plan_once<S: StationResolver>(
    router: &Router<'_>,
    resolver: &S,
    from: &str,
    to: &str,
    at: NaiveDateTime,
) -> Result<Route, CliError> {
    let origin = resolver
        .resolve(from)
        .ok_or_else(|| CliError::UnknownStation(from.to_string()))?;
    let destination = resolver
        .resolve(to)
        .ok_or_else(|| CliError::UnknownStation(to.to_string()))?;
    debug!(from, to, origin = %origin, destination = %destination, "resolved stations");
    Ok(router.get_route(origin.name(), destination.name(), at)?)
}

/// Write a route the way the interactive loop prints it.
pub fn print_route<W: Write>(out: &mut W, route: &Route) -> io::Result<()> {
    for line in route.lines() {
        writeln!(out, "{line}")?;
    }
    writeln!(
        out,
        "Total travel time: {} minutes",
        route.duration().num_minutes()
    )
}

/// An interactive route-finding session.
pub struct Session<'a, S, R, W> {
    router: &'a Router<'a>,
    resolver: &'a S,
    input: R,
    output: W,
    clock: Box<dyn Fn() -> NaiveDateTime + 'a>,
}

impl<'a, S: StationResolver, R: BufRead, W: Write> Session<'a, S, R, W> {
    pub fn new(router: &'a Router<'a>, resolver: &'a S, input: R, output: W) -> Self {
        Self {
            router,
            resolver,
            input,
            output,
            clock: Box::new(|| chrono::Local::now().naive_local()),
        }
    }

    /// Replace the clock used when the user asks to leave now.
    pub fn with_clock(mut self, clock: impl Fn() -> NaiveDateTime + 'a) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Run until the user declines to continue or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "Welcome to the MRT route finder.")?;

        loop {
            let Some(origin) = self.ask_station("origin")? else {
                return Ok(());
            };
            let Some(destination) = self.ask_station("destination")? else {
                return Ok(());
            };
            let Some(at) = self.ask_departure()? else {
                return Ok(());
            };

            writeln!(
                self.output,
                "Calculating route from {} to {} at {}",
                origin.name(),
                destination.name(),
                at.format("%H:%M, %d/%m/%Y")
            )?;

            let question = match self.router.get_route(origin.name(), destination.name(), at) {
                Ok(route) => {
                    print_route(&mut self.output, &route)?;
                    "Route has been found. Continue finding another route?"
                }
                Err(err) => {
                    writeln!(self.output, "Sorry, {err}.")?;
                    "No route was found. Continue finding another route?"
                }
            };

            let prompt =
                format!("{question}\nType 'n' to stop programme, any other key to continue: ");
            match self.ask(&prompt)? {
                Some(answer) if !answer.eq_ignore_ascii_case("n") => continue,
                _ => return Ok(()),
            }
        }
    }

    /// Prompt until the user confirms a station. `None` means input ended.
    fn ask_station(&mut self, position: &str) -> io::Result<Option<Station>> {
        let mut prompt = format!("Enter the {position} station's name or code: ");
        loop {
            let Some(query) = self.ask(&prompt)? else {
                return Ok(None);
            };
            prompt = "Enter a station's name or code: ".to_string();

            let Some(station) = self.resolver.resolve(&query).cloned() else {
                writeln!(self.output, "No station matches {query:?}.")?;
                continue;
            };

            let confirm = format!(
                "Is {} the correct station?\nType 'y' to confirm, any other key to search again: ",
                station.name()
            );
            match self.ask(&confirm)? {
                Some(answer) if answer.eq_ignore_ascii_case("y") => return Ok(Some(station)),
                Some(_) => continue,
                None => return Ok(None),
            }
        }
    }

    /// Prompt for a departure time. `None` means input ended.
    fn ask_departure(&mut self) -> io::Result<Option<NaiveDateTime>> {
        let Some(answer) = self.ask(DEPARTURE_PROMPT)? else {
            return Ok(None);
        };
        if answer.eq_ignore_ascii_case("now") {
            return Ok(Some((self.clock)()));
        }

        loop {
            let Some(time) = self.ask(TIME_PROMPT)? else {
                return Ok(None);
            };
            let Some(date) = self.ask(DATE_PROMPT)? else {
                return Ok(None);
            };
            match parse_departure(&time, &date) {
                Ok(at) => return Ok(Some(at)),
                Err(err) => {
                    debug!(%time, %date, error = %err, "rejected departure time");
                    writeln!(self.output, "Format is invalid. Please type again.")?;
                }
            }
        }
    }

    /// Print `prompt` and read one trimmed line. `None` at end of input.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

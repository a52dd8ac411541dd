//! Runner that parses simulation input and replays mower programmes.
//!
//! The entry point is [`SimulationRunner`]. Construct one, optionally attach
//! a [`SimulationObserver`] via [`SimulationRunner::with_observer`], then
//! call [`SimulationRunner::run`] with the raw input text.

use crate::error::SimulationError;
use crate::lawn::Lawn;
use crate::mower::{Heading, Instruction, Mower};

/// Callbacks for watching a run as it unfolds.
///
/// The caller supplies whatever sink it wants, a logger or a test recorder
/// for instance. Every method has a no-op default, so implementors pick
/// only the events they care about.
pub trait SimulationObserver {
    /// The lawn line parsed successfully.
    fn lawn_parsed(&mut self, _lawn: &Lawn) {}

    /// A mower header parsed successfully. `index` counts from zero in
    /// input order.
    fn mower_loaded(&mut self, _index: usize, _mower: &Mower) {}

    /// A forward step was reverted because it left the lawn. `mower` is the
    /// restored state; its remaining instructions still execute.
    fn step_reverted(&mut self, _mower: &Mower) {}

    /// A mower consumed its whole programme. `mower` is its final state.
    fn mower_finished(&mut self, _index: usize, _mower: &Mower) {}
}

/// Parses a `<width> <height>` lawn line.
///
/// `line` is the 1-based line number, used only for error context. Negative
/// bounds are rejected by [`Lawn::new`]; anything that is not exactly two
/// integer tokens is [`SimulationError::MalformedLawn`].
pub fn parse_lawn(text: &str, line: usize) -> Result<Lawn, SimulationError> {
    let malformed = || SimulationError::MalformedLawn {
        line,
        text: text.trim().to_string(),
    };

    let mut tokens = text.split_whitespace();
    let width = tokens
        .next()
        .and_then(|token| token.parse().ok())
        .ok_or_else(malformed)?;
    let height = tokens
        .next()
        .and_then(|token| token.parse().ok())
        .ok_or_else(malformed)?;
    if tokens.next().is_some() {
        return Err(malformed());
    }

    Lawn::new(width, height)
}

/// Parses a `<x> <y> <heading-letter>` mower header.
///
/// `line` is the 1-based line number, used only for error context. The
/// heading letter is kept as given: letters outside N/E/S/W yield an inert
/// mower (see [`Heading::Unknown`]) rather than an error.
pub fn parse_mower(text: &str, line: usize) -> Result<Mower, SimulationError> {
    let malformed = || SimulationError::MalformedMower {
        line,
        text: text.trim().to_string(),
    };

    let mut tokens = text.split_whitespace();
    let x = tokens
        .next()
        .and_then(|token| token.parse().ok())
        .ok_or_else(malformed)?;
    let y = tokens
        .next()
        .and_then(|token| token.parse().ok())
        .ok_or_else(malformed)?;

    let letter = tokens.next().ok_or_else(malformed)?;
    let mut chars = letter.chars();
    let heading = match (chars.next(), chars.next()) {
        (Some(value), None) => Heading::from_char(value),
        _ => return Err(malformed()),
    };
    if tokens.next().is_some() {
        return Err(malformed());
    }

    Ok(Mower::new(x, y, heading))
}

/// Parses the lawn and mower blocks from raw text and replays each mower's
/// programme, keeping every mower on the lawn.
///
/// The runner owns no state between runs; each call to
/// [`run`](SimulationRunner::run) is independent.
#[derive(Default)]
pub struct SimulationRunner {
    observer: Option<Box<dyn SimulationObserver>>,
}

impl SimulationRunner {
    /// Creates a runner with no observer attached.
    pub fn new() -> SimulationRunner {
        SimulationRunner::default()
    }

    /// Attaches an observer that receives progress callbacks (builder
    /// pattern).
    pub fn with_observer(mut self, observer: Box<dyn SimulationObserver>) -> SimulationRunner {
        self.observer = Some(observer);
        self
    }

    /// Replays one mower's instruction programme on `lawn` and returns the
    /// final state.
    ///
    /// The starting position must lie on the lawn, otherwise
    /// [`SimulationError::MowerOutOfBounds`] is returned before any
    /// instruction is applied. A forward step that leaves the lawn is undone
    /// on the spot and the remaining instructions still execute; only
    /// forward steps can violate containment, so turns are never checked.
    pub fn process(
        &mut self,
        lawn: &Lawn,
        mut mower: Mower,
        instructions: &str,
    ) -> Result<Mower, SimulationError> {
        if !lawn.contains(mower.position) {
            return Err(SimulationError::MowerOutOfBounds {
                x: mower.position.x,
                y: mower.position.y,
                width: lawn.width(),
                height: lawn.height(),
            });
        }

        for value in instructions.chars() {
            let instruction = Instruction::from_char(value);
            mower.apply(instruction);
            if instruction == Instruction::Forward && !lawn.contains(mower.position) {
                mower.move_backward();
                if let Some(observer) = self.observer.as_deref_mut() {
                    observer.step_reverted(&mower);
                }
            }
        }

        Ok(mower)
    }

    /// Runs a full simulation over `input` and returns the final mower
    /// states in input order.
    ///
    /// The first line declares the lawn; each mower then contributes a
    /// header line and a programme line. A trailing header with no programme
    /// line is treated as absent. The first parse failure or out-of-bounds
    /// starting position aborts the whole run with that error; no partial
    /// result list is produced.
    pub fn run(&mut self, input: &str) -> Result<Vec<Mower>, SimulationError> {
        let mut lines = input.lines().enumerate();

        let (number, text) = lines.next().ok_or(SimulationError::MissingLawn)?;
        let lawn = parse_lawn(text, number + 1)?;
        if let Some(observer) = self.observer.as_deref_mut() {
            observer.lawn_parsed(&lawn);
        }

        let mut finished = Vec::new();
        while let Some((number, header)) = lines.next() {
            let Some((_, instructions)) = lines.next() else {
                break;
            };

            let mower = parse_mower(header, number + 1)?;
            let index = finished.len();
            if let Some(observer) = self.observer.as_deref_mut() {
                observer.mower_loaded(index, &mower);
            }

            let mower = self.process(&lawn, mower, instructions)?;
            if let Some(observer) = self.observer.as_deref_mut() {
                observer.mower_finished(index, &mower);
            }
            finished.push(mower);
        }

        Ok(finished)
    }
}

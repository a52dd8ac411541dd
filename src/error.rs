//! Error types for lawn parsing and mower simulation.

use thiserror::Error;

/// Errors that abort a simulation run.
///
/// Parse failures and an out-of-bounds starting position are fatal to the
/// whole run: no partial result list is produced. Everything else the input
/// can contain (unknown instruction characters, unknown heading letters,
/// forward steps into the boundary) is absorbed locally and never surfaces
/// as an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// The lawn line declared a negative bound.
    #[error("lawn bounds must be non-negative, got {width} {height}")]
    InvalidLawn {
        /// Parsed width, possibly negative.
        width: i32,
        /// Parsed height, possibly negative.
        height: i32,
    },

    /// The lawn line was not two whitespace-separated integers.
    #[error("line {line}: expected `<width> <height>`, got `{text}`")]
    MalformedLawn {
        /// 1-based line number in the input.
        line: usize,
        /// The offending line, trimmed.
        text: String,
    },

    /// A mower header was not `<x> <y> <heading-letter>`.
    #[error("line {line}: expected `<x> <y> <heading>`, got `{text}`")]
    MalformedMower {
        /// 1-based line number in the input.
        line: usize,
        /// The offending line, trimmed.
        text: String,
    },

    /// The input contained no lawn line at all.
    #[error("input is empty, expected a `<width> <height>` lawn line")]
    MissingLawn,

    /// A mower's starting position lies outside the lawn. Detected before
    /// any of its instructions are applied.
    #[error("mower starts at ({x}, {y}), outside the {width} x {height} lawn")]
    MowerOutOfBounds {
        /// Starting x coordinate.
        x: i32,
        /// Starting y coordinate.
        y: i32,
        /// The lawn's inclusive width.
        width: i32,
        /// The lawn's inclusive height.
        height: i32,
    },
}

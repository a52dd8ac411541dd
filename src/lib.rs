//! # mower-sim
//!
//! A deterministic simulation core for grid-bound mowers on a bounded
//! rectangular lawn.
//!
//! The crate consumes raw input text (one lawn line, then a header line and
//! a programme line per mower) and produces the ordered list of final mower
//! states. File reading and configuration lookup stay with the caller, and
//! so does printing; the [`SimulationObserver`] seam lets a caller watch a
//! run without the core ever touching a logger.
//!
//! ```
//! use mower_sim::SimulationRunner;
//!
//! let input = "5 5\n1 2 N\nLFLFLFLFF\n3 3 E\nFFRFFRFRRF\n";
//! let finished = SimulationRunner::new().run(input).unwrap();
//!
//! let report: Vec<String> = finished.iter().map(ToString::to_string).collect();
//! assert_eq!(report, ["1 3 N", "5 1 E"]);
//! ```

pub mod error;
pub mod lawn;
pub mod mower;
pub mod runner;

pub use error::*;
pub use lawn::*;
pub use mower::*;
pub use runner::*;

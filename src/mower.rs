//! Mower state and the per-instruction transition rules.

use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A cardinal heading, cyclically ordered clockwise N → E → S → W → N.
///
/// Header letters outside the four cardinals are kept as [`Heading::Unknown`].
/// A mower with an unknown heading never turns and never moves; the runner
/// preserves that behaviour instead of rejecting the header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Heading {
    /// Facing `+Y`.
    North,
    /// Facing `+X`.
    East,
    /// Facing `-Y`.
    South,
    /// Facing `-X`.
    West,
    /// Any other header letter. Turns and moves leave the mower untouched.
    Unknown(char),
}

impl Heading {
    /// Maps a single header letter. Never fails; see [`Heading::Unknown`].
    pub fn from_char(value: char) -> Heading {
        match value {
            'N' => Heading::North,
            'E' => Heading::East,
            'S' => Heading::South,
            'W' => Heading::West,
            other => Heading::Unknown(other),
        }
    }

    /// The heading one quarter-turn clockwise.
    pub fn clockwise(self) -> Heading {
        match self {
            Heading::North => Heading::East,
            Heading::East => Heading::South,
            Heading::South => Heading::West,
            Heading::West => Heading::North,
            unknown => unknown,
        }
    }

    /// The heading one quarter-turn counter-clockwise.
    pub fn counter_clockwise(self) -> Heading {
        match self {
            Heading::North => Heading::West,
            Heading::West => Heading::South,
            Heading::South => Heading::East,
            Heading::East => Heading::North,
            unknown => unknown,
        }
    }

    /// Unit step along this heading. Zero for [`Heading::Unknown`], so a
    /// forward move on an unknown heading goes nowhere.
    pub fn axis(self) -> IVec2 {
        match self {
            Heading::North => IVec2::Y,
            Heading::East => IVec2::X,
            Heading::South => IVec2::NEG_Y,
            Heading::West => IVec2::NEG_X,
            Heading::Unknown(_) => IVec2::ZERO,
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Heading::North => 'N',
            Heading::East => 'E',
            Heading::South => 'S',
            Heading::West => 'W',
            Heading::Unknown(other) => *other,
        };
        write!(f, "{}", letter)
    }
}

/// A single instruction character, consumed left-to-right from a programme
/// line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// Quarter-turn counter-clockwise (`L`).
    TurnLeft,
    /// Quarter-turn clockwise (`R`).
    TurnRight,
    /// One step along the current heading (`F`).
    Forward,
    /// No-op: character has no registered meaning.
    Ignore,
}

impl Instruction {
    /// Maps an instruction character. Unrecognised characters become
    /// [`Instruction::Ignore`] rather than an error.
    pub fn from_char(value: char) -> Instruction {
        match value {
            'L' => Instruction::TurnLeft,
            'R' => Instruction::TurnRight,
            'F' => Instruction::Forward,
            _ => Instruction::Ignore,
        }
    }
}

/// The state of a single mower: grid position plus heading.
///
/// Positions are unbounded here. Lawn containment is enforced by the runner
/// after each forward step, not by the mower itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mower {
    /// Current grid position.
    pub position: IVec2,

    /// Current facing direction.
    pub heading: Heading,
}

impl Mower {
    /// Creates a mower at `(x, y)` facing `heading`.
    pub fn new(x: i32, y: i32, heading: Heading) -> Mower {
        Mower {
            position: IVec2::new(x, y),
            heading,
        }
    }

    /// Rotates one quarter-turn clockwise.
    pub fn turn_right(&mut self) {
        self.heading = self.heading.clockwise();
    }

    /// Rotates one quarter-turn counter-clockwise.
    pub fn turn_left(&mut self) {
        self.heading = self.heading.counter_clockwise();
    }

    /// Advances one step along the current heading.
    pub fn move_forward(&mut self) {
        self.position += self.heading.axis();
    }

    /// Exact inverse of [`move_forward`](Self::move_forward); the heading is
    /// unchanged. Only ever issued directly after a forward step, to revert
    /// one that left the lawn.
    pub fn move_backward(&mut self) {
        self.position -= self.heading.axis();
    }

    /// Applies a single instruction. [`Instruction::Ignore`] does nothing.
    pub fn apply(&mut self, instruction: Instruction) {
        match instruction {
            Instruction::TurnLeft => self.turn_left(),
            Instruction::TurnRight => self.turn_right(),
            Instruction::Forward => self.move_forward(),
            Instruction::Ignore => {}
        }
    }
}

impl fmt::Display for Mower {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.position.x, self.position.y, self.heading)
    }
}

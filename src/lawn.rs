//! The bounded rectangular surface mowers operate on.

use crate::error::SimulationError;
use glam::IVec2;

/// A rectangular lawn covering the grid points `(0, 0) ..= (width, height)`.
///
/// Both bounds are inclusive, so a `5 x 5` lawn has 36 legal positions and a
/// `0 x 0` lawn is the single point at the origin. The constructor is the
/// only way to obtain a `Lawn`, so a value with a negative bound cannot
/// exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lawn {
    width: i32,
    height: i32,
}

impl Lawn {
    /// Creates a lawn with the given inclusive bounds.
    ///
    /// Returns [`SimulationError::InvalidLawn`] if either bound is negative.
    pub fn new(width: i32, height: i32) -> Result<Lawn, SimulationError> {
        if width < 0 || height < 0 {
            return Err(SimulationError::InvalidLawn { width, height });
        }
        Ok(Lawn { width, height })
    }

    /// Inclusive upper bound on the x axis.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Inclusive upper bound on the y axis.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether `position` lies on the lawn. Both edges count as inside.
    pub fn contains(&self, position: IVec2) -> bool {
        (0..=self.width).contains(&position.x) && (0..=self.height).contains(&position.y)
    }
}

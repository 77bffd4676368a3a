use serde::{Deserialize, Serialize};
use treasure_hunt_core::{CellCoord, GridDimensions, HeadingPolicy};
use treasure_hunt_world::GridError;

use crate::BootstrapError;

/// Board layout and exploration settings for a single run.
///
/// Every field is optional in TOML; missing fields fall back to the classic
/// eight by six board.
///
/// ```toml
/// width = 8
/// height = 6
/// start = { x = 2, y = 2 }
/// obstacles = [{ x = 3, y = 2 }, { x = 5, y = 3 }]
/// heading_policy = "strict"
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Number of columns, boundary included.
    pub width: u32,
    /// Number of rows, boundary included.
    pub height: u32,
    /// Cell the player starts on.
    pub start: CellCoord,
    /// Custom obstacles written on top of the walled grid.
    pub obstacles: Vec<CellCoord>,
    /// Heading switch strategy used by the explorer.
    pub heading_policy: HeadingPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 8,
            height: 6,
            start: CellCoord::new(2, 2),
            obstacles: vec![
                CellCoord::new(3, 2),
                CellCoord::new(3, 4),
                CellCoord::new(4, 4),
                CellCoord::new(5, 4),
                CellCoord::new(5, 3),
                CellCoord::new(7, 3),
            ],
            heading_policy: HeadingPolicy::default(),
        }
    }
}

impl Config {
    /// Parses a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, BootstrapError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Grid size described by this configuration.
    #[must_use]
    pub const fn dimensions(&self) -> GridDimensions {
        GridDimensions::new(self.width, self.height)
    }

    /// Checks that the grid size is supported and that the start lies inside it.
    ///
    /// Obstacles are checked when the grid is built.
    pub fn validate(&self) -> Result<(), BootstrapError> {
        let dimensions = self.dimensions();
        if !dimensions.is_supported() {
            return Err(GridError::InvalidDimensions {
                width: self.width,
                height: self.height,
            }
            .into());
        }

        if !dimensions.contains(self.start) {
            return Err(GridError::OutOfBounds {
                cell: self.start,
                width: self.width,
                height: self.height,
            }
            .into());
        }

        Ok(())
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete market phase assigned from the stress index.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, Default, Debug, Serialize, Deserialize, strum_macros::EnumIter,
)]
pub enum RegimeLabel {
    #[default]
    Stable,
    Volatile,
    Crisis,
}

impl RegimeLabel {
    /// Numeric level used by the regime timeline chart (1, 2, 3).
    pub fn timeline_value(&self) -> u8 {
        match self {
            RegimeLabel::Stable => 1,
            RegimeLabel::Volatile => 2,
            RegimeLabel::Crisis => 3,
        }
    }
}

impl fmt::Display for RegimeLabel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RegimeLabel::Stable => write!(f, "Stable"),
            RegimeLabel::Volatile => write!(f, "Volatile"),
            RegimeLabel::Crisis => write!(f, "Crisis"),
        }
    }
}

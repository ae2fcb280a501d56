use super::view::ButtonId;
use crate::navigator::Route;

/// A discrete user action
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    ButtonPressed(ButtonId),
    TextChanged(String),
}

/// What applying an intent did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Control absent or disabled, or nothing to change
    Ignored,
    /// Screen state changed, route unchanged
    Updated,
    Navigated(Route),
}

impl Outcome {
    pub fn is_ignored(&self) -> bool {
        matches!(self, Outcome::Ignored)
    }
}

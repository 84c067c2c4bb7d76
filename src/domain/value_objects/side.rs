//! Side value object - which endpoint wins an unresolvable conflict

use serde::Serialize;
use std::fmt;

/// One of the two `sync` endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;

    #[test]
    fn parses_only_left_and_right() {
        assert_eq!(Side::from_str("left", false), Ok(Side::Left));
        assert_eq!(Side::from_str("right", false), Ok(Side::Right));
        assert!(Side::from_str("mid", false).is_err());
    }
}

use core::fmt::{Display, Formatter, Result as FmtResult};
use std::error::Error;

/// Errors from the direct accessor surface of an inline style.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StyleError {
    /// The name is not an accessor of the style's property catalog.
    UnknownProperty(String),
}

impl Display for StyleError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::UnknownProperty(name) => write!(formatter, "unknown style property: {name}"),
        }
    }
}

impl Error for StyleError {}

//! Coordinator lookup errors
//!
//! None of these ever reach the user. Event handlers log them at debug level
//! and leave state untouched.

use thiserror::Error;

use super::selection::GroupKind;

/// Why a coordinator lookup did not resolve
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    #[error("no view registered as '{0}'")]
    UnknownView(String),

    #[error("'{item}' is not a member of the {group} group")]
    UnknownItem { group: GroupKind, item: String },

    #[error("no card registered as '{0}'")]
    UnknownCard(String),

    #[error("{0} is not present in the layout")]
    MissingElement(&'static str),

    #[error("layout registers no views")]
    NoViews,
}

/*
 * Error Module
 *
 * Errors that can stop the visualization before the first frame is shown.
 * Once a generator has been built, generating and drawing frames cannot fail.
 */

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GalaxyError {
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("cannot open display window: {0}")]
    Window(String),
}

impl GalaxyError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        GalaxyError::InvalidParameter { name, reason: reason.into() }
    }
}

pub type Result<T> = std::result::Result<T, GalaxyError>;

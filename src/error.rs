// SPDX-License-Identifier: MPL-2.0
use crate::toast::ToastId;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    /// The host surface rejected markup, an element handle or a selector.
    #[error("Surface Error: {0}")]
    Surface(String),

    /// `show` was called on an instance that already went through its lifecycle.
    #[error("Toast {0} has already been shown")]
    AlreadyShown(ToastId),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

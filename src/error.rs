use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Broker API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Invalid station: {0}")]
    InvalidStation(String),

    #[error("Invalid user: {0}")]
    InvalidUser(String),
}

pub type Result<T> = std::result::Result<T, ConsoleError>;

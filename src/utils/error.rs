use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("{message}")]
    Transport { message: String },

    #[error("{0}")]
    Decode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl From<reqwest::Error> for BridgeError {
    fn from(err: reqwest::Error) -> Self {
        BridgeError::Transport {
            message: error_chain(&err),
        }
    }
}

impl BridgeError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            BridgeError::Transport { .. } => {
                "Check network connectivity and that the similarity endpoint is reachable"
            }
            BridgeError::Decode(_) => "The similarity endpoint did not return valid JSON",
            BridgeError::Io(_) => "Check that the file exists and is readable",
            BridgeError::Config { .. } => "Check the configuration file syntax",
            BridgeError::InvalidConfigValue { .. } => {
                "Fix the offending value on the command line or in the config file"
            }
        }
    }
}

/// Joins an error and all of its sources with `": "`.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

pub type Result<T> = std::result::Result<T, BridgeError>;

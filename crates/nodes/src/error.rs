use std::error::Error as StdError;

/// Crate-wide result type for node execution.
pub type Result<T> = std::result::Result<T, Error>;

/// Typed node errors, checked by kind.
///
/// The enum is closed on purpose: failures a capability already typed
/// propagate unchanged through `?`, and every foreign error must be wrapped
/// into `Operation` with its cause preserved as the source. All kinds are
/// fatal for the current batch; the host owns user-visible presentation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Credentials are missing or incomplete.
    #[error("authentication failed: {message}")]
    Authentication { message: String },

    /// The remote API answered but reported failure.
    #[error("remote api error: {description}")]
    Api { description: String },

    /// Any other failure (transport, serialization, programming error),
    /// wrapped with the original error kept as source.
    #[error("{context}: {source}")]
    Operation {
        context: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl Error {
    #[must_use]
    pub fn authentication(message: impl std::fmt::Display) -> Self {
        Self::Authentication {
            message: message.to_string(),
        }
    }

    #[must_use]
    pub fn api(description: impl std::fmt::Display) -> Self {
        Self::Api {
            description: description.to_string(),
        }
    }

    #[must_use]
    pub fn operation(
        context: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self::Operation {
            context: context.into(),
            source: Box::new(source),
        }
    }
}

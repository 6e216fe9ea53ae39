//! Unified error types for the storefront.
//!
//! Every fallible operation in the crate returns [`Result`]. The variants mirror
//! the three failure classes the UI distinguishes: transport failures,
//! well-formed but unsuccessful responses, and lookups that found nothing.

use thiserror::Error;

/// All errors the storefront can produce.
#[derive(Debug, Error)]
pub enum Error {
    /// Could not reach the store API, or the connection dropped mid-request.
    #[error("Network error: {message}")]
    Network {
        /// Transport-level description of the failure
        message: String,
    },

    /// The store API answered with `success: false`.
    #[error("Request unsuccessful: {message}")]
    Unsuccessful {
        /// Message returned by the server, or a generic fallback
        message: String,
    },

    /// A product id that is not part of the current catalog.
    #[error("Product not found: {id}")]
    ProductNotFound {
        /// The missing product id
        id: i64,
    },

    /// A product id with no line in the cart.
    #[error("Item not found in cart: {id}")]
    CartLineNotFound {
        /// The product id that has no cart line
        id: i64,
    },

    /// Configuration could not be read or parsed.
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// A response body that is not the JSON shape we expect.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Terminal or file I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        Self::Network {
            message: value.to_string(),
        }
    }
}

impl Error {
    /// Builds an [`Error::Unsuccessful`] from an optional server message,
    /// falling back to `fallback` when the server sent none.
    #[must_use]
    pub fn unsuccessful(message: Option<String>, fallback: &str) -> Self {
        Self::Unsuccessful {
            message: message.unwrap_or_else(|| fallback.to_string()),
        }
    }

    /// True for failures where the server was never reached.
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. })
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsuccessful_prefers_server_message() {
        let err = Error::unsuccessful(Some("Product not found".to_string()), "Failed");
        assert!(matches!(err, Error::Unsuccessful { ref message } if message == "Product not found"));
    }

    #[test]
    fn test_unsuccessful_falls_back() {
        let err = Error::unsuccessful(None, "Failed to add to cart");
        assert_eq!(
            err.to_string(),
            "Request unsuccessful: Failed to add to cart"
        );
        assert!(!err.is_network());
    }

    #[test]
    fn test_network_error_display() {
        let err = Error::Network {
            message: "connection refused".to_string(),
        };
        assert!(err.is_network());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }
}

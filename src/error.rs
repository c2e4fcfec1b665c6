use thiserror::Error;

/// Why the catalog could not be loaded. Every variant degrades to an empty catalog.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("browser window is unavailable")]
    NoWindow,

    #[error("catalog request failed: {0}")]
    Network(String),

    #[error("catalog request returned HTTP {0}")]
    Status(u16),

    #[error("catalog payload could not be decoded: {0}")]
    Decode(String),

    #[error("catalog payload was empty")]
    MissingData,
}

/// Rejected order transitions. The message is shown to the user as-is.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum OrderError {
    #[error("Your cart is empty.")]
    EmptyCart,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_messages() {
        assert_eq!(
            CatalogError::Status(404).to_string(),
            "catalog request returned HTTP 404"
        );
        assert_eq!(
            CatalogError::Network("TypeError: Failed to fetch".to_string()).to_string(),
            "catalog request failed: TypeError: Failed to fetch"
        );
        assert_eq!(CatalogError::MissingData.to_string(), "catalog payload was empty");
    }

    #[test]
    fn test_empty_cart_message_is_user_facing() {
        assert_eq!(OrderError::EmptyCart.to_string(), "Your cart is empty.");
    }
}

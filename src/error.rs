//! Input validation errors.

/// Raised for any malformed `address/prefix` input.
///
/// Always recoverable: the message is meant to be shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// No `/` between address and prefix.
    #[error("Enter IP in format: 192.168.1.0/26")]
    MissingSeparator,

    /// Prefix is not a whole number.
    #[error("Invalid IP format or prefix: '{0}' is not a whole number")]
    InvalidPrefix(String),

    /// Prefix is a number but outside the accepted range.
    #[error("Prefix must be between {min} and {max}, got {value}.")]
    PrefixOutOfRange { value: i64, min: u8, max: u8 },

    /// Address is not a dotted quad with octets 0-255.
    #[error("Invalid IP format or prefix: '{0}' is not a valid IPv4 address")]
    InvalidAddress(String),
}

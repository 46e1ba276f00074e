//! Input validation errors.

use core::fmt;

/// Error returned when an argument is rejected at call entry.
///
/// All validation happens before any cipher work; once keystream
/// generation has started the transform cannot fail.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InvalidArgument {
    /// The message or ciphertext was empty.
    ///
    /// Empty input is rejected instead of producing empty output. This is
    /// an API contract, not a cryptographic requirement.
    EmptyMessage,
    /// The nonce was not 8, 12, or 16 bytes long.
    NonceLength(usize),
    /// The key was not [`KEY_SIZE`](crate::KEY_SIZE) bytes long.
    KeyLength(usize),
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidArgument::EmptyMessage => {
                f.write_str("the message or ciphertext cannot be empty")
            }
            InvalidArgument::NonceLength(n) => {
                write!(f, "invalid nonce length {}: must be 8, 12, or 16 bytes", n)
            }
            InvalidArgument::KeyLength(n) => {
                write!(f, "invalid key length {}: must be 32 bytes", n)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidArgument {}

//! Unified error type for the parlor meta-crate.

use parlor_coordinator::CoordinatorError;
use parlor_games::ConfigError;
use parlor_protocol::EventError;
use parlor_registry::RegistryError;

/// Top-level error that wraps all crate-specific errors.
///
/// When embedding through the `parlor` meta-crate, you deal with this
/// single type instead of importing errors from each sub-crate. The
/// `#[from]` attributes auto-generate `From` impls, so `?` converts
/// sub-crate errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum ParlorError {
    /// A coordinated operation failed (includes persistence failures).
    #[error(transparent)]
    Coordinator(#[from] CoordinatorError),

    /// A direct registry operation was refused.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// An event tag failed to parse or transition.
    #[error(transparent)]
    Event(#[from] EventError),

    /// A game config failed to decode or validate.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A notification payload failed to serialize.
    #[error("notification encode failed: {0}")]
    Encode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use parlor_protocol::SessionId;

    #[test]
    fn test_from_registry_error() {
        let err = RegistryError::UnknownSession(SessionId(1));
        let parlor_err: ParlorError = err.into();
        assert!(matches!(parlor_err, ParlorError::Registry(_)));
        assert!(parlor_err.to_string().contains("G-1"));
    }

    #[test]
    fn test_from_coordinator_error() {
        let err = CoordinatorError::UnknownSession(SessionId(2));
        let parlor_err: ParlorError = err.into();
        assert!(matches!(parlor_err, ParlorError::Coordinator(_)));
    }

    #[test]
    fn test_from_event_error() {
        let err = EventError::NotAGame;
        let parlor_err: ParlorError = err.into();
        assert!(matches!(parlor_err, ParlorError::Event(_)));
    }
}

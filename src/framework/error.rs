//! # Framework Errors
//!
//! Failures of the mailbox plumbing itself, plus a wrapper carrying whatever error the session
//! entity returned.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the entity's own error type from an [`FrameworkError::EntityError`].
    ///
    /// Anything else (including an entity error of a different type) is handed back unchanged.
    pub fn downcast_entity<E>(self) -> Result<E, FrameworkError>
    where
        E: std::error::Error + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => inner
                .downcast::<E>()
                .map(|e| *e)
                .map_err(FrameworkError::EntityError),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, thiserror::Error)]
    #[error("out of rice")]
    struct OutOfRice;

    #[derive(Debug, thiserror::Error)]
    #[error("something else")]
    struct SomethingElse;

    #[test]
    fn downcast_recovers_entity_error() {
        let err = FrameworkError::EntityError(Box::new(OutOfRice));
        assert_eq!(err.downcast_entity::<OutOfRice>().unwrap(), OutOfRice);
    }

    #[test]
    fn downcast_leaves_other_errors_alone() {
        let err = FrameworkError::EntityError(Box::new(SomethingElse));
        let back = err.downcast_entity::<OutOfRice>().unwrap_err();
        assert_eq!(back.to_string(), "Entity error: something else");

        let closed = FrameworkError::ActorClosed.downcast_entity::<OutOfRice>();
        assert!(matches!(closed, Err(FrameworkError::ActorClosed)));
    }
}

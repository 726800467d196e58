//! # Framework Errors
//!
//! Errors raised by the actor plumbing itself, as opposed to the per-entity
//! errors each store defines.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("No ids left to assign")]
    IdsExhausted,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the entity's own error type from an [`FrameworkError::EntityError`].
    ///
    /// Returns the original error untouched when it is a different variant or
    /// carries an error of another type.
    pub fn downcast_entity<E>(self) -> Result<E, Self>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
                Ok(e) => Ok(*e),
                Err(other) => Err(FrameworkError::EntityError(other)),
            },
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error, PartialEq)]
    #[error("boom")]
    struct Boom;

    #[test]
    fn downcast_entity_recovers_typed_error() {
        let err = FrameworkError::EntityError(Box::new(Boom));
        assert_eq!(err.downcast_entity::<Boom>().unwrap(), Boom);
    }

    #[test]
    fn downcast_entity_passes_other_variants_through() {
        let err = FrameworkError::NotFound("cart_9".into());
        assert!(matches!(
            err.downcast_entity::<Boom>(),
            Err(FrameworkError::NotFound(id)) if id == "cart_9"
        ));
    }
}

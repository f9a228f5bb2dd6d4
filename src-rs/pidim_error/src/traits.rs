use crate::Context;

/// Trait for types that can be converted to pidim error messages.
///
/// This trait provides a standardized interface for error and advisory types
/// to expose their message and associated context, so that every consumer
/// (terminal output, collected reports) displays them consistently.
pub trait AsPidimError {
    /// Returns the primary message.
    ///
    /// This should be a concise description of what went wrong, clear enough
    /// to understand without additional context.
    fn message(&self) -> String;

    /// Returns additional context information.
    ///
    /// Returns an empty vector if no context is available.
    fn context(&self) -> Vec<Context> {
        vec![]
    }
}

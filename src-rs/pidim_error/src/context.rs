/// Supplementary information attached to an error or advisory.
///
/// Context is displayed after the primary message and helps the reader
/// understand what went wrong and how to resolve it.
///
/// # Examples
///
/// ```rust
/// use pidim_error::Context;
///
/// let note = Context::Note("the matrix contains the variables (F, k, x)".to_string());
/// let help = Context::Help("build a new matrix that includes `m`".to_string());
///
/// let contexts = vec![note, help];
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Context {
    /// Additional information about the error.
    ///
    /// Notes describe the state that led to the error, such as the set of
    /// variables a request was checked against.
    Note(String),

    /// A suggestion for resolving the error.
    Help(String),
}

/// Errors reported while querying a [`LayoutExtractor`](crate::LayoutExtractor).
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    /// No tracked field has this Rust name or emitted symbol.
    #[error("`{structure}` has no tracked field named `{name}`")]
    UnknownField {
        /// The structure that was searched.
        structure: &'static str,
        /// The name that was looked up.
        name: String,
    },
}

/// A convenience alias for results in this crate.
pub type Result<T, E = LayoutError> = core::result::Result<T, E>;

//! Error types for the application.
//!
//! - [`ContextError`] - State consumed outside its initialized lifetime
//! - [`ContentError`] - Embedded profile data failed to load

use thiserror::Error;

/// Precondition violation: a consumer looked up shared state before it was
/// provided, or outside the subtree it was provided to.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextError {
    #[error("{context} accessed before initialization; provide it at the application root")]
    Uninitialized { context: &'static str },
}

impl ContextError {
    /// Build the error for a missing context of type `T`.
    pub fn missing<T>() -> Self {
        let full = std::any::type_name::<T>();
        let context = full.rsplit("::").next().unwrap_or(full);
        Self::Uninitialized { context }
    }
}

/// Profile data errors.
#[derive(Debug, Clone, Error)]
pub enum ContentError {
    /// The TOML document could not be parsed into a profile.
    #[error("invalid profile data: {0}")]
    Parse(#[from] toml::de::Error),
    /// A required section is present but empty.
    #[error("profile section `{0}` must not be empty")]
    EmptySection(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AppContext;

    #[test]
    fn test_missing_names_short_type() {
        let err = ContextError::missing::<AppContext>();
        assert_eq!(
            err,
            ContextError::Uninitialized {
                context: "AppContext"
            }
        );
        assert!(err.to_string().starts_with("AppContext accessed before initialization"));
    }
}

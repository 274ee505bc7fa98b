use std::fmt::{Display, Formatter};

/// Error raised while wiring schema fragments into a
/// [`SchemaRegistry`](crate::registry::SchemaRegistry). A fragment that does
/// not compile as a JSON schema is a wiring bug upstream and is surfaced
/// before any document is built.
#[derive(Debug)]
pub enum RegistryError {
    InvalidFragment(String, String),
}

impl RegistryError {
    pub(crate) fn invalid_fragment<T>(fragment_name: &str, cause: &T) -> Self
    where
        T: ToString + ?Sized,
    {
        RegistryError::InvalidFragment(fragment_name.to_string(), cause.to_string())
    }
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::InvalidFragment(fragment_name, cause) => {
                write!(
                    f,
                    "Schema fragment '{}' is not a valid JSON schema: {}",
                    fragment_name, cause
                )
            }
        }
    }
}

impl std::error::Error for RegistryError {}

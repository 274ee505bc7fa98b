/// Service identification values pulled from live configuration at build
/// time. The builder copies these into the document's info block; changing
/// the configuration afterwards does not affect an already-built document.
#[derive(Debug, Clone)]
pub struct ServiceMetadata {
    pub title: String,
    pub description: String,
}

impl ServiceMetadata {
    pub fn new<T>(title: &T, description: &T) -> Self
    where
        T: ToString + ?Sized,
    {
        ServiceMetadata {
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

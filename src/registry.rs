use crate::error::RegistryError;
use serde_json::Value;
use std::sync::Arc;

/// Non-owning handle to a schema fragment owned by the registry. Documents
/// reference fragments through these handles and never copy them; a fragment
/// stays alive for as long as any handle to it exists.
pub type SchemaFragment = Arc<Value>;

const ROOT_FRAGMENT: &str = "root-content";
const CONFORMANCE_FRAGMENT: &str = "conformance-classes";
const COLLECTION_FRAGMENT: &str = "collection-info";
const COLLECTIONS_FRAGMENT: &str = "collections-info";

/// Holds the four domain schema fragments the description document binds to
/// its responses. Fragments are constructed and populated elsewhere; the
/// registry only checks that each compiles as a JSON schema before handing
/// out handles. All four fragments are required at construction, so a missing
/// fragment cannot be represented.
pub struct SchemaRegistry {
    root: SchemaFragment,
    conformance: SchemaFragment,
    collection: SchemaFragment,
    collections: SchemaFragment,
}

impl SchemaRegistry {
    pub fn new(
        root: Value,
        conformance: Value,
        collection: Value,
        collections: Value,
    ) -> Result<Self, RegistryError> {
        Self::compile_check(ROOT_FRAGMENT, &root)?;
        Self::compile_check(CONFORMANCE_FRAGMENT, &conformance)?;
        Self::compile_check(COLLECTION_FRAGMENT, &collection)?;
        Self::compile_check(COLLECTIONS_FRAGMENT, &collections)?;
        Ok(SchemaRegistry {
            root: Arc::new(root),
            conformance: Arc::new(conformance),
            collection: Arc::new(collection),
            collections: Arc::new(collections),
        })
    }

    /// Compile the fragment once and discard the validator. A fragment that
    /// does not compile indicates a wiring bug upstream and fails the whole
    /// registry construction.
    fn compile_check(fragment_name: &str, fragment: &Value) -> Result<(), RegistryError> {
        match jsonschema::validator_for(fragment) {
            Ok(_) => Ok(()),
            Err(e) => Err(RegistryError::invalid_fragment(fragment_name, &e)),
        }
    }

    pub fn root_content(&self) -> SchemaFragment {
        Arc::clone(&self.root)
    }

    pub fn conformance_classes(&self) -> SchemaFragment {
        Arc::clone(&self.conformance)
    }

    pub fn collection_info(&self) -> SchemaFragment {
        Arc::clone(&self.collection)
    }

    pub fn collections_info(&self) -> SchemaFragment {
        Arc::clone(&self.collections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object_schema(property: &str) -> Value {
        json!({
            "type": "object",
            "properties": {
                property: { "type": "string" }
            }
        })
    }

    #[test]
    fn test_registry_accepts_valid_fragments() {
        let registry = SchemaRegistry::new(
            object_schema("links"),
            object_schema("conformsTo"),
            object_schema("name"),
            object_schema("collections"),
        );
        assert!(registry.is_ok());
    }

    #[test]
    fn test_registry_rejects_malformed_fragment() {
        let result = SchemaRegistry::new(
            json!({ "type": "not-a-real-type" }),
            object_schema("conformsTo"),
            object_schema("name"),
            object_schema("collections"),
        );
        match result {
            Err(RegistryError::InvalidFragment(fragment_name, _)) => {
                assert_eq!(fragment_name, "root-content");
            }
            _ => panic!("Expected RegistryError::InvalidFragment"),
        }
    }

    #[test]
    fn test_handles_share_one_fragment() {
        let registry = SchemaRegistry::new(
            object_schema("links"),
            object_schema("conformsTo"),
            object_schema("name"),
            object_schema("collections"),
        )
        .unwrap();
        assert!(Arc::ptr_eq(&registry.root_content(), &registry.root_content()));
    }
}

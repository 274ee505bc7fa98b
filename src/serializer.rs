use serde::Serialize;

/// Substituted when the document graph cannot be encoded, so callers always
/// receive syntactically valid JSON.
const FALLBACK_DOCUMENT: &[u8] = b"{}";

/// Encodes the document graph, including every referenced schema fragment, to
/// canonical JSON bytes. Never fails the caller: if the encoder rejects the
/// graph the fallback bytes `{}` are returned and the cause is logged.
pub fn to_json_bytes<T>(document: &T) -> Vec<u8>
where
    T: Serialize,
{
    match serde_json::to_vec(document) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::error!(
                "Failed to serialize api description document, substituting '{{}}': {}",
                e
            );
            FALLBACK_DOCUMENT.to_vec()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serializer;
    use serde_json::json;

    struct Unencodable;

    impl Serialize for Unencodable {
        fn serialize<S>(&self, _serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            Err(serde::ser::Error::custom("unencodable value"))
        }
    }

    #[test]
    fn test_success_returns_encoded_bytes() {
        let bytes = to_json_bytes(&json!({ "openapi": "3.0.0" }));
        assert_eq!(bytes, br#"{"openapi":"3.0.0"}"#);
    }

    #[test]
    fn test_serialization_is_idempotent() {
        let value = json!({
            "openapi": "3.0.0",
            "paths": { "/": {}, "/api": {} }
        });
        assert_eq!(to_json_bytes(&value), to_json_bytes(&value));
    }

    #[test]
    fn test_failure_substitutes_fallback_bytes() {
        assert_eq!(to_json_bytes(&Unencodable), b"{}");
    }

    #[test]
    fn test_failure_in_nested_fragment_substitutes_fallback_bytes() {
        #[derive(Serialize)]
        struct Wrapper {
            schema: Unencodable,
        }
        let bytes = to_json_bytes(&Wrapper { schema: Unencodable });
        assert_eq!(bytes, b"{}");
    }
}

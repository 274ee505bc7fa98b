use crate::registry::SchemaFragment;
use serde::Serialize;
use serde_json::{Value, json};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// The full in-memory API description graph before serialization.
///
/// Paths are kept in a `BTreeMap` so that key order, and therefore the
/// serialized byte sequence, is stable across repeated serializations of the
/// same document.
#[derive(Debug, Serialize)]
pub struct Document {
    pub openapi: String,
    pub info: Info,
    pub paths: BTreeMap<String, PathItem>,
}

#[derive(Debug, Serialize)]
pub struct Info {
    pub title: String,
    pub description: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<License>,
}

#[derive(Debug, Serialize)]
pub struct License {
    pub name: String,
    pub url: String,
}

/// The set of operations bound to one URL template. This document version
/// models a single GET operation per path.
#[derive(Debug, Serialize)]
pub struct PathItem {
    pub summary: String,
    pub description: String,
    pub get: Operation,
}

#[derive(Debug, Serialize)]
pub struct Operation {
    #[serde(rename = "operationId")]
    pub operation_id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    pub responses: BTreeMap<String, Response>,
}

impl Operation {
    /// `(location, name)` pairs must be unique within one operation's
    /// parameter list.
    pub fn has_duplicate_parameters(&self) -> bool {
        for (index, parameter) in self.parameters.iter().enumerate() {
            if self.parameters[index + 1..]
                .iter()
                .any(|other| other.name == parameter.name && other.location == parameter.location)
            {
                return true;
            }
        }
        false
    }
}

#[derive(Debug, Serialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "in")]
    pub location: ParameterLocation,
    pub description: String,
    pub required: bool,
    #[serde(rename = "allowEmptyValue")]
    pub allow_empty_value: bool,
    pub schema: SchemaRef,
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    Path,
    Query,
    Header,
}

impl Display for ParameterLocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ParameterLocation::Path => write!(f, "path"),
            ParameterLocation::Query => write!(f, "query"),
            ParameterLocation::Header => write!(f, "header"),
        }
    }
}

/// One response is either a reference to an externally hosted schema document
/// or inline content keyed by media type. The enum makes it impossible to
/// populate both forms at once.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Response {
    Reference {
        #[serde(rename = "$ref")]
        reference: String,
    },
    Content {
        content: BTreeMap<String, MediaType>,
    },
}

impl Response {
    pub fn external(reference: &str) -> Self {
        Response::Reference {
            reference: reference.to_string(),
        }
    }

    /// Inline `application/json` content bound to the given schema.
    pub fn json_content(schema: SchemaRef) -> Self {
        let mut content = BTreeMap::new();
        content.insert("application/json".to_string(), MediaType { schema });
        Response::Content { content }
    }
}

#[derive(Debug, Serialize)]
pub struct MediaType {
    pub schema: SchemaRef,
}

/// A schema bound into the document: either an inline value owned by the
/// document itself, or a non-owning handle to a fragment owned by the
/// [`SchemaRegistry`](crate::registry::SchemaRegistry). Shared fragments are
/// never copied; the handle keeps the registry's fragment alive for as long
/// as any document references it.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum SchemaRef {
    Inline(Value),
    Shared(SchemaFragment),
}

impl SchemaRef {
    /// Inline schema for a plain string value.
    pub fn string() -> Self {
        SchemaRef::Inline(json!({ "type": "string" }))
    }
}

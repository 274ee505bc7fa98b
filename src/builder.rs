use crate::config::ServiceMetadata;
use crate::document::{
    Document, Info, License, Operation, Parameter, ParameterLocation, PathItem, Response, SchemaRef,
};
use crate::registry::SchemaRegistry;
use std::collections::BTreeMap;

/// OpenAPI object model version emitted at the top of the document.
const OPENAPI_VERSION: &str = "3.0.0";

/// Version of this description document format. Owned by the builder and
/// independent of any service or configuration versioning.
const DOCUMENT_VERSION: &str = "0.0.1";

const LICENSE_NAME: &str = "MIT";
const LICENSE_URL: &str = "http://opensource.org/licenses/MIT";

pub const ROOT_PATH: &str = "/";
pub const API_PATH: &str = "/api";
pub const CONFORMANCE_PATH: &str = "/conformance";
pub const COLLECTIONS_PATH: &str = "/collections";
pub const COLLECTION_PATH: &str = "/collections/{name}";

pub const GET_ROOT: &str = "getRoot";
pub const GET_API: &str = "getAPI";
pub const GET_CONFORMANCE: &str = "getConformance";
pub const GET_COLLECTIONS_METADATA: &str = "getCollectionsMetaData";
pub const GET_COLLECTION_METADATA: &str = "getCollectionMetaData";

const STATUS_OK: &str = "200";
const NAME_PARAMETER: &str = "name";
const NAME_PARAMETER_DESCRIPTION: &str = "Name of collection to retrieve metadata for.";

// There is no official JSON schema for the OpenAPI 3 object model itself, so
// the /api response points at the closest published description as a
// citation rather than binding inline content.
const API_DEFINITION_SCHEMA_REF: &str =
    "https://github.com/googleapis/gnostic/blob/openapi-v3.0.0-rc2/OpenAPIv3/openapi-3.0.json";

/// Assembles the description document from the current service metadata and
/// the registry's schema fragments. Pure and deterministic: the same metadata
/// and the same fragment handles produce a structurally identical document.
/// Fragment handles are shared into the document, never copied.
pub fn build_document(metadata: &ServiceMetadata, registry: &SchemaRegistry) -> Document {
    let mut paths = BTreeMap::new();

    paths.insert(
        ROOT_PATH.to_string(),
        PathItem {
            summary: "top-level endpoints available".to_string(),
            description: "Root of API, all metadata & services are beneath these links".to_string(),
            get: Operation {
                operation_id: GET_ROOT.to_string(),
                parameters: Vec::new(),
                responses: ok_response(Response::json_content(SchemaRef::Shared(
                    registry.root_content(),
                ))),
            },
        },
    );

    paths.insert(
        API_PATH.to_string(),
        PathItem {
            summary: "api definition".to_string(),
            description: "OpenAPI 3.0 definition of this WFS 3.0 service".to_string(),
            get: Operation {
                operation_id: GET_API.to_string(),
                parameters: Vec::new(),
                responses: ok_response(Response::external(API_DEFINITION_SCHEMA_REF)),
            },
        },
    );

    paths.insert(
        CONFORMANCE_PATH.to_string(),
        PathItem {
            summary: "Conformance classes".to_string(),
            description: "Functionality requirements this api conforms to.".to_string(),
            get: Operation {
                operation_id: GET_CONFORMANCE.to_string(),
                parameters: Vec::new(),
                responses: ok_response(Response::json_content(SchemaRef::Shared(
                    registry.conformance_classes(),
                ))),
            },
        },
    );

    paths.insert(
        COLLECTIONS_PATH.to_string(),
        PathItem {
            summary: "Feature collection metadata".to_string(),
            description: "Provides details about all feature collections served".to_string(),
            get: Operation {
                operation_id: GET_COLLECTIONS_METADATA.to_string(),
                parameters: vec![collection_name_parameter()],
                responses: ok_response(Response::json_content(SchemaRef::Shared(
                    registry.collections_info(),
                ))),
            },
        },
    );

    paths.insert(
        COLLECTION_PATH.to_string(),
        PathItem {
            summary: "Feature collection metadata".to_string(),
            description: "Provides details about the feature collection named".to_string(),
            get: Operation {
                operation_id: GET_COLLECTION_METADATA.to_string(),
                parameters: vec![collection_name_parameter()],
                responses: ok_response(Response::json_content(SchemaRef::Shared(
                    registry.collection_info(),
                ))),
            },
        },
    );

    debug_assert!(
        paths.values().all(|item| !item.get.has_duplicate_parameters()),
        "operation declares the same (location, name) parameter twice"
    );

    Document {
        openapi: OPENAPI_VERSION.to_string(),
        info: Info {
            title: metadata.title.clone(),
            description: metadata.description.clone(),
            version: DOCUMENT_VERSION.to_string(),
            license: Some(License {
                name: LICENSE_NAME.to_string(),
                url: LICENSE_URL.to_string(),
            }),
        },
        paths,
    }
}

fn ok_response(response: Response) -> BTreeMap<String, Response> {
    let mut responses = BTreeMap::new();
    responses.insert(STATUS_OK.to_string(), response);
    responses
}

/// Optional collection discriminator shared by `/collections` and
/// `/collections/{name}`. Absence or emptiness is valid input; the routing
/// layer decides how to interpret it.
fn collection_name_parameter() -> Parameter {
    Parameter {
        name: NAME_PARAMETER.to_string(),
        location: ParameterLocation::Path,
        description: NAME_PARAMETER_DESCRIPTION.to_string(),
        required: false,
        allow_empty_value: true,
        schema: SchemaRef::string(),
    }
}

//! Serialized service model document
//!
//! The document is the pre-parsed model handed over by the API-description
//! loader. It is turned into a [`crate::Service`] by the resolver, which
//! normalizes pagination metadata on the way in.

use crate::model::Shape;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Root of a service model document
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDocument {
    pub service_id: String,

    #[serde(default)]
    pub endpoint_prefix: String,

    #[serde(default)]
    pub abbreviation: String,

    #[serde(default)]
    pub full_name: String,

    #[serde(default)]
    pub filename: String,

    #[serde(default)]
    pub basefolder: String,

    /// Operations in declaration order
    #[serde(default)]
    pub operations: Vec<OperationDocument>,

    #[serde(default)]
    pub shapes: BTreeMap<String, Shape>,
}

impl ServiceDocument {
    /// Load a document from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            crate::GeneratorError::Config(format!(
                "Failed to read service model {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_json(&content)
    }

    /// Parse a document from a JSON string
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// One operation entry of a service model document
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationDocument {
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub request_class: String,

    #[serde(default)]
    pub response_class: String,

    #[serde(default)]
    pub response_code: String,

    #[serde(default)]
    pub method: String,

    #[serde(default)]
    pub request_uri: String,

    #[serde(default)]
    pub pagination: Option<PaginationDocument>,
}

/// Paginator declared for an operation
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationDocument {
    #[serde(default)]
    pub input_token: Option<TokenDescriptor>,

    #[serde(default)]
    pub limit_key: Option<TokenDescriptor>,

    #[serde(default)]
    pub output_token: Option<TokenDescriptor>,

    #[serde(default)]
    pub result_key: Option<ResultKeyDescriptor>,
}

/// Result key(s) as written in the API description
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ResultKeyDescriptor {
    Single(String),
    Many(Vec<String>),
    /// Anything else; yields no result keys
    Unrecognized(serde_json::Value),
}

/// Paging token field(s) as written in the API description
///
/// Some paginators carry several tokens (e.g. a key marker and a version
/// marker); only the first one drives the generated paging loop.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum TokenDescriptor {
    Single(String),
    Many(Vec<String>),
    /// Anything else; treated as no token
    Unrecognized(serde_json::Value),
}

impl TokenDescriptor {
    /// The token that drives pagination, empty if there is none
    pub fn primary(&self) -> &str {
        match self {
            TokenDescriptor::Single(token) => token,
            TokenDescriptor::Many(tokens) => tokens.first().map(String::as_str).unwrap_or(""),
            TokenDescriptor::Unrecognized(_) => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_key_variants() {
        let single: ResultKeyDescriptor = serde_json::from_str(r#""Buckets""#).unwrap();
        assert_eq!(single, ResultKeyDescriptor::Single("Buckets".to_string()));

        let many: ResultKeyDescriptor = serde_json::from_str(r#"["Contents", "CommonPrefixes"]"#).unwrap();
        assert_eq!(
            many,
            ResultKeyDescriptor::Many(vec!["Contents".to_string(), "CommonPrefixes".to_string()])
        );

        let other: ResultKeyDescriptor = serde_json::from_str(r#"{"path": "Items"}"#).unwrap();
        assert!(matches!(other, ResultKeyDescriptor::Unrecognized(_)));
    }

    #[test]
    fn test_parse_minimal_document() {
        let doc = ServiceDocument::from_json(
            r#"{
                "serviceId": "S3",
                "abbreviation": "Amazon S3",
                "operations": [
                    {
                        "name": "ListBuckets",
                        "method": "GET",
                        "requestUri": "/",
                        "pagination": { "outputToken": "ContinuationToken" }
                    },
                    { "name": "GetObject" }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(doc.service_id, "S3");
        assert_eq!(doc.full_name, "");
        assert_eq!(doc.operations.len(), 2);
        let pagination = doc.operations[0].pagination.as_ref().unwrap();
        assert_eq!(
            pagination.output_token.as_ref().map(TokenDescriptor::primary),
            Some("ContinuationToken")
        );
        assert!(pagination.input_token.is_none());
        assert!(pagination.result_key.is_none());
        assert!(doc.operations[1].pagination.is_none());
    }

    #[test]
    fn test_list_valued_tokens() {
        let doc = ServiceDocument::from_json(
            r#"{
                "serviceId": "S3",
                "operations": [
                    {
                        "name": "ListObjectVersions",
                        "pagination": {
                            "inputToken": ["KeyMarker", "VersionIdMarker"],
                            "limitKey": "MaxKeys",
                            "outputToken": ["NextKeyMarker", "NextVersionIdMarker"],
                            "resultKey": ["Versions", "DeleteMarkers"]
                        }
                    }
                ]
            }"#,
        )
        .unwrap();

        let pagination = doc.operations[0].pagination.as_ref().unwrap();
        assert_eq!(pagination.input_token.as_ref().unwrap().primary(), "KeyMarker");
        assert_eq!(pagination.limit_key.as_ref().unwrap().primary(), "MaxKeys");
        assert_eq!(
            pagination.output_token.as_ref().unwrap().primary(),
            "NextKeyMarker"
        );
    }

    #[test]
    fn test_token_primary() {
        assert_eq!(TokenDescriptor::Many(vec![]).primary(), "");
        assert_eq!(
            TokenDescriptor::Unrecognized(serde_json::json!({"path": "x"})).primary(),
            ""
        );
    }

    #[test]
    fn test_missing_service_id_is_an_error() {
        assert!(ServiceDocument::from_json(r#"{"operations": []}"#).is_err());
    }
}

//! In-memory service model
//!
//! A [`Service`] owns its [`Operation`]s, and each operation owns an optional
//! [`Pagination`]. Operations point back at their service through a
//! [`ServiceKey`] rather than a reference, so ownership stays tree-shaped.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Non-owning handle from an operation to the service that owns it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceKey(pub String);

/// A service and everything needed to name its generated classes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Service {
    /// Service ID (e.g., "Elasticsearch Service")
    service_id: String,

    /// Endpoint prefix (e.g., "es")
    pub endpoint_prefix: String,

    /// Service abbreviation, may be empty
    pub abbreviation: String,

    /// Full service name (e.g., "Amazon Elasticsearch Service")
    pub full_name: String,

    /// Source file the model was loaded from
    pub filename: String,

    /// Folder the generated files are written into
    pub basefolder: String,

    operations: Vec<Operation>,

    /// Shape definitions by shape name
    pub shapes: BTreeMap<String, Shape>,
}

impl Service {
    /// Create an empty service
    pub fn new(service_id: &str) -> Self {
        Self {
            service_id: service_id.to_string(),
            endpoint_prefix: String::new(),
            abbreviation: String::new(),
            full_name: String::new(),
            filename: String::new(),
            basefolder: String::new(),
            operations: Vec::new(),
            shapes: BTreeMap::new(),
        }
    }

    pub fn service_id(&self) -> &str {
        &self.service_id
    }

    /// Key that operations of this service carry as their back-reference
    pub fn key(&self) -> ServiceKey {
        ServiceKey(self.service_id.clone())
    }

    /// Append a new operation and return it for population
    pub fn new_operation(&mut self, name: &str) -> &mut Operation {
        let operation = Operation::new(name, self.key());
        self.operations.push(operation);
        let last = self.operations.len() - 1;
        &mut self.operations[last]
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Shapes alongside mutable access to the operations
    ///
    /// Lets callers fill in operation data derived from shapes without
    /// cloning the shape catalog.
    pub fn shapes_and_operations_mut(&mut self) -> (&BTreeMap<String, Shape>, &mut [Operation]) {
        (&self.shapes, &mut self.operations)
    }

    /// True if at least one operation is paginated
    pub fn has_pagination(&self) -> bool {
        self.operations.iter().any(|op| op.pagination.is_some())
    }

    /// Required member names of a shape, rendered for templates
    ///
    /// Returns an empty string when the shape is unknown, has no `required`
    /// list, or the list is empty. Otherwise the names are rendered as
    /// `[A B C]`.
    pub fn required_params(&self, shape_name: &str) -> String {
        match self
            .shapes
            .get(shape_name)
            .and_then(|shape| shape.required.as_ref())
        {
            Some(required) if !required.is_empty() => format!("[{}]", required.join(" ")),
            _ => String::new(),
        }
    }
}

/// A single API operation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Operation {
    /// Owning service
    pub service: ServiceKey,
    pub name: String,
    pub description: String,

    /// Request class hint from the API description (may be empty or stale)
    pub request_class: String,

    /// Response class hint from the API description (may be empty or stale)
    pub response_class: String,

    pub response_code: String,
    pub method: String,
    pub request_uri: String,
    pub pagination: Option<Pagination>,
}

impl Operation {
    fn new(name: &str, service: ServiceKey) -> Self {
        Self {
            service,
            name: name.to_string(),
            description: String::new(),
            request_class: String::new(),
            response_class: String::new(),
            response_code: String::new(),
            method: String::new(),
            request_uri: String::new(),
            pagination: None,
        }
    }

    /// Generated class name, e.g. "ListBucketsOperation"
    pub fn class_name(&self) -> String {
        format!("{}Operation", self.name)
    }

    /// Generated file name for the given source extension (e.g. ".cs")
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}{}", self.class_name(), extension)
    }
}

/// Pagination descriptor of an operation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub input_token: String,
    pub limit_key: String,
    pub output_token: String,

    /// Result keys in UpperCamelCase; the first one is the primary result
    pub result_keys: Vec<String>,
}

/// Shape definition from the service model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    /// Shape type (e.g., "structure", "list", "string")
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub shape_type: Option<String>,

    /// Structure members by member name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members: Option<BTreeMap<String, MemberRef>>,

    /// Names of required members
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
}

/// Reference from a structure member to its shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRef {
    pub shape: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

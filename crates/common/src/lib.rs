//! Common types and utilities for the CloudOps generator
//!
//! This crate contains the service/operation model, the serialized model
//! document, the class registry contract, naming configuration and the
//! error type shared by the resolver, generator, and CLI components.

mod config;
mod document;
mod model;
mod registry;

pub use config::{NamingConfig, DEFAULT_EXCLUDED_RESULT_MEMBERS, DEFAULT_SOURCE_EXTENSION};
pub use document::{
    OperationDocument, PaginationDocument, ResultKeyDescriptor, ServiceDocument, TokenDescriptor,
};
pub use model::{MemberRef, Operation, Pagination, Service, ServiceKey, Shape};
pub use registry::{ClassRegistry, KnownClasses};

use std::fmt;
use thiserror::Error;

/// Which side of an operation a class name belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassKind {
    Request,
    Response,
}

impl fmt::Display for ClassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassKind::Request => write!(f, "request"),
            ClassKind::Response => write!(f, "response"),
        }
    }
}

/// Errors that can occur during name resolution and generation
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("No {kind} class found for: '{operation}'")]
    NotFound { kind: ClassKind, operation: String },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl GeneratorError {
    /// Name of the operation a `NotFound` error refers to
    pub fn operation(&self) -> Option<&str> {
        match self {
            GeneratorError::NotFound { operation, .. } => Some(operation),
            _ => None,
        }
    }
}

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, GeneratorError>;

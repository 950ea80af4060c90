//! Name resolution for generated SDK operations
//!
//! Reconciles loosely-specified API metadata with the set of class names the
//! target SDK actually ships:
//!
//! - [`resolve_service_name`]: display name of a service (`AmazonXClient`, ...)
//! - [`resolve_request_class_name`] / [`resolve_response_class_name`]:
//!   ordered fallback chains tested against a [`ClassRegistry`]
//! - [`PaginationResolver`]: result-key normalization and inference
//!
//! [`ClassRegistry`]: cloudops_generator_common::ClassRegistry

mod builder;
mod case;
mod class_name;
mod pagination;
mod service_name;

pub use builder::build_service;
pub use case::to_upper_camel_case;
pub use class_name::{
    resolve_request_class_name, resolve_response_class_name, FallbackChain, Transform,
    REQUEST_CHAIN, RESPONSE_CHAIN,
};
pub use pagination::PaginationResolver;
pub use service_name::{client_class_name, config_class_name, resolve_service_name};

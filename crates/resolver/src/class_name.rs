//! Request/response class name resolution
//!
//! API descriptions name their input and output shapes loosely
//! (`FooInput`, `FooMessage`, `FooResult`, ...), while the SDK ships
//! `FooRequest`/`FooResponse` classes. Each side is resolved by an ordered
//! [`FallbackChain`]: every step rewrites the current candidate, and the
//! first candidate known to the registry wins. Step order is significant.

use cloudops_generator_common::{ClassKind, ClassRegistry, GeneratorError, Operation, Result};
use tracing::{debug, trace};

/// A fallback step: `(current candidate, operation name) -> next candidate`
pub type Transform = fn(&str, &str) -> String;

/// Ordered candidate transforms for one side of an operation
pub struct FallbackChain {
    pub kind: ClassKind,
    pub steps: &'static [Transform],
}

impl FallbackChain {
    /// Run the chain starting from `seed`
    ///
    /// Steps are cumulative: each one receives the previous step's
    /// candidate. Returns the first candidate the registry knows.
    pub fn resolve<R>(&self, operation_name: &str, seed: &str, registry: &R) -> Result<String>
    where
        R: ClassRegistry + ?Sized,
    {
        let mut candidate = seed.to_string();
        for (step, transform) in self.steps.iter().enumerate() {
            candidate = transform(&candidate, operation_name);
            trace!(
                operation = operation_name,
                kind = %self.kind,
                step,
                candidate = %candidate,
                "testing class candidate"
            );
            if registry.has(&candidate) {
                debug!(
                    operation = operation_name,
                    kind = %self.kind,
                    class = %candidate,
                    "resolved class name"
                );
                return Ok(candidate);
            }
        }

        Err(GeneratorError::NotFound {
            kind: self.kind,
            operation: operation_name.to_string(),
        })
    }
}

fn unchanged(candidate: &str, _name: &str) -> String {
    candidate.to_string()
}

fn with_suffix(candidate: &str, suffix: &str) -> String {
    if candidate.ends_with(suffix) {
        candidate.to_string()
    } else {
        format!("{}{}", candidate, suffix)
    }
}

fn input_to_request(candidate: &str, _name: &str) -> String {
    candidate.replacen("Input", "Request", 1)
}

fn message_to_request(candidate: &str, _name: &str) -> String {
    candidate.replacen("Message", "Request", 1)
}

fn request_suffix(candidate: &str, _name: &str) -> String {
    with_suffix(candidate, "Request")
}

fn name_request(_candidate: &str, name: &str) -> String {
    format!("{}Request", name)
}

fn plural_name_request(_candidate: &str, name: &str) -> String {
    format!("{}sRequest", name)
}

fn output_to_response(candidate: &str, _name: &str) -> String {
    candidate.replacen("Output", "Response", 1)
}

fn result_to_response(candidate: &str, _name: &str) -> String {
    candidate.replacen("Result", "Response", 1)
}

fn message_to_response(candidate: &str, _name: &str) -> String {
    candidate.replacen("Message", "Response", 1)
}

// DescribeX operations sometimes declare an output named after X alone.
fn describe_prefix(candidate: &str, name: &str) -> String {
    if name.starts_with("Describe") && !candidate.starts_with("Describe") {
        format!("Describe{}", candidate)
    } else {
        candidate.to_string()
    }
}

fn response_suffix(candidate: &str, _name: &str) -> String {
    with_suffix(candidate, "Response")
}

fn name_response(_candidate: &str, name: &str) -> String {
    format!("{}Response", name)
}

fn plural_name_response(_candidate: &str, name: &str) -> String {
    format!("{}sResponse", name)
}

pub static REQUEST_CHAIN: FallbackChain = FallbackChain {
    kind: ClassKind::Request,
    steps: &[
        unchanged,
        input_to_request,
        message_to_request,
        request_suffix,
        name_request,
        plural_name_request,
    ],
};

pub static RESPONSE_CHAIN: FallbackChain = FallbackChain {
    kind: ClassKind::Response,
    steps: &[
        unchanged,
        output_to_response,
        result_to_response,
        message_to_response,
        describe_prefix,
        response_suffix,
        name_response,
        plural_name_response,
    ],
};

/// Resolve the SDK request class of an operation
///
/// Starts from the declared request class, or the operation name when none
/// is declared.
pub fn resolve_request_class_name<R>(operation: &Operation, registry: &R) -> Result<String>
where
    R: ClassRegistry + ?Sized,
{
    let seed = if operation.request_class.is_empty() {
        &operation.name
    } else {
        &operation.request_class
    };
    REQUEST_CHAIN.resolve(&operation.name, seed, registry)
}

/// Resolve the SDK response class of an operation
pub fn resolve_response_class_name<R>(operation: &Operation, registry: &R) -> Result<String>
where
    R: ClassRegistry + ?Sized,
{
    RESPONSE_CHAIN.resolve(&operation.name, &operation.response_class, registry)
}

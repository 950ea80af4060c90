//! Operation source generation
//!
//! This crate is the templating layer on top of the resolver. It turns every
//! operation of a [`Service`] into a naming context and renders one source
//! file per operation.

mod templates;

use cloudops_generator_common::{
    ClassRegistry, GeneratorError, NamingConfig, Operation, Result, Service,
};
use cloudops_generator_resolver::{
    client_class_name, config_class_name, resolve_request_class_name,
    resolve_response_class_name, resolve_service_name, to_upper_camel_case,
};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tera::Tera;
use tracing::{debug, warn};

pub use templates::OPERATION_TEMPLATE;

/// Response code assumed when the model declares none
pub const DEFAULT_RESPONSE_CODE: &str = "200";

/// Service-level names exposed to templates
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceContext {
    pub service_id: String,
    pub service_name: String,
    pub client_class_name: String,
    pub config_class_name: String,
    pub has_pagination: bool,
}

/// Per-operation names exposed to templates
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationContext {
    pub name: String,
    pub description: String,
    pub method: String,
    pub request_uri: String,
    pub response_code: String,
    pub class_name: String,
    pub file_name: String,
    pub request_class_name: String,
    pub response_class_name: String,

    /// Required members of the request shape, empty if none
    pub required_params: String,
    pub pagination: Option<PaginationContext>,
}

/// Pagination fields with property names in UpperCamelCase
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationContext {
    pub input_token: String,
    pub limit_key: String,
    pub output_token: String,
    pub result_keys: Vec<String>,
}

/// An operation left out of generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedOperation {
    pub operation: String,
    pub reason: String,
}

/// Outcome of [`OperationGenerator::generate_to_directory`]
#[derive(Debug, Default)]
pub struct GenerationReport {
    pub written: Vec<PathBuf>,
    pub skipped: Vec<SkippedOperation>,
}

/// Operation generator
///
/// Resolves names against a class registry and renders each operation of a
/// service through the `operation.cs` template.
pub struct OperationGenerator<'a, R: ClassRegistry + ?Sized> {
    service: &'a Service,
    registry: &'a R,
    config: &'a NamingConfig,
    tera: Tera,
}

impl<'a, R: ClassRegistry + ?Sized> OperationGenerator<'a, R> {
    /// Create a generator for one service
    pub fn new(service: &'a Service, registry: &'a R, config: &'a NamingConfig) -> Result<Self> {
        let tera = templates::load_templates()?;
        Ok(Self {
            service,
            registry,
            config,
            tera,
        })
    }

    pub fn service_context(&self) -> ServiceContext {
        ServiceContext {
            service_id: self.service.service_id().to_string(),
            service_name: resolve_service_name(self.service),
            client_class_name: client_class_name(self.service),
            config_class_name: config_class_name(self.service),
            has_pagination: self.service.has_pagination(),
        }
    }

    /// Resolve every name of an operation
    ///
    /// Fails with [`GeneratorError::NotFound`] if either class name cannot be
    /// resolved.
    pub fn operation_context(&self, operation: &Operation) -> Result<OperationContext> {
        let request_class_name = resolve_request_class_name(operation, self.registry)?;
        let response_class_name = resolve_response_class_name(operation, self.registry)?;

        let response_code = if operation.response_code.is_empty() {
            DEFAULT_RESPONSE_CODE.to_string()
        } else {
            operation.response_code.clone()
        };

        // Operations without a declared request shape use their own name.
        let request_shape = if operation.request_class.is_empty() {
            &operation.name
        } else {
            &operation.request_class
        };

        let pagination = operation.pagination.as_ref().map(|p| PaginationContext {
            input_token: to_upper_camel_case(&p.input_token),
            limit_key: to_upper_camel_case(&p.limit_key),
            output_token: to_upper_camel_case(&p.output_token),
            result_keys: p.result_keys.clone(),
        });

        Ok(OperationContext {
            name: operation.name.clone(),
            description: operation.description.clone(),
            method: operation.method.clone(),
            request_uri: operation.request_uri.clone(),
            response_code,
            class_name: operation.class_name(),
            file_name: operation.file_name(&self.config.source_extension),
            request_class_name,
            response_class_name,
            required_params: self.service.required_params(request_shape),
            pagination,
        })
    }

    /// Render the source file of one operation
    pub fn render_operation(&self, operation: &Operation) -> Result<String> {
        let context = self.operation_context(operation)?;
        self.render(&context)
    }

    fn render(&self, operation: &OperationContext) -> Result<String> {
        let mut context = tera::Context::new();
        context.insert("service", &self.service_context());
        context.insert("operation", operation);

        self.tera
            .render(OPERATION_TEMPLATE, &context)
            .map_err(|e| GeneratorError::Generation(format!("Template error: {:?}", e)))
    }

    /// Write every operation into `output_dir/<basefolder>`
    ///
    /// Operations whose class names cannot be resolved are skipped and
    /// reported; any other failure aborts generation.
    pub fn generate_to_directory(&self, output_dir: &Path) -> Result<GenerationReport> {
        let target_dir = output_dir.join(&self.service.basefolder);
        fs::create_dir_all(&target_dir).map_err(|e| {
            GeneratorError::Generation(format!(
                "Failed to create output directory {}: {}",
                target_dir.display(),
                e
            ))
        })?;

        let mut report = GenerationReport::default();
        for operation in self.service.operations() {
            let context = match self.operation_context(operation) {
                Ok(context) => context,
                Err(err @ GeneratorError::NotFound { .. }) => {
                    warn!(operation = %operation.name, error = %err, "skipping operation");
                    report.skipped.push(SkippedOperation {
                        operation: operation.name.clone(),
                        reason: err.to_string(),
                    });
                    continue;
                }
                Err(err) => return Err(err),
            };

            let rendered = self.render(&context)?;
            let output_path = target_dir.join(&context.file_name);
            fs::write(&output_path, rendered).map_err(|e| {
                GeneratorError::Generation(format!(
                    "Failed to write {}: {}",
                    output_path.display(),
                    e
                ))
            })?;
            debug!(path = %output_path.display(), "wrote operation");
            report.written.push(output_path);
        }

        Ok(report)
    }
}

/// Generate all operations of a service (convenience function)
pub fn generate_service<R: ClassRegistry + ?Sized>(
    service: &Service,
    registry: &R,
    config: &NamingConfig,
    output_path: &Path,
) -> Result<GenerationReport> {
    let generator = OperationGenerator::new(service, registry, config)?;
    generator.generate_to_directory(output_path)
}

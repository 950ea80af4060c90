//! Service model construction from a model document

use crate::pagination::PaginationResolver;
use cloudops_generator_common::{Service, ServiceDocument};
use tracing::debug;

/// Build a [`Service`] from its model document
///
/// Operations are appended in document order. Declared paginators are
/// normalized, then result keys missing from them are inferred from the
/// response shapes.
pub fn build_service(document: ServiceDocument, pagination: &PaginationResolver) -> Service {
    let mut service = Service::new(&document.service_id);
    service.endpoint_prefix = document.endpoint_prefix;
    service.abbreviation = document.abbreviation;
    service.full_name = document.full_name;
    service.filename = document.filename;
    service.basefolder = document.basefolder;
    service.shapes = document.shapes;

    for op_doc in document.operations {
        let operation = service.new_operation(&op_doc.name);
        operation.description = op_doc.description;
        operation.request_class = op_doc.request_class;
        operation.response_class = op_doc.response_class;
        operation.response_code = op_doc.response_code;
        operation.method = op_doc.method;
        operation.request_uri = op_doc.request_uri;
        operation.pagination = op_doc
            .pagination
            .as_ref()
            .map(PaginationResolver::pagination_from_document);
    }

    pagination.ensure_service_result_keys(&mut service);

    debug!(
        service = service.service_id(),
        operations = service.operations().len(),
        shapes = service.shapes.len(),
        "built service model"
    );
    service
}

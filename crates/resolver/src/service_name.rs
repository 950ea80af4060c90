//! Service display name resolution

use crate::case::to_upper_camel_case;
use cloudops_generator_common::Service;
use tracing::debug;

/// Vendor prefixes stripped from every service name
const STRIPPED_PREFIXES: [&str; 2] = ["AWS", "Amazon"];

/// Names whose SDK namespace differs from the camel-cased abbreviation
const SERVICE_NAME_EXCEPTIONS: &[(&str, &str)] = &[
    ("ElasticsearchService", "Elasticsearch"),
    ("Health", "AWSHealth"),
    ("IAM", "IdentityManagement"),
    ("KMS", "KeyManagementService"),
    ("SES", "SimpleEmail"),
    ("SFN", "StepFunctions"),
    ("SMS", "ServerMigrationService"),
    ("SNS", "SimpleNotificationService"),
    ("SSM", "SimpleSystemsManagement"),
];

/// Canonical display name of a service
///
/// Uses the abbreviation when present, otherwise the full name.
pub fn resolve_service_name(service: &Service) -> String {
    let source = if service.abbreviation.is_empty() {
        &service.full_name
    } else {
        &service.abbreviation
    };

    let mut name = to_upper_camel_case(source);
    for prefix in STRIPPED_PREFIXES {
        name = name.replace(prefix, "");
    }

    let resolved = SERVICE_NAME_EXCEPTIONS
        .iter()
        .find(|(from, _)| *from == name)
        .map(|(_, to)| to.to_string())
        .unwrap_or(name);

    debug!(service = service.service_id(), name = %resolved, "resolved service name");
    resolved
}

/// SDK client class, e.g. "AmazonS3Client"
pub fn client_class_name(service: &Service) -> String {
    format!("Amazon{}Client", resolve_service_name(service))
}

/// SDK config class, e.g. "AmazonS3Config"
pub fn config_class_name(service: &Service) -> String {
    format!("Amazon{}Config", resolve_service_name(service))
}

//! Pagination result keys
//!
//! Result keys name the response members a paginated operation iterates.
//! Declared keys are normalized to UpperCamelCase; when none are declared
//! they are inferred from the members of the response shape.

use crate::case::to_upper_camel_case;
use cloudops_generator_common::{
    NamingConfig, Pagination, PaginationDocument, ResultKeyDescriptor, Service, Shape,
    TokenDescriptor,
};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Normalizes and infers pagination result keys
#[derive(Debug, Clone)]
pub struct PaginationResolver {
    /// Response members that are paging metadata rather than results
    excluded_members: BTreeSet<String>,
}

impl Default for PaginationResolver {
    fn default() -> Self {
        Self::from_config(&NamingConfig::default())
    }
}

impl PaginationResolver {
    pub fn from_config(config: &NamingConfig) -> Self {
        Self::with_excluded_members(config.excluded_result_members.iter().cloned())
    }

    pub fn with_excluded_members<I, S>(members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            excluded_members: members.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_excluded(&self, member: &str) -> bool {
        self.excluded_members.contains(member)
    }

    /// Convert declared result key(s) to UpperCamelCase, keeping order
    pub fn normalize_result_keys(descriptor: &ResultKeyDescriptor) -> Vec<String> {
        match descriptor {
            ResultKeyDescriptor::Single(key) => vec![to_upper_camel_case(key)],
            ResultKeyDescriptor::Many(keys) => {
                keys.iter().map(|key| to_upper_camel_case(key)).collect()
            }
            ResultKeyDescriptor::Unrecognized(_) => Vec::new(),
        }
    }

    /// Build a [`Pagination`] from a declared paginator
    ///
    /// Result keys are normalized but not inferred; see
    /// [`Self::ensure_result_keys`]. Multi-token paginators keep their first
    /// token.
    pub fn pagination_from_document(document: &PaginationDocument) -> Pagination {
        let token = |descriptor: &Option<TokenDescriptor>| {
            descriptor
                .as_ref()
                .map(|d| d.primary().to_string())
                .unwrap_or_default()
        };

        Pagination {
            input_token: token(&document.input_token),
            limit_key: token(&document.limit_key),
            output_token: token(&document.output_token),
            result_keys: document
                .result_key
                .as_ref()
                .map(Self::normalize_result_keys)
                .unwrap_or_default(),
        }
    }

    /// Result keys inferred from the members of a response shape
    ///
    /// Members are visited in lexicographic order. An unknown shape or a
    /// shape without members yields no keys.
    pub fn infer_result_keys(
        &self,
        shapes: &BTreeMap<String, Shape>,
        response_shape: &str,
    ) -> Vec<String> {
        let Some(members) = shapes
            .get(response_shape)
            .and_then(|shape| shape.members.as_ref())
        else {
            return Vec::new();
        };

        members
            .keys()
            .filter(|member| !self.is_excluded(member))
            .map(|member| to_upper_camel_case(member))
            .collect()
    }

    /// Fill in result keys from the response shape if none were declared
    ///
    /// `response_shape` is the operation's declared response class, which
    /// names its output shape.
    pub fn ensure_result_keys(
        &self,
        pagination: &mut Pagination,
        shapes: &BTreeMap<String, Shape>,
        response_shape: &str,
    ) {
        if !pagination.result_keys.is_empty() {
            return;
        }
        pagination
            .result_keys
            .extend(self.infer_result_keys(shapes, response_shape));
        debug!(
            shape = response_shape,
            keys = ?pagination.result_keys,
            "inferred pagination result keys"
        );
    }

    /// Run [`Self::ensure_result_keys`] for every paginated operation
    pub fn ensure_service_result_keys(&self, service: &mut Service) {
        let (shapes, operations) = service.shapes_and_operations_mut();
        for operation in operations {
            if let Some(pagination) = operation.pagination.as_mut() {
                self.ensure_result_keys(pagination, shapes, &operation.response_class);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloudops_generator_common::MemberRef;

    fn shape_with_members(members: &[&str]) -> Shape {
        Shape {
            shape_type: Some("structure".to_string()),
            members: Some(
                members
                    .iter()
                    .map(|name| {
                        (
                            name.to_string(),
                            MemberRef {
                                shape: "String".to_string(),
                                documentation: None,
                            },
                        )
                    })
                    .collect(),
            ),
            required: None,
        }
    }

    fn shapes(entries: Vec<(&str, Shape)>) -> BTreeMap<String, Shape> {
        entries
            .into_iter()
            .map(|(name, shape)| (name.to_string(), shape))
            .collect()
    }

    #[test]
    fn test_normalize_single() {
        let keys = PaginationResolver::normalize_result_keys(&ResultKeyDescriptor::Single(
            "reservedInstances".to_string(),
        ));
        assert_eq!(keys, vec!["ReservedInstances"]);
    }

    #[test]
    fn test_normalize_many_keeps_order() {
        let keys = PaginationResolver::normalize_result_keys(&ResultKeyDescriptor::Many(vec![
            "contents".to_string(),
            "common_prefixes".to_string(),
        ]));
        assert_eq!(keys, vec!["Contents", "CommonPrefixes"]);
    }

    #[test]
    fn test_normalize_unrecognized_is_empty() {
        let keys = PaginationResolver::normalize_result_keys(&ResultKeyDescriptor::Unrecognized(
            serde_json::json!(42),
        ));
        assert!(keys.is_empty());
    }

    #[test]
    fn test_normalize_idempotent() {
        let once = PaginationResolver::normalize_result_keys(&ResultKeyDescriptor::Many(vec![
            "items".to_string(),
            "next_page".to_string(),
        ]));
        let twice =
            PaginationResolver::normalize_result_keys(&ResultKeyDescriptor::Many(once.clone()));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_infer_skips_paging_members() {
        let resolver = PaginationResolver::default();
        let shapes = shapes(vec![(
            "ListItemsResult",
            shape_with_members(&["Items", "NextToken", "IsTruncated"]),
        )]);

        let mut pagination = Pagination::default();
        resolver.ensure_result_keys(&mut pagination, &shapes, "ListItemsResult");
        assert_eq!(pagination.result_keys, vec!["Items"]);
    }

    #[test]
    fn test_infer_all_default_exclusions() {
        let resolver = PaginationResolver::default();
        let mut members = cloudops_generator_common::DEFAULT_EXCLUDED_RESULT_MEMBERS.to_vec();
        members.push("jobSummaries");
        let shapes = shapes(vec![("ListJobsResponse", shape_with_members(&members))]);

        assert_eq!(
            resolver.infer_result_keys(&shapes, "ListJobsResponse"),
            vec!["JobSummaries"]
        );
    }

    #[test]
    fn test_infer_lexicographic_order() {
        let resolver = PaginationResolver::default();
        let shapes = shapes(vec![(
            "Out",
            shape_with_members(&["Zones", "Accounts", "Marker"]),
        )]);
        assert_eq!(
            resolver.infer_result_keys(&shapes, "Out"),
            vec!["Accounts", "Zones"]
        );
    }

    #[test]
    fn test_declared_keys_untouched() {
        let resolver = PaginationResolver::default();
        let shapes = shapes(vec![("Out", shape_with_members(&["Items", "Other"]))]);
        let mut pagination = Pagination {
            result_keys: vec!["Items".to_string()],
            ..Default::default()
        };

        resolver.ensure_result_keys(&mut pagination, &shapes, "Out");
        assert_eq!(pagination.result_keys, vec!["Items"]);
    }

    #[test]
    fn test_missing_or_memberless_shape() {
        let resolver = PaginationResolver::default();
        let shapes = shapes(vec![("Bare", Shape::default())]);

        let mut pagination = Pagination::default();
        resolver.ensure_result_keys(&mut pagination, &shapes, "Missing");
        assert!(pagination.result_keys.is_empty());

        resolver.ensure_result_keys(&mut pagination, &shapes, "Bare");
        assert!(pagination.result_keys.is_empty());
    }

    #[test]
    fn test_custom_exclusions() {
        let resolver = PaginationResolver::with_excluded_members(["ContinuationToken"]);
        let shapes = shapes(vec![(
            "Out",
            shape_with_members(&["Contents", "ContinuationToken", "NextToken"]),
        )]);
        assert_eq!(
            resolver.infer_result_keys(&shapes, "Out"),
            vec!["Contents", "NextToken"]
        );
    }

    #[test]
    fn test_pagination_from_document() {
        let document = PaginationDocument {
            input_token: Some(TokenDescriptor::Single("Marker".to_string())),
            limit_key: Some(TokenDescriptor::Single("MaxRecords".to_string())),
            output_token: Some(TokenDescriptor::Single("Marker".to_string())),
            result_key: Some(ResultKeyDescriptor::Single("DBInstances".to_string())),
        };
        let pagination = PaginationResolver::pagination_from_document(&document);
        assert_eq!(pagination.input_token, "Marker");
        assert_eq!(pagination.limit_key, "MaxRecords");
        assert_eq!(pagination.result_keys, vec!["DBInstances"]);
    }

    #[test]
    fn test_pagination_from_document_multi_token() {
        let document = PaginationDocument {
            input_token: Some(TokenDescriptor::Many(vec![
                "KeyMarker".to_string(),
                "VersionIdMarker".to_string(),
            ])),
            limit_key: None,
            output_token: Some(TokenDescriptor::Many(vec![
                "NextKeyMarker".to_string(),
                "NextVersionIdMarker".to_string(),
            ])),
            result_key: None,
        };
        let pagination = PaginationResolver::pagination_from_document(&document);
        assert_eq!(pagination.input_token, "KeyMarker");
        assert_eq!(pagination.limit_key, "");
        assert_eq!(pagination.output_token, "NextKeyMarker");
        assert!(pagination.result_keys.is_empty());
    }

    #[test]
    fn test_ensure_service_result_keys() {
        let mut service = Service::new("test");
        service.shapes = shapes(vec![(
            "ListThingsOutput",
            shape_with_members(&["Things", "nextToken"]),
        )]);
        let op = service.new_operation("ListThings");
        op.response_class = "ListThingsOutput".to_string();
        op.pagination = Some(Pagination::default());
        service.new_operation("GetThing");

        PaginationResolver::default().ensure_service_result_keys(&mut service);

        let pagination = service.operations()[0].pagination.as_ref().unwrap();
        assert_eq!(pagination.result_keys, vec!["Things"]);
        assert!(service.operations()[1].pagination.is_none());
    }
}

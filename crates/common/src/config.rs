//! Naming configuration loaded from YAML
//!
//! Every field has a default, so an empty document (or no file at all) gives
//! the stock behaviour.

use crate::{GeneratorError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Extension appended to generated operation file names
pub const DEFAULT_SOURCE_EXTENSION: &str = ".cs";

/// Response members that never count as pagination result keys
pub const DEFAULT_EXCLUDED_RESULT_MEMBERS: [&str; 11] = [
    "NextToken",
    "TotalCount",
    "Marker",
    "IsTruncated",
    "nextToken",
    "MaxResults",
    "NextPageToken",
    "NextMarker",
    "Status",
    "PageToken",
    "TotalResultsCount",
];

/// Settings shared by the resolver and the generator
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Source file extension, including the leading dot
    pub source_extension: String,

    /// Member names skipped when inferring pagination result keys
    pub excluded_result_members: Vec<String>,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            source_extension: DEFAULT_SOURCE_EXTENSION.to_string(),
            excluded_result_members: DEFAULT_EXCLUDED_RESULT_MEMBERS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl NamingConfig {
    /// Load configuration from a YAML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            GeneratorError::Config(format!(
                "Failed to read config {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = NamingConfig::default();
        assert_eq!(config.source_extension, ".cs");
        assert_eq!(config.excluded_result_members.len(), 11);
        assert!(config
            .excluded_result_members
            .contains(&"TotalResultsCount".to_string()));
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = NamingConfig::from_yaml("source_extension: .java\n").unwrap();
        assert_eq!(config.source_extension, ".java");
        assert_eq!(config.excluded_result_members.len(), 11);
    }

    #[test]
    fn test_override_exclusions() {
        let yaml = r#"
excluded_result_members:
  - NextToken
  - ContinuationToken
"#;
        let config = NamingConfig::from_yaml(yaml).unwrap();
        assert_eq!(
            config.excluded_result_members,
            vec!["NextToken".to_string(), "ContinuationToken".to_string()]
        );
        assert_eq!(config.source_extension, ".cs");
    }

    #[test]
    fn test_empty_yaml() {
        assert_eq!(NamingConfig::from_yaml("").unwrap(), NamingConfig::default());
    }

    #[test]
    fn test_invalid_yaml() {
        let result = NamingConfig::from_yaml("excluded_result_members: 5");
        assert!(matches!(result, Err(GeneratorError::Yaml(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = NamingConfig::load_from_file("/nonexistent/naming.yaml");
        assert!(matches!(result, Err(GeneratorError::Config(_))));
    }
}

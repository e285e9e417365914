pub mod defaults;

use std::path::Path;

use serde::{Serialize, Deserialize};

use crate::toc::ListType;
use crate::utils::error::{BoxResult, RustocError};

/// Outline generation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TocConfig {
    /// Which headings to collect, as a comma-separated selector
    #[serde(default = "defaults::default_selector")]
    pub selector: String,

    /// List tag to emit (ordered or unordered)
    #[serde(default = "defaults::default_list_type")]
    pub list_type: ListType,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            selector: defaults::default_selector(),
            list_type: defaults::default_list_type(),
        }
    }
}

/// Load configuration from a YAML file
pub fn load_config(path: &Path) -> BoxResult<TocConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        RustocError::Config(format!("cannot read {}: {}", path.display(), e))
    })?;

    let config: TocConfig = serde_yaml::from_str(&content)
        .map_err(|e| RustocError::Config(format!("invalid config {}: {}", path.display(), e)))?;

    log::debug!("loaded config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TocConfig::default();
        assert_eq!(config.selector, "h1, h2, h3, h4");
        assert_eq!(config.list_type, ListType::Unordered);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: TocConfig = serde_yaml::from_str("selector: \"h2, h3\"\n").unwrap();
        assert_eq!(config.selector, "h2, h3");
        assert_eq!(config.list_type, ListType::Unordered);
    }

    #[test]
    fn test_list_type_from_yaml() {
        let config: TocConfig = serde_yaml::from_str("list_type: ordered\n").unwrap();
        assert_eq!(config.list_type, ListType::Ordered);
    }
}

//! Builds the demonstration collector from a [`DriverConfig`].

use crate::collections::NamedCollector;

/// Parameters for building a collector of generated labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverConfig {
    /// Collector name
    pub name: String,
    /// Number of labels to append
    pub count: usize,
    /// Text placed before each label's index
    pub prefix: String,
}

impl Default for DriverConfig {
    fn default() -> Self {
        DriverConfig {
            name: "test".to_string(),
            count: 5,
            prefix: "item_".to_string(),
        }
    }
}

/// Label for the item at `index`, e.g. `item_3`.
#[inline]
pub fn item_label(prefix: &str, index: usize) -> String {
    format!("{prefix}{index}")
}

/// Creates a collector named `config.name` holding `config.count` generated labels.
pub fn build_collector(config: &DriverConfig) -> NamedCollector {
    let mut collector = NamedCollector::new(config.name.as_str());
    for index in 0..config.count {
        let label = item_label(&config.prefix, index);
        log::debug!("Adding '{}' to '{}'", label, collector.name());
        collector.add_item(label);
    }
    log::info!(
        "Collector '{}' holds {} item(s)",
        collector.name(),
        collector.len()
    );
    collector
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_item_label() {
        assert_eq!(item_label("item_", 0), "item_0");
        assert_eq!(item_label("", 12), "12");
    }

    #[test]
    fn test_default_config_builds_five_items() {
        let collector = build_collector(&DriverConfig::default());
        assert_eq!(collector.name(), "test");
        assert_eq!(
            collector.items(),
            ["item_0", "item_1", "item_2", "item_3", "item_4"]
        );
    }

    #[test]
    fn test_zero_count() {
        let config = DriverConfig {
            name: String::new(),
            count: 0,
            ..DriverConfig::default()
        };
        let collector = build_collector(&config);
        assert!(collector.is_empty());
        assert_eq!(collector.name(), "");
    }
}

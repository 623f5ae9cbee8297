use crate::output;
use colored::Colorize;
use std::collections::HashSet;
use tracing::debug;

/// Flags `ccpack.toml` keys that nothing reads
pub struct ConfigValidator {
    /// Dotted keys recognized by ccpack
    known_fields: HashSet<&'static str>,
}

impl ConfigValidator {
    /// Create a new validator with known configuration fields
    #[must_use]
    pub fn new() -> Self {
        let known_fields = [
            "scan.extension",
            "scan.exclude_dirs",
            "scan.scoping",
            "urls.raw_host",
            "urls.profile_host",
            "urls.branch_ref",
        ]
        .into_iter()
        .collect();

        Self { known_fields }
    }

    /// Collect dotted paths of unknown fields in a TOML document
    ///
    /// Returns an empty list for text that does not parse; parse errors are
    /// reported by [`super::Config::parse`].
    #[must_use]
    pub fn unknown_fields(&self, content: &str) -> Vec<String> {
        let Ok(parsed) = toml::from_str::<toml::Table>(content) else {
            return Vec::new();
        };

        let mut unknown = Vec::new();
        self.check_table(&parsed, "", &mut unknown);
        unknown.sort();
        unknown
    }

    /// Print a warning block for unknown fields, if any
    pub fn warn_unknown_fields(&self, content: &str) {
        let unknown = self.unknown_fields(content);
        if unknown.is_empty() {
            return;
        }

        debug!(count = unknown.len(), "Unknown configuration fields");
        output::warning("Configuration warnings:");
        for field in &unknown {
            eprintln!("  Unknown configuration field: {}", field.yellow());
        }
        eprintln!();
    }

    /// Recursively checks a TOML table for unknown fields
    fn check_table(&self, table: &toml::Table, prefix: &str, unknown: &mut Vec<String>) {
        for (key, value) in table {
            let full_key = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{prefix}.{key}")
            };

            if self.known_fields.contains(full_key.as_str()) {
                continue;
            }

            match value {
                toml::Value::Table(inner) if self.is_section(&full_key) => {
                    self.check_table(inner, &full_key, unknown);
                }
                _ => unknown.push(full_key),
            }
        }
    }

    /// Whether `key` is the prefix of some known field
    fn is_section(&self, key: &str) -> bool {
        self.known_fields
            .iter()
            .any(|field| field.strip_prefix(key).is_some_and(|rest| rest.starts_with('.')))
    }
}

impl Default for ConfigValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_fields_pass() {
        let validator = ConfigValidator::new();
        let unknown = validator.unknown_fields(
            "[scan]\nextension = \".lua\"\nexclude_dirs = [\"ccpack\"]\n[urls]\nbranch_ref = \"refs/heads/main\"\n",
        );
        assert!(unknown.is_empty());
    }

    #[test]
    fn test_unknown_fields_reported() {
        let validator = ConfigValidator::new();
        let unknown =
            validator.unknown_fields("verbose = true\n[scan]\nfollow_links = true\n[extra]\na = 1\n");
        assert_eq!(unknown, vec!["extra", "scan.follow_links", "verbose"]);
    }

    #[test]
    fn test_unparseable_content_is_ignored() {
        let validator = ConfigValidator::new();
        assert!(validator.unknown_fields("[scan").is_empty());
    }
}

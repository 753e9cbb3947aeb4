use std::{fs, path::Path};

use langsheet::{DuplicateKeyPolicy, Error, PlaceholderRules};

/// Loads placeholder rules from a TOML file, or the built-in rules when no file is given.
///
/// ```toml
/// formatters = ["%s", "%d"]
/// custom_markers = ["[$click]"]
/// exempt_zero_formatters = false
/// ```
///
/// Missing keys keep their defaults.
pub fn load_rules(path: Option<&Path>) -> Result<PlaceholderRules, Error> {
    let Some(path) = path else {
        return Ok(PlaceholderRules::default());
    };
    let content = fs::read_to_string(path)?;
    parse_rules(&content).map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
}

pub fn parse_rules(content: &str) -> Result<PlaceholderRules, toml::de::Error> {
    toml::from_str(content)
}

pub fn duplicate_policy(strict_keys: bool) -> DuplicateKeyPolicy {
    if strict_keys {
        DuplicateKeyPolicy::Reject
    } else {
        DuplicateKeyPolicy::Overwrite
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_file_gives_defaults() {
        assert_eq!(load_rules(None).unwrap(), PlaceholderRules::default());
    }

    #[test]
    fn test_parse_partial_rules() {
        let rules = parse_rules("formatters = [\"%s\", \"%d\"]\n").unwrap();
        assert_eq!(rules.formatters, vec!["%s".to_string(), "%d".to_string()]);
        assert_eq!(rules.custom_markers, vec!["[$click]".to_string()]);
        assert!(rules.exempt_zero_formatters);
    }

    #[test]
    fn test_parse_invalid_rules() {
        assert!(parse_rules("formatters = 3").is_err());
    }

    #[test]
    fn test_duplicate_policy() {
        assert_eq!(duplicate_policy(true), DuplicateKeyPolicy::Reject);
        assert_eq!(duplicate_policy(false), DuplicateKeyPolicy::Overwrite);
    }
}

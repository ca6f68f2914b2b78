//! # Feature: Content Tips
//!
//! Random content-idea suggestions for `/tips`. Ships a built-in list and
//! optionally loads a custom one from a YAML file.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.3.0
//! - **Toggleable**: true

use anyhow::Result;
use log::debug;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

/// The content-idea pool `/tips` draws from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TipLibrary {
    pub tips: Vec<String>,
}

impl Default for TipLibrary {
    /// The built-in idea list.
    fn default() -> Self {
        TipLibrary {
            tips: vec![
                "Share a 'behind the scenes' short about how you make your content.".to_string(),
                "Post a quick tip your audience can use in under 30 seconds.".to_string(),
                "Share a before/after transformation or result.".to_string(),
                "Ask a question: 'What’s one thing you want to learn this week?'".to_string(),
                "Make a quick tutorial (3 steps).".to_string(),
            ],
        }
    }
}

impl TipLibrary {
    /// Load a tip list from a YAML file (a `tips:` sequence of strings).
    pub fn load(path: &str) -> Result<Self> {
        debug!("Loading tip list from {path}");
        let contents = std::fs::read_to_string(path)?;
        let library: TipLibrary = serde_yaml::from_str(&contents)?;
        library.validate()?;
        Ok(library)
    }

    /// Reject unusable lists.
    pub fn validate(&self) -> Result<()> {
        if self.tips.is_empty() {
            anyhow::bail!("tip list is empty");
        }
        Ok(())
    }

    /// Pick one idea uniformly at random.
    pub fn pick(&self) -> &str {
        self.tips
            .choose(&mut rand::rng())
            .map(String::as_str)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_library_picks_a_member() {
        let library = TipLibrary::default();
        assert_eq!(library.tips.len(), 5);
        for _ in 0..20 {
            let tip = library.pick();
            assert!(library.tips.iter().any(|t| t == tip));
        }
    }

    #[test]
    fn test_parse_yaml_list() {
        let yaml = r#"
tips:
  - "Record a 60-second myth-busting clip."
  - "Repost your best content from last month."
"#;
        let library: TipLibrary = serde_yaml::from_str(yaml).unwrap();
        assert!(library.validate().is_ok());
        assert_eq!(library.tips.len(), 2);
    }

    #[test]
    fn test_empty_list_is_rejected() {
        let library: TipLibrary = serde_yaml::from_str("tips: []").unwrap();
        assert!(library.validate().is_err());
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        assert!(TipLibrary::load("/nonexistent/tips.yaml").is_err());
    }
}

//! Engine configuration module.
//!
//! Handles loading and validating `config.toml`. The file carries the values
//! resolution must not hard-code: the default post-image URL and default
//! avatar URL injected into image resolution, the CDN base for building
//! asset-reference URLs, and the list limits the CLI uses for related posts
//! and popular tags.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [assets]
//! cdn_base_url = "https://cdn.example.com/images"  # Base for asset-ref URLs
//! default_post_image = "https://cdn.example.com/defaults/post.jpg"
//! default_avatar = "https://cdn.example.com/defaults/avatar.png"
//!
//! [views]
//! related_limit = 3       # Related posts per article
//! popular_tags_limit = 5  # Tags shown in the popular-tags widget
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse — override just the values you want:
//!
//! ```toml
//! # Only override the default avatar
//! [assets]
//! default_avatar = "https://my-cdn.net/avatar.png"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Engine configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Asset resolution settings: CDN base and injected default URLs.
    pub assets: AssetsConfig,
    /// Derived-view list limits used by the CLI.
    pub views: ViewsConfig,
}

/// Asset resolution settings.
///
/// The defaults here are what resolution degrades to — they must themselves
/// be valid absolute URLs, otherwise the "image is never empty" invariant
/// would be vacuous.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssetsConfig {
    /// Base URL that opaque asset references are built against.
    pub cdn_base_url: String,
    /// Image used when a post has no usable image field.
    pub default_post_image: String,
    /// Avatar used when an author has no usable avatar field.
    pub default_avatar: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            cdn_base_url: "https://cdn.example.com/images".to_string(),
            default_post_image: "https://cdn.example.com/defaults/post.jpg".to_string(),
            default_avatar: "https://cdn.example.com/defaults/avatar.png".to_string(),
        }
    }
}

/// Derived-view list limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewsConfig {
    /// Maximum related posts selected per article.
    pub related_limit: usize,
    /// Maximum tags in the popular-tags listing.
    pub popular_tags_limit: usize,
}

impl Default for ViewsConfig {
    fn default() -> Self {
        Self {
            related_limit: 3,
            popular_tags_limit: 5,
        }
    }
}

impl EngineConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, url) in [
            ("assets.cdn_base_url", &self.assets.cdn_base_url),
            ("assets.default_post_image", &self.assets.default_post_image),
            ("assets.default_avatar", &self.assets.default_avatar),
        ] {
            if !url.starts_with("http") {
                return Err(ConfigError::Validation(format!(
                    "{name} must be an absolute URL, got '{url}'"
                )));
            }
        }
        if self.views.related_limit == 0 {
            return Err(ConfigError::Validation(
                "views.related_limit must be at least 1".into(),
            ));
        }
        if self.views.popular_tags_limit == 0 {
            return Err(ConfigError::Validation(
                "views.popular_tags_limit must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Load and validate config from a `config.toml` path.
///
/// Uses defaults if the file doesn't exist — a missing config is not an
/// error, an invalid one is.
pub fn load_config(path: &Path) -> Result<EngineConfig, ConfigError> {
    if !path.exists() {
        return Ok(EngineConfig::default());
    }
    let content = fs::read_to_string(path)?;
    let config: EngineConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// A stock `config.toml` with every option documented, for `gen-config`.
pub fn stock_config_toml() -> String {
    r#"# Pressroom configuration.
# All options are optional; the values below are the stock defaults.

[assets]
# Base URL that opaque asset references are built against.
cdn_base_url = "https://cdn.example.com/images"

# Image used when a post has no usable image field.
default_post_image = "https://cdn.example.com/defaults/post.jpg"

# Avatar used when an author has no usable avatar field.
default_avatar = "https://cdn.example.com/defaults/avatar.png"

[views]
# Maximum related posts selected per article.
related_limit = 3

# Maximum tags in the popular-tags listing.
popular_tags_limit = 5
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_config(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.views.related_limit, 3);
        assert!(config.assets.default_post_image.starts_with("http"));
    }

    #[test]
    fn partial_config_overrides_only_given_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[assets]\ndefault_avatar = \"https://my.cdn/a.png\"\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.assets.default_avatar, "https://my.cdn/a.png");
        // Untouched values keep their defaults
        assert_eq!(
            config.assets.default_post_image,
            AssetsConfig::default().default_post_image
        );
        assert_eq!(config.views.popular_tags_limit, 5);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[assets]\ndefualt_avatar = \"https://x/a.png\"\n").unwrap();

        assert!(matches!(load_config(&path), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn relative_default_url_fails_validation() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[assets]\ndefault_post_image = \"/img/post.jpg\"\n").unwrap();

        assert!(matches!(
            load_config(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn zero_limit_fails_validation() {
        let config = EngineConfig {
            views: ViewsConfig {
                related_limit: 0,
                ..ViewsConfig::default()
            },
            ..EngineConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn stock_config_parses_and_matches_defaults() {
        let parsed: EngineConfig = toml::from_str(&stock_config_toml()).unwrap();
        let stock = EngineConfig::default();
        assert_eq!(parsed.assets.cdn_base_url, stock.assets.cdn_base_url);
        assert_eq!(parsed.views.related_limit, stock.views.related_limit);
        parsed.validate().unwrap();
    }
}

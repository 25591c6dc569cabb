//! Runtime configuration: remote endpoints and local asset overrides.

use crate::error::{Md2HtmlError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming a configuration file when none is passed explicitly.
pub const CONFIG_ENV_VAR: &str = "MD2HTML_CONFIG";

const BUNDLED_TEMPLATE: &str = include_str!("../assets/template.html");
const BUNDLED_MINIMAL_STYLESHEET: &str = include_str!("../assets/minimal.css");

fn default_render_url() -> String {
    "https://api.github.com/markdown".to_string()
}

fn default_stylesheet_url() -> String {
    "https://raw.githubusercontent.com/sindresorhus/github-markdown-css/main/github-markdown.css"
        .to_string()
}

fn default_license_url() -> String {
    "https://raw.githubusercontent.com/sindresorhus/github-markdown-css/main/license".to_string()
}

fn default_anchor_prefix() -> String {
    "user-content-".to_string()
}

fn default_user_agent() -> String {
    format!("md2html/{}", env!("CARGO_PKG_VERSION"))
}

#[derive(Debug, Deserialize, PartialEq, Clone)]
#[serde(deny_unknown_fields)]
/// Endpoints and asset locations used by a conversion run.
pub struct Config {
    #[serde(default = "default_render_url")]
    /// Endpoint accepting `{"text", "mode"}` and answering with an HTML fragment.
    pub render_url: String,
    #[serde(default = "default_stylesheet_url")]
    /// Location of the themed stylesheet.
    pub stylesheet_url: String,
    #[serde(default = "default_license_url")]
    /// Location of the themed stylesheet's license text.
    pub license_url: String,
    #[serde(default = "default_anchor_prefix")]
    /// Prefix the render endpoint adds to heading anchors.
    pub anchor_prefix: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default)]
    /// Replaces the bundled HTML template.
    pub template: Option<PathBuf>,
    #[serde(default)]
    /// Replaces the bundled minimal stylesheet.
    pub minimal_stylesheet: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            render_url: default_render_url(),
            stylesheet_url: default_stylesheet_url(),
            license_url: default_license_url(),
            anchor_prefix: default_anchor_prefix(),
            user_agent: default_user_agent(),
            template: None,
            minimal_stylesheet: None,
        }
    }
}

impl Config {
    /// Parses a TOML document. Missing keys fall back to their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|err| Md2HtmlError::Config(err.to_string()))
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// Relative asset paths inside the file are resolved against the file's
    /// own directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|err| Md2HtmlError::io(path, err))?;
        let mut config = Self::from_toml_str(&content)?;

        if let Some(base) = path.parent() {
            config.template = config.template.map(|p| base.join(p));
            config.minimal_stylesheet = config.minimal_stylesheet.map(|p| base.join(p));
        }

        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Loads `path` when given, otherwise the file named by [`CONFIG_ENV_VAR`],
    /// otherwise the defaults.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(value) if !value.is_empty() => Self::load(Path::new(&value)),
            _ => Ok(Self::default()),
        }
    }
}

/// The local texts a run needs: the HTML template and the minimal stylesheet.
#[derive(Debug, Clone, PartialEq)]
pub struct Assets {
    pub template: String,
    pub minimal_stylesheet: String,
}

impl Default for Assets {
    fn default() -> Self {
        Self {
            template: BUNDLED_TEMPLATE.to_string(),
            minimal_stylesheet: BUNDLED_MINIMAL_STYLESHEET.to_string(),
        }
    }
}

impl Assets {
    /// Uses the bundled assets unless the configuration points elsewhere.
    pub fn load(config: &Config) -> Result<Self> {
        let bundled = Self::default();

        let template = match &config.template {
            Some(path) => read_asset(path)?,
            None => bundled.template,
        };
        let minimal_stylesheet = match &config.minimal_stylesheet {
            Some(path) => read_asset(path)?,
            None => bundled.minimal_stylesheet,
        };

        Ok(Self {
            template,
            minimal_stylesheet,
        })
    }
}

fn read_asset(path: &Path) -> Result<String> {
    log::debug!("Reading asset override {}", path.display());
    fs::read_to_string(path).map_err(|err| Md2HtmlError::io(path, err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::{CONTENT_TOKEN, CSS_TOKEN, TITLE_TOKEN};

    #[test]
    fn empty_document_yields_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.render_url, "https://api.github.com/markdown");
        assert_eq!(config.anchor_prefix, "user-content-");
    }

    #[test]
    fn partial_document_overrides_only_given_keys() {
        let config = Config::from_toml_str(
            r#"
render_url = "http://127.0.0.1:9000/markdown"
anchor_prefix = ""
"#,
        )
        .unwrap();

        assert_eq!(config.render_url, "http://127.0.0.1:9000/markdown");
        assert_eq!(config.anchor_prefix, "");
        assert_eq!(config.stylesheet_url, default_stylesheet_url());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = Config::from_toml_str("render_endpoint = \"x\"").unwrap_err();
        assert!(matches!(err, Md2HtmlError::Config(_)));
    }

    #[test]
    fn load_resolves_asset_paths_relative_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("md2html.toml");
        fs::write(&config_path, "template = \"page.html\"\n").unwrap();

        let config = Config::load(&config_path).unwrap();
        assert_eq!(config.template, Some(dir.path().join("page.html")));
        assert_eq!(config.minimal_stylesheet, None);
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Config::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, Md2HtmlError::Io { .. }));
    }

    #[test]
    fn bundled_template_carries_every_token() {
        let assets = Assets::default();
        assert!(assets.template.contains(TITLE_TOKEN));
        assert!(assets.template.contains(CONTENT_TOKEN));
        assert!(assets.template.contains(CSS_TOKEN));
        assert!(!assets.minimal_stylesheet.is_empty());
    }

    #[test]
    fn assets_honour_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let css = dir.path().join("tiny.css");
        fs::write(&css, "p { margin: 0; }").unwrap();

        let config = Config {
            minimal_stylesheet: Some(css),
            ..Config::default()
        };
        let assets = Assets::load(&config).unwrap();

        assert_eq!(assets.minimal_stylesheet, "p { margin: 0; }");
        assert_eq!(assets.template, Assets::default().template);
    }
}

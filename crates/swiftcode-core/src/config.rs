//! Configuration management for SwiftCode.
//!
//! Loads configuration from ${SWIFTCODE_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::highlight::HighlightOptions;
use crate::reveal::FrameOptions;

/// Colors for each syntax category, as color names or `#rrggbb`.
///
/// Parsing happens in the renderer; the core only stores the names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub keyword: String,
    pub string: String,
    pub comment: String,
    pub plain: String,
    pub caret: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            keyword: "magenta".to_string(),
            string: "green".to_string(),
            comment: "darkgray".to_string(),
            plain: "white".to_string(),
            caret: "yellow".to_string(),
        }
    }
}

/// Log file configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive, e.g. "info" or "swiftcode_core=debug".
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Commented `config.toml` shipped with the binary.
///
/// `config init` writes it as is; `generate` and `save_delay_ms` use it as
/// the layout that values are merged into.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

/// Lays the values of `values_toml` over the commented template.
///
/// Keys the template lacks (an older or hand-edited file) are appended, so
/// nothing the user set is lost when `delay_ms` is saved.
fn merge_with_template(values_toml: &str) -> Result<String> {
    use toml_edit::DocumentMut;

    let mut doc: DocumentMut = default_config_template()
        .parse()
        .context("Failed to parse default config template")?;
    let values: DocumentMut = values_toml
        .parse()
        .context("Failed to parse config values")?;

    overlay_table(doc.as_table_mut(), values.as_table());
    Ok(doc.to_string())
}

/// Copies every value of `values` into `layout`, descending into
/// `[theme]`/`[log]` so their comments survive.
fn overlay_table(layout: &mut toml_edit::Table, values: &toml_edit::Table) {
    use toml_edit::Item;

    for (key, item) in values.iter() {
        match item {
            Item::None => {}
            Item::Table(section) if layout.get(key).is_some_and(Item::is_table) => {
                if let Some(Item::Table(existing)) = layout.get_mut(key) {
                    overlay_table(existing, section);
                }
            }
            _ => layout[key] = item.clone(),
        }
    }
}

pub mod paths {
    //! Path resolution for SwiftCode configuration and data directories.
    //!
    //! SWIFTCODE_HOME resolution order:
    //! 1. SWIFTCODE_HOME environment variable (if set)
    //! 2. ~/.config/swiftcode (default)
    //! 3. ./.swiftcode when no home directory can be determined

    use std::path::PathBuf;

    /// Returns the SwiftCode home directory.
    pub fn swiftcode_home() -> PathBuf {
        if let Ok(home) = std::env::var("SWIFTCODE_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".swiftcode"),
            |h| h.join(".config").join("swiftcode"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        swiftcode_home().join("config.toml")
    }

    /// Returns the directory holding log files.
    pub fn logs_dir() -> PathBuf {
        swiftcode_home().join("logs")
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Delay between revealed characters, in milliseconds.
    pub delay_ms: u64,

    /// Draw a caret after the last revealed character.
    pub show_caret: bool,

    /// Caret glyph.
    pub caret: String,

    /// Carry an unterminated string into the next line.
    pub carry_line_state: bool,

    /// Default language label (display only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default)]
    pub theme: ThemeConfig,

    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    const DEFAULT_DELAY_MS: u64 = 35;
    const DEFAULT_CARET: &str = "▋";
    /// Upper bound for `delay_ms`; larger values are clamped.
    pub const MAX_DELAY_MS: u64 = 10_000;

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Saves only the delay_ms field to the config file.
    pub fn save_delay_ms(delay_ms: u64) -> Result<()> {
        Self::save_delay_ms_to(&paths::config_path(), delay_ms)
    }

    /// Stores a new `delay_ms` at `path`, leaving every other setting alone.
    ///
    /// A missing file starts from the template. An existing one is first
    /// laid over the current template so new comments show up.
    pub fn save_delay_ms_to(path: &Path, delay_ms: u64) -> Result<()> {
        use toml_edit::{DocumentMut, value};

        let contents = if path.exists() {
            let user_config = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            merge_with_template(&user_config)?
        } else {
            default_config_template().to_string()
        };

        let mut doc: DocumentMut = contents
            .parse()
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        let delay_ms = delay_ms.min(Self::MAX_DELAY_MS);
        doc["delay_ms"] = value(i64::try_from(delay_ms).unwrap_or(i64::MAX));

        Self::write_config(path, &doc.to_string())
    }

    /// Per-character delay, clamped to [`Self::MAX_DELAY_MS`].
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms.min(Self::MAX_DELAY_MS))
    }

    pub fn highlight_options(&self) -> HighlightOptions {
        HighlightOptions {
            carry_line_state: self.carry_line_state,
        }
    }

    pub fn frame_options(&self) -> FrameOptions {
        FrameOptions {
            highlight: self.highlight_options(),
            show_caret: self.show_caret,
        }
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Generates a fresh config TOML from Rust defaults.
    ///
    /// Uses the embedded template for structure/comments and merges
    /// generated values from `Config::default()` into it.
    pub fn generate() -> Result<String> {
        let generated_toml = toml::to_string(&Config::default())
            .context("Failed to serialize default config to TOML")?;
        merge_with_template(&generated_toml)
    }

    /// Replaces `path` with `content` through a sibling `.toml.tmp` file and a
    /// rename, so a crash never leaves a half-written config.
    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create directory {}", dir.display()))?;
        }

        let staged = path.with_extension("toml.tmp");
        fs::write(&staged, content)
            .with_context(|| format!("Failed to write config to {}", staged.display()))?;
        fs::rename(&staged, path)
            .with_context(|| format!("Failed to move config into place at {}", path.display()))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delay_ms: Self::DEFAULT_DELAY_MS,
            show_caret: true,
            caret: Self::DEFAULT_CARET.to_string(),
            carry_line_state: false,
            language: None,
            theme: ThemeConfig::default(),
            log: LogConfig::default(),
        }
    }
}

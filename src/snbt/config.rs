use serde::{Deserialize, Serialize};

/// Layout options for SNBT output.
///
/// Compact output has no whitespace at all. Pretty output puts each compound
/// member on its own line, indented by `indent` spaces per level. Lists and
/// arrays with fewer than `inline_threshold` elements are also spread one
/// element per line; longer ones stay on a single line so big arrays don't
/// turn into thousands of lines.
///
/// ```
/// use blocknbt::SnbtConfig;
///
/// let config = SnbtConfig::pretty().with_indent(2).with_inline_threshold(4);
/// assert!(config.pretty_print);
/// assert_eq!(config.indent, 2);
/// ```
///
/// The config can be loaded from a file, missing fields take their defaults:
///
/// ```
/// # use blocknbt::SnbtConfig;
/// let config: SnbtConfig = serde_json::from_str(r#"{"pretty_print": true}"#).unwrap();
/// assert_eq!(config, SnbtConfig::pretty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnbtConfig {
    pub pretty_print: bool,
    /// Spaces per nesting level.
    pub indent: usize,
    pub inline_threshold: usize,
}

impl Default for SnbtConfig {
    fn default() -> Self {
        Self {
            pretty_print: false,
            indent: 4,
            inline_threshold: 8,
        }
    }
}

impl SnbtConfig {
    /// Compact output.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn pretty() -> Self {
        Self {
            pretty_print: true,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_pretty_print(mut self, pretty_print: bool) -> Self {
        self.pretty_print = pretty_print;
        self
    }

    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    #[must_use]
    pub fn with_inline_threshold(mut self, inline_threshold: usize) -> Self {
        self.inline_threshold = inline_threshold;
        self
    }
}

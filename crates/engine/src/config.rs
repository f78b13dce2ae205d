use derive_builder::Builder;
use std::fmt;
use std::path::PathBuf;
pub use word_tally_core::SortOrder;

/// Where the text to tally comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InputSource {
    Path(PathBuf),
    /// Read from standard input (`-` on the command line).
    #[default]
    Stdin,
}

impl InputSource {
    /// Path used in diagnostics.
    #[must_use]
    pub fn display_path(&self) -> PathBuf {
        match self {
            Self::Path(path) => path.clone(),
            Self::Stdin => PathBuf::from("<stdin>"),
        }
    }
}

impl From<PathBuf> for InputSource {
    fn from(path: PathBuf) -> Self {
        if path.as_os_str() == "-" {
            Self::Stdin
        } else {
            Self::Path(path)
        }
    }
}

impl From<&str> for InputSource {
    fn from(path: &str) -> Self {
        PathBuf::from(path).into()
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::Stdin => f.write_str("<stdin>"),
        }
    }
}

/// Options for a single tally run. Built once at startup and passed by
/// reference to every stage.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct TallyConfig {
    #[builder(default)]
    pub source: InputSource,
    /// Minimum letters per word, prefix included.
    #[builder(default = "1")]
    pub min_length: usize,
    /// Minimum occurrences for a word to be reported.
    #[builder(default = "1")]
    pub min_count: u64,
    #[builder(default)]
    pub order: SortOrder,
    #[builder(default)]
    pub ignore_case: bool,
    /// Literal prefix every counted word must start with. Empty means none.
    #[builder(default)]
    pub prefix: String,
}

impl TallyConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if self.min_count == Some(0) {
            return Err("min_count must be at least 1".to_string());
        }
        Ok(())
    }
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self {
            source: InputSource::default(),
            min_length: 1,
            min_count: 1,
            order: SortOrder::default(),
            ignore_case: false,
            prefix: String::new(),
        }
    }
}

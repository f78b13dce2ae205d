use clap::ValueEnum;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `count: word` lines
    #[default]
    Text,
    /// JSON array of `{count, word}` objects
    Json,
    /// `count,word` rows with a header
    Csv,
}

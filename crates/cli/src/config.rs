// crates/cli/src/config.rs
use crate::args::Args;
use word_tally_engine::config::{InputSource, SortOrder, TallyConfig, TallyConfigBuilder};
use word_tally_engine::error::EngineError;

impl TryFrom<&Args> for TallyConfig {
    type Error = EngineError;

    fn try_from(args: &Args) -> Result<Self, Self::Error> {
        TallyConfigBuilder::default()
            .source(InputSource::from(args.file.clone()))
            .min_length(args.min_length)
            .min_count(args.min_count)
            .order(SortOrder::from_ascending(args.ascending))
            .ignore_case(args.ignore_case)
            .prefix(args.prefix.clone())
            .build()
            .map_err(|e| EngineError::Config(e.to_string()))
    }
}

use crate::cli::SearchArgs;
use crate::error::{CliError, Result};
use mcnest::engine::config::{
    InitializeStrategy, SearchConfig, SearchConfigBuilder, SelectionPolicy,
};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

const DEFAULT_MAX_ROLLOUTS: usize = 4;
const DEFAULT_POLICY: SelectionPolicy = SelectionPolicy::Greedy;
const DEFAULT_STRATEGY: InitializeStrategy = InitializeStrategy::ZeroShot;

/// Search settings read from a TOML file. Every field is optional; CLI
/// arguments override file values, and built-in defaults fill the rest.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct PartialSearchConfig {
    #[serde(rename = "background-information")]
    pub background_information: Option<String>,
    #[serde(rename = "max-rollouts")]
    pub max_rollouts: Option<usize>,
    #[serde(rename = "selection-policy")]
    pub selection_policy: Option<SelectionPolicy>,
    #[serde(rename = "initialize-strategy")]
    pub initialize_strategy: Option<InitializeStrategy>,
    pub temperature: Option<f64>,
    pub seed: Option<u64>,
    #[serde(rename = "linker-unit")]
    pub linker_unit: Option<String>,
}

impl PartialSearchConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Reading search configuration from {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Merges file values with CLI overrides into a final core config and the
    /// linker unit for the built-in generator. `default_background` is used
    /// when neither the file nor the CLI supplies background text.
    pub fn merge_with_cli(
        self,
        args: &SearchArgs,
        default_background: String,
    ) -> Result<(SearchConfig, Option<String>)> {
        let mut builder = SearchConfigBuilder::new()
            .background_information(
                args.background
                    .clone()
                    .or(self.background_information)
                    .unwrap_or(default_background),
            )
            .max_rollouts(
                args.max_rollouts
                    .or(self.max_rollouts)
                    .unwrap_or(DEFAULT_MAX_ROLLOUTS),
            )
            .selection_policy(
                args.policy
                    .map(Into::into)
                    .or(self.selection_policy)
                    .unwrap_or(DEFAULT_POLICY),
            )
            .initialize_strategy(
                args.strategy
                    .map(Into::into)
                    .or(self.initialize_strategy)
                    .unwrap_or(DEFAULT_STRATEGY),
            );

        if let Some(temperature) = args.temperature.or(self.temperature) {
            builder = builder.temperature(temperature);
        }
        if let Some(seed) = args.seed.or(self.seed) {
            builder = builder.seed(seed);
        }

        let config = builder.build()?;
        let linker_unit = args.linker_unit.clone().or(self.linker_unit);
        Ok((config, linker_unit))
    }
}

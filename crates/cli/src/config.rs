// crates/cli/src/config.rs
use crate::args::Args;
use crate::input::{InputSource, resolve_inputs};
use crate::options::{Inclusion, OutputFormat, Statistic};
use crate::settings::DisplaySettings;
use derive_builder::Builder;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use text_stats_core::{EngineConfig, EngineConfigBuilder, LengthUnit};
use text_stats_shared_kernel::{
    ErrorContext, InfrastructureError, PresentationError, Result, TextStatsError,
};

pub const DEFAULT_COMMON_WORDS_LIMIT: usize = 10;

/// Resolved run configuration: CLI flags over config file over defaults.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub engine: EngineConfig,
    #[builder(default)]
    pub display: DisplaySettings,
    #[builder(default = "vec![InputSource::Stdin]")]
    pub inputs: Vec<InputSource>,

    #[builder(default = "OutputFormat::Table")]
    pub format: OutputFormat,
    #[builder(default = "DEFAULT_COMMON_WORDS_LIMIT")]
    pub common_words_limit: usize,
    #[builder(default)]
    pub total_row: bool,
    #[builder(default)]
    pub output_path: Option<PathBuf>,
    #[builder(default)]
    pub save_path: Option<PathBuf>,

    #[builder(default)]
    pub strict: bool,
    #[builder(default)]
    pub watch: bool,
    #[builder(default = "Duration::from_secs(1)")]
    pub watch_interval: Duration,
    #[builder(default)]
    pub compare: Option<(PathBuf, PathBuf)>,
}

/// Settings file contents (`--config`). Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FileConfig {
    pub tags: Option<Vec<String>>,
    pub words_per_minute: Option<u32>,
    pub length_unit: Option<LengthUnit>,
    pub show: Option<Vec<Statistic>>,
    pub spaces: Option<Inclusion>,
    pub markup: Option<Inclusion>,
    pub common_words_limit: Option<usize>,
}

impl FileConfig {
    /// Loads a JSON file (`.json`) or YAML file (anything else).
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| {
            TextStatsError::from(InfrastructureError::FileRead { path: path.to_path_buf(), source })
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let parsed = if is_json {
            serde_json::from_str(&contents).map_err(TextStatsError::from)
        } else {
            serde_yaml::from_str(&contents).map_err(TextStatsError::from)
        };
        let config: Self = parsed.with_context(|| format!("loading config {}", path.display()))?;
        log::info!("loaded settings from {}", path.display());
        Ok(config)
    }
}

impl Config {
    /// Builds the configuration from parsed arguments, reading `--config` if given.
    ///
    /// # Errors
    ///
    /// Returns an error when the config file is unreadable or a builder rejects its input.
    pub fn from_args(args: Args) -> Result<Self> {
        let file = match &args.counting.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };

        let engine = engine_config(&args, &file)?;
        let display = DisplaySettings {
            statistics: args
                .output
                .show
                .clone()
                .or_else(|| file.show.clone())
                .unwrap_or_else(|| Statistic::DEFAULT_SET.to_vec()),
            spaces: args.output.spaces.or(file.spaces).unwrap_or_default(),
            markup: args.output.markup.or(file.markup).unwrap_or_default(),
        };

        let compare = match args.comparison.compare.as_deref() {
            None => None,
            Some([old, new]) => Some((old.clone(), new.clone())),
            Some(other) => {
                return Err(PresentationError::InvalidValue {
                    flag: "--compare".to_string(),
                    value: format!("{} paths", other.len()),
                    reason: "expected exactly two snapshot files".to_string(),
                }
                .into());
            }
        };

        let inputs = resolve_inputs(&args.paths, args.text.as_deref());

        ConfigBuilder::default()
            .engine(engine)
            .display(display)
            .inputs(inputs)
            .format(args.output.format)
            .common_words_limit(
                args.output
                    .common_words_limit
                    .or(file.common_words_limit)
                    .unwrap_or(DEFAULT_COMMON_WORDS_LIMIT),
            )
            .total_row(args.output.total_row)
            .output_path(args.output.output)
            .save_path(args.output.save)
            .strict(args.behavior.strict)
            .watch(args.behavior.watch)
            .watch_interval(Duration::from_secs(args.behavior.watch_interval.unwrap_or(1)))
            .compare(compare)
            .build()
            .map_err(|e| PresentationError::ConfigBuildFailed(e.to_string()).into())
    }
}

fn engine_config(args: &Args, file: &FileConfig) -> Result<EngineConfig> {
    let defaults = EngineConfig::default();
    let counting = &args.counting;

    EngineConfigBuilder::default()
        .tags(
            counting
                .tags
                .clone()
                .or_else(|| file.tags.clone())
                .unwrap_or(defaults.tags),
        )
        .words_per_minute(
            counting
                .wpm
                .or(file.words_per_minute)
                .unwrap_or(defaults.words_per_minute),
        )
        .length_unit(
            counting
                .length_unit
                .map(LengthUnit::from)
                .or(file.length_unit)
                .unwrap_or(defaults.length_unit),
        )
        .build()
        .map_err(|e| PresentationError::ConfigBuildFailed(e.to_string()).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn defaults_without_flags() {
        let config = Config::from_args(parse(&["text_stats"])).unwrap();
        assert_eq!(config.engine, EngineConfig::default());
        assert_eq!(config.display, DisplaySettings::default());
        assert_eq!(config.inputs, [InputSource::Stdin]);
        assert_eq!(config.common_words_limit, DEFAULT_COMMON_WORDS_LIMIT);
        assert_eq!(config.watch_interval, Duration::from_secs(1));
    }

    #[test]
    fn cli_flags_override_file_values() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "wordsPerMinute: 120\ntags: [note]\nspaces: exclude\nlengthUnit: chars").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let config = Config::from_args(parse(&["text_stats", "--config", &path, "--wpm", "300"])).unwrap();
        assert_eq!(config.engine.words_per_minute, 300);
        assert_eq!(config.engine.tags, ["note"]);
        assert_eq!(config.engine.length_unit, LengthUnit::Chars);
        assert_eq!(config.display.spaces, Inclusion::Exclude);
    }

    #[test]
    fn json_config_is_detected_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"show": ["sentences"], "markup": "exclude"}}"#).unwrap();
        let loaded = FileConfig::load(file.path()).unwrap();
        assert_eq!(loaded.show, Some(vec![Statistic::Sentences]));
        assert_eq!(loaded.markup, Some(Inclusion::Exclude));
    }

    #[test]
    fn unknown_config_keys_are_rejected() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "wordsPerMinut: 100").unwrap();
        let err = FileConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("loading config"));
    }
}

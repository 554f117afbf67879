//! Convert command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use ssfconv_core::{
    collect_input_files, convert_files, convert_single, Converter, FailurePolicy, MembershipSets,
};
use std::path::{Path, PathBuf};

/// Arguments for the convert command
#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Input file, or directory to convert recursively
    #[arg(short, long, value_name = "PATH", required = true)]
    pub input: PathBuf,

    /// Output file, or output directory when the input is a directory
    #[arg(short, long, value_name = "PATH", required = true)]
    pub output: PathBuf,

    /// Separator between token and tag [default: _]
    #[arg(short, long, value_name = "SEP")]
    pub sep: Option<String>,

    /// Symbol list, one token per line [default: RD_SYM.txt]
    #[arg(long, value_name = "FILE")]
    pub symbols: Option<PathBuf>,

    /// Punctuation list, one token per line [default: RD_PUNC.txt]
    #[arg(long, value_name = "FILE")]
    pub punctuations: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Keep converting the remaining files when one file fails
    #[arg(short, long)]
    pub keep_going: bool,

    /// Suppress progress and log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Effective settings after merging arguments over the config file
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Separator between token and tag
    pub separator: String,
    /// Symbol list path
    pub symbols: PathBuf,
    /// Punctuation list path
    pub punctuations: PathBuf,
    /// Directory-mode failure handling
    pub policy: FailurePolicy,
}

impl ConvertArgs {
    /// Execute the convert command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting conversion");
        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        let settings = self.resolve(config)?;
        log::debug!("Settings: {:?}", settings);

        let sets = MembershipSets::from_files(&settings.symbols, &settings.punctuations)
            .context("Failed to load membership lists")?;
        let converter = Converter::new(&sets, settings.separator.as_str())?;

        if self.input.is_dir() {
            self.convert_tree(&converter, settings.policy)
        } else {
            let count = convert_single(&self.input, &self.output, &converter)
                .with_context(|| format!("Failed to convert {}", self.input.display()))?;
            log::info!("Wrote {} sentences to {}", count, self.output.display());
            Ok(())
        }
    }

    /// Merge command-line values over config file values
    pub fn resolve(&self, config: CliConfig) -> Result<Settings> {
        let separator = self.sep.clone().unwrap_or(config.conversion.separator);
        if separator.is_empty() {
            return Err(CliError::ConfigError("separator must not be empty".to_string()).into());
        }

        let policy = if self.keep_going || config.batch.keep_going {
            FailurePolicy::BestEffort
        } else {
            FailurePolicy::FailFast
        };

        Ok(Settings {
            separator,
            symbols: self
                .symbols
                .clone()
                .unwrap_or(config.conversion.symbols_file),
            punctuations: self
                .punctuations
                .clone()
                .unwrap_or(config.conversion.punctuations_file),
            policy,
        })
    }

    fn convert_tree(&self, converter: &Converter<'_>, policy: FailurePolicy) -> Result<()> {
        let mut progress = ProgressReporter::new(self.quiet);
        let files = collect_input_files(&self.input)?;
        log::info!("Found {} files under {}", files.len(), self.input.display());
        progress.init_files(files.len() as u64);

        let report = convert_files(
            &files,
            &self.output,
            converter,
            policy,
            |path: &Path| progress.file_completed(path),
        )
        .with_context(|| format!("Failed to convert directory {}", self.input.display()))?;
        progress.finish();

        for (path, error) in &report.failed {
            log::error!("{}: {}", path.display(), error);
        }
        log::info!(
            "Converted {} files into {}",
            report.converted.len(),
            self.output.display()
        );

        if !report.is_success() {
            return Err(CliError::BatchFailed {
                failed: report.failed.len(),
                total: report.failed.len() + report.converted.len(),
            }
            .into());
        }
        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }
    }
}

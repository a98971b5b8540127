use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use tracing::info;

use gridmeta_core::loader::{load_config, load_profile, load_request, LoaderError};
use gridmeta_core::pipeline::{execute_run, RunReport};
use gridmeta_core::{Profile, ResolutionConfig};

/// Resolve spacing for a run request and enforce a validation profile
#[derive(Debug, Parser)]
pub struct CheckCommand {
    /// Path to the run request YAML (spacing hints, bounding box, grid dimensions)
    #[arg(value_name = "REQUEST")]
    pub request_path: PathBuf,

    /// Path to the resolution config YAML
    #[arg(long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Path to the validation profile YAML (built-in sanity rules when omitted)
    #[arg(long, value_name = "PROFILE")]
    pub profile: Option<PathBuf>,

    /// Output format (human, json)
    #[arg(long, value_name = "FORMAT", default_value = "human")]
    pub output: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Human,
    Json,
}

impl CheckCommand {
    pub fn execute(&self) -> Result<i32> {
        let format = self.output_format()?;

        let request = match load_request(&self.request_path) {
            Ok(request) => request,
            Err(error) => return Ok(report_load_failure(error)),
        };
        let config = match &self.config {
            Some(path) => match load_config(path) {
                Ok(config) => config,
                Err(error) => return Ok(report_load_failure(error)),
            },
            None => ResolutionConfig::default(),
        };
        let profile = match &self.profile {
            Some(path) => match load_profile(path) {
                Ok(profile) => profile,
                Err(error) => return Ok(report_load_failure(error)),
            },
            None => Profile::fallback().clone(),
        };

        // Resolution failures are fatal: the run cannot proceed on partial
        // spacing.
        let report = match execute_run(&request, &config, &profile) {
            Ok(report) => report,
            Err(error) => {
                eprintln!("run failed: {error}");
                return Ok(2);
            }
        };
        for (axis, source) in report.outcome.trace.entries() {
            info!(axis = %axis, source = ?source, value = report.outcome.spacing.get(axis), "spacing");
        }

        self.report(format, &report)?;
        Ok(if report.passed() { 0 } else { 1 })
    }

    fn output_format(&self) -> Result<OutputFormat> {
        match self.output.as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => bail!("unsupported output format '{other}' (expected human or json)"),
        }
    }

    fn report(&self, format: OutputFormat, report: &RunReport) -> Result<()> {
        match format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(report)?);
            }
            OutputFormat::Human => {
                let outcome = &report.outcome;
                for (axis, source) in outcome.trace.entries() {
                    println!("d{axis} = {} ({source:?})", outcome.spacing.get(axis));
                }
                println!(
                    "spacing_hint = {}, domain_size = {}, resolution_density = {}",
                    outcome.derived.spacing_hint,
                    outcome.derived.domain_size,
                    outcome.derived.resolution_density
                );
                for violation in &report.evaluation.violations {
                    println!(
                        "violation [rule {}]: {}",
                        violation.rule_index, violation.message
                    );
                }
                for error in &report.evaluation.errors {
                    println!("error [rule {}]: {}", error.rule_index, error.error);
                }
                println!("{}", if report.passed() { "PASS" } else { "FAIL" });
            }
        }
        Ok(())
    }
}

fn report_load_failure(error: LoaderError) -> i32 {
    eprintln!("error: {:#}", anyhow::Error::new(error));
    2
}

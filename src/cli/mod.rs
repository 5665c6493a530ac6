//! # Command-line Interface
//!
//! `api-testgen [ENDPOINT]` prints suggested test cases followed by
//! executable test code for the endpoint.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::agent::{GenerationReport, TestGeneratorAgent};
use crate::ai::OfflineGenerator;
use crate::config::{Config, ConfigError};
use crate::storage;

pub const SAMPLE_ENDPOINT: &str = "GET /users/{id}";

const SEPARATOR_WIDTH: usize = 50;

#[derive(Debug, Parser)]
#[command(name = "api-testgen")]
#[command(about = "Generate API test cases and executable test code for an endpoint", long_about = None)]
pub struct CliArgs {
    /// Endpoint to analyze, e.g. "GET /users/{id}"
    #[arg(default_value = SAMPLE_ENDPOINT)]
    pub endpoint: String,

    /// Skip the AI call and use the built-in test case templates
    #[arg(long)]
    pub offline: bool,

    /// Model used for AI test case suggestions
    #[arg(long)]
    pub model: Option<String>,

    /// Path to a JSON config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also write the generated code (or JSON report) to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Output format for the generated report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl CliArgs {
    /// Config file and environment, with CLI flags applied last.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let mut config = Config::load(self.config.as_deref())?;
        if let Some(model) = &self.model {
            config.model = model.clone();
        }
        Ok(config)
    }

    pub fn build_agent(&self, config: Config) -> TestGeneratorAgent {
        if self.offline {
            TestGeneratorAgent::new(config, Box::new(OfflineGenerator))
        } else {
            TestGeneratorAgent::with_gemini(config)
        }
    }
}

pub fn render_text(report: &GenerationReport) -> String {
    let separator = "=".repeat(SEPARATOR_WIDTH);
    let mut lines = vec!["Generated test cases:".to_string()];
    lines.extend(report.test_cases.cases.iter().map(|case| format!("- {case}")));
    lines.push(String::new());
    lines.push(separator.clone());
    lines.push("EXECUTABLE TEST CODE:".to_string());
    lines.push(separator);
    lines.push(report.code.clone());
    lines.join("\n")
}

pub fn render_json(report: &GenerationReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

pub async fn run(args: CliArgs) -> anyhow::Result<()> {
    let config = args.resolve_config()?;
    let agent = args.build_agent(config);

    let report = agent.generate_report(&args.endpoint).await;

    match args.format {
        OutputFormat::Text => {
            println!("Welcome to Smart API Test Case Generator Agent!");
            println!("{}", render_text(&report));
            if let Some(path) = &args.output {
                storage::save_text(path, &report.code)?;
            }
        }
        OutputFormat::Json => {
            println!("{}", render_json(&report)?);
            if let Some(path) = &args.output {
                storage::save_json(path, &report)?;
            }
        }
    }

    Ok(())
}

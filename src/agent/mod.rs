//! # Test Generator Agent
//!
//! Ties endpoint analysis to description and code generation. The agent owns
//! the fallback policy: any failure of the text generator is logged and
//! replaced by the deterministic fallback descriptions.

use serde::Serialize;

use crate::ai::{GeminiClient, TextGenerator};
use crate::analyzer::{analyze, EndpointDescriptor};
use crate::config::Config;
use crate::testing::code::generate_code_with_base_url;
use crate::testing::descriptions::{build_prompt, extract_test_cases, fallback_test_cases};
use crate::testing::{DescriptionSource, TestCaseSuggestions};

pub const AGENT_NAME: &str = "Smart API Test Case Generator";

/// Everything produced for one endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationReport {
    pub endpoint: String,
    pub analysis: EndpointDescriptor,
    pub test_cases: TestCaseSuggestions,
    pub code: String,
}

pub struct TestGeneratorAgent {
    generator: Box<dyn TextGenerator>,
    config: Config,
}

impl TestGeneratorAgent {
    pub fn new(config: Config, generator: Box<dyn TextGenerator>) -> Self {
        tracing::info!(agent = AGENT_NAME, model = %config.model, "agent initialized");
        Self { generator, config }
    }

    /// Agent backed by the Gemini API using the given configuration.
    pub fn with_gemini(config: Config) -> Self {
        let client = GeminiClient::new(&config);
        Self::new(config, Box::new(client))
    }

    pub fn analyze_endpoint(&self, endpoint: &str) -> EndpointDescriptor {
        analyze(endpoint)
    }

    /// Suggest test case descriptions. Never fails: generator errors fall
    /// back to fixed templates.
    pub async fn generate_test_cases(&self, endpoint: &str) -> TestCaseSuggestions {
        let analysis = self.analyze_endpoint(endpoint);
        self.describe(endpoint, &analysis).await
    }

    pub fn generate_executable_test_code(&self, endpoint: &str) -> String {
        let analysis = self.analyze_endpoint(endpoint);
        generate_code_with_base_url(&analysis, &self.config.target_base_url)
    }

    /// Analyze once and produce both descriptions and code.
    pub async fn generate_report(&self, endpoint: &str) -> GenerationReport {
        let analysis = self.analyze_endpoint(endpoint);
        let test_cases = self.describe(endpoint, &analysis).await;
        let code = generate_code_with_base_url(&analysis, &self.config.target_base_url);

        GenerationReport {
            endpoint: endpoint.to_string(),
            analysis,
            test_cases,
            code,
        }
    }

    async fn describe(&self, endpoint: &str, analysis: &EndpointDescriptor) -> TestCaseSuggestions {
        let prompt = build_prompt(endpoint, analysis);

        match self.generator.generate_text(&prompt).await {
            Ok(text) => {
                let cases = extract_test_cases(&text);
                tracing::info!(count = cases.len(), "generated test cases");
                TestCaseSuggestions {
                    cases,
                    source: DescriptionSource::Ai,
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "AI generation failed, switching to fallback generation");
                TestCaseSuggestions {
                    cases: fallback_test_cases(analysis),
                    source: DescriptionSource::Fallback,
                }
            }
        }
    }
}

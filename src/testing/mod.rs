//! # Test Generation
//!
//! Test case descriptions (AI-suggested or fallback) and executable test code
//! rendered from fixed templates.

pub mod code;
pub mod descriptions;

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Category a generated test belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestCategory {
    Positive,
    Negative,
    Boundary,
    Security,
}

impl TestCategory {
    pub const ALL: [TestCategory; 4] = [
        TestCategory::Positive,
        TestCategory::Negative,
        TestCategory::Boundary,
        TestCategory::Security,
    ];
}

impl Display for TestCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TestCategory::Positive => "positive",
            TestCategory::Negative => "negative",
            TestCategory::Boundary => "boundary",
            TestCategory::Security => "security",
        };
        write!(f, "{label}")
    }
}

/// A single check emitted into a generated test function body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assertion {
    StatusEquals(u16),
    StatusIn(&'static [u16]),
    JsonNotNone,
    /// Trailing comment line, not an executable check.
    Note(&'static str),
}

impl Assertion {
    /// Render as one indented line of Python.
    pub fn render(&self) -> String {
        match self {
            Assertion::StatusEquals(code) => format!("    assert response.status_code == {code}"),
            Assertion::StatusIn(codes) => {
                let codes = codes.iter().map(u16::to_string).collect::<Vec<_>>().join(", ");
                format!("    assert response.status_code in [{codes}]")
            }
            Assertion::JsonNotNone => "    assert response.json() is not None".to_string(),
            Assertion::Note(text) => format!("    # {text}"),
        }
    }
}

/// Where a list of test case descriptions came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DescriptionSource {
    Ai,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCaseSuggestions {
    pub cases: Vec<String>,
    pub source: DescriptionSource,
}

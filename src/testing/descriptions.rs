use crate::analyzer::EndpointDescriptor;

use super::TestCategory;

/// Marker every test case line must carry.
pub const TEST_CASE_MARKER: &str = "Test Case";

/// Number of test cases requested from the text generator.
pub const REQUESTED_CASES: usize = 8;

struct FallbackCase {
    category: TestCategory,
    template: &'static str,
}

// Numbers are part of the text. Skipped boundary cases leave a gap on purpose
// so consumers can key on the literal "Test Case N" marker.
const FALLBACK_CASES: [FallbackCase; 8] = [
    FallbackCase {
        category: TestCategory::Positive,
        template: "Test Case 1: Valid {method} request - Retrieve existing {resource} with valid ID",
    },
    FallbackCase {
        category: TestCategory::Positive,
        template: "Test Case 2: Success response validation - Verify {method} {resource} returns correct data structure",
    },
    FallbackCase {
        category: TestCategory::Negative,
        template: "Test Case 3: Invalid ID format - {method} {resource} with non-numeric ID",
    },
    FallbackCase {
        category: TestCategory::Negative,
        template: "Test Case 4: Non-existent resource - {method} {resource} with ID that doesn't exist",
    },
    FallbackCase {
        category: TestCategory::Boundary,
        template: "Test Case 5: Boundary value testing - {method} {resource} with ID = 0",
    },
    FallbackCase {
        category: TestCategory::Boundary,
        template: "Test Case 6: Large ID value - {method} {resource} with very large ID number",
    },
    FallbackCase {
        category: TestCategory::Security,
        template: "Test Case 7: Authorization check - {method} {resource} without authentication token",
    },
    FallbackCase {
        category: TestCategory::Security,
        template: "Test Case 8: SQL injection attempt - {method} {resource} with malicious ID parameter",
    },
];

/// Build the instruction sent to the text generator.
pub fn build_prompt(endpoint: &str, descriptor: &EndpointDescriptor) -> String {
    let categories = TestCategory::ALL
        .iter()
        .enumerate()
        .map(|(i, category)| format!("{}. {} test cases", i + 1, capitalize(&category.to_string())))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Generate comprehensive API test cases for this endpoint: {endpoint}\n\
         Endpoint Details:\n\
         - HTTP Method: {method}\n\
         - Resource Type: {resource}\n\
         - Path Parameters: {params:?}\n\
         - Likely requires authentication: {auth}\n\
         \n\
         Include:\n\
         {categories}\n\
         \n\
         Format each test case on its own line as: \"{TEST_CASE_MARKER} X: Description\"\n\
         Provide exactly {REQUESTED_CASES} test cases.",
        method = descriptor.method,
        resource = descriptor.resource_type,
        params = descriptor.path_parameters,
        auth = descriptor.requires_auth,
    )
}

/// Keep only the non-empty lines of generated text that carry the marker.
pub fn extract_test_cases(text: &str) -> Vec<String> {
    text.trim()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && line.contains(TEST_CASE_MARKER))
        .map(str::to_string)
        .collect()
}

/// Deterministic descriptions used whenever the text generator is unavailable.
pub fn fallback_test_cases(descriptor: &EndpointDescriptor) -> Vec<String> {
    let method = descriptor.method.to_string();
    let has_params = !descriptor.path_parameters.is_empty();

    FALLBACK_CASES
        .iter()
        // Boundary cases exercise the ID parameter, so they need one to exist.
        .filter(|case| has_params || case.category != TestCategory::Boundary)
        .map(|case| {
            case.template
                .replace("{method}", &method)
                .replace("{resource}", &descriptor.resource_type)
        })
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

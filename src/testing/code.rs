use crate::analyzer::EndpointDescriptor;

use super::{Assertion, TestCategory};

/// Host written into generated code when no target base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.example.com";

/// The only placeholder substituted in generated URLs. Other parameter
/// names such as `{userId}` are left untouched.
pub const ID_PLACEHOLDER: &str = "{id}";

/// One generated test function, kept as data so categories can be added
/// without touching [`generate_code`].
pub struct CodeTemplate {
    pub category: TestCategory,
    pub id_value: &'static str,
    /// `{resource}` is replaced with the resource type.
    pub function_name: &'static str,
    /// `{method}` is replaced with the uppercase HTTP method.
    pub docstring: &'static str,
    pub assertions: &'static [Assertion],
}

pub const CODE_TEMPLATES: [CodeTemplate; 4] = [
    CodeTemplate {
        category: TestCategory::Positive,
        id_value: "123",
        function_name: "test_valid_{resource}_retrieval",
        docstring: "Test successful {method} request for {resource}",
        assertions: &[Assertion::StatusEquals(200), Assertion::JsonNotNone],
    },
    CodeTemplate {
        category: TestCategory::Negative,
        id_value: "invalid_id",
        function_name: "test_invalid_{resource}_id",
        docstring: "Test {method} request with invalid ID",
        assertions: &[Assertion::StatusIn(&[400, 404])],
    },
    CodeTemplate {
        category: TestCategory::Boundary,
        id_value: "0",
        function_name: "test_{resource}_boundary_id",
        docstring: "Test {method} request with boundary ID value",
        assertions: &[Assertion::StatusIn(&[400, 404])],
    },
    CodeTemplate {
        category: TestCategory::Security,
        // The backslash keeps the quote escaped inside the generated
        // single-quoted Python string.
        id_value: r"1\'; DROP TABLE users--",
        function_name: "test_{resource}_sql_injection",
        docstring: "Test {method} request for SQL injection vulnerability",
        assertions: &[
            Assertion::StatusIn(&[400, 403]),
            Assertion::Note("Should not return database error messages"),
        ],
    },
];

impl CodeTemplate {
    pub fn render(&self, descriptor: &EndpointDescriptor) -> Vec<String> {
        let method = descriptor.method.to_string();
        let resource = descriptor.resource_type.as_str();
        let endpoint = descriptor.path.replace(ID_PLACEHOLDER, self.id_value);

        let name = self.function_name.replace("{resource}", resource);
        let docstring = self
            .docstring
            .replace("{method}", &method)
            .replace("{resource}", resource);

        let mut lines = vec![
            format!("def {name}():"),
            format!("    \"\"\"{docstring}\"\"\""),
            format!("    url = BASE_URL + '{endpoint}'"),
            format!("    response = requests.{}(url)", descriptor.method.as_lower()),
        ];
        lines.extend(self.assertions.iter().map(Assertion::render));
        lines
    }
}

/// Render the full test module using the placeholder host.
pub fn generate_code(descriptor: &EndpointDescriptor) -> String {
    generate_code_with_base_url(descriptor, DEFAULT_BASE_URL)
}

pub fn generate_code_with_base_url(descriptor: &EndpointDescriptor, base_url: &str) -> String {
    let mut lines = vec![
        "import requests".to_string(),
        "import pytest".to_string(),
        String::new(),
        "# Generated API Test Cases".to_string(),
        format!("BASE_URL = '{base_url}'"),
        String::new(),
    ];

    for template in &CODE_TEMPLATES {
        lines.extend(template.render(descriptor));
        lines.push(String::new());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::analyze;

    #[test]
    fn sample_endpoint_substitutes_id_per_category() {
        let code = generate_code(&analyze("GET /users/{id}"));
        assert!(code.contains("url = BASE_URL + '/users/123'"));
        assert!(code.contains("url = BASE_URL + '/users/invalid_id'"));
        assert!(code.contains("url = BASE_URL + '/users/0'"));
        assert!(code.contains(r"url = BASE_URL + '/users/1\'; DROP TABLE users--'"));
    }

    #[test]
    fn preamble_is_fixed() {
        let code = generate_code(&analyze("GET /users/{id}"));
        assert!(code.starts_with(
            "import requests\nimport pytest\n\n# Generated API Test Cases\nBASE_URL = 'https://api.example.com'\n\ndef test_valid_users_retrieval():\n"
        ));
        assert!(code.ends_with("    # Should not return database error messages\n"));
    }

    #[test]
    fn positive_function_is_complete() {
        let code = generate_code(&analyze("GET /users/{id}"));
        let expected = "def test_valid_users_retrieval():\n    \"\"\"Test successful GET request for users\"\"\"\n    url = BASE_URL + '/users/123'\n    response = requests.get(url)\n    assert response.status_code == 200\n    assert response.json() is not None\n\n";
        assert!(code.contains(expected));
    }

    #[test]
    fn status_sets_match_categories() {
        let code = generate_code(&analyze("DELETE /orders/{id}"));
        assert!(code.contains("def test_invalid_orders_id():"));
        assert!(code.contains("def test_orders_boundary_id():"));
        assert!(code.contains("def test_orders_sql_injection():"));
        assert_eq!(code.matches("assert response.status_code in [400, 404]").count(), 2);
        assert_eq!(code.matches("assert response.status_code in [400, 403]").count(), 1);
        assert_eq!(code.matches("response = requests.delete(url)").count(), 4);
    }

    #[test]
    fn functions_are_separated_by_blank_lines() {
        let code = generate_code(&analyze("GET /users/{id}"));
        assert_eq!(code.matches("\n\ndef ").count(), 4);
    }

    #[test]
    fn other_parameter_names_are_not_substituted() {
        let code = generate_code(&analyze("GET /users/{userId}"));
        assert_eq!(code.matches("url = BASE_URL + '/users/{userId}'").count(), 4);
    }

    #[test]
    fn path_without_placeholder_is_used_unchanged() {
        let code = generate_code(&analyze("/products"));
        assert_eq!(code.matches("url = BASE_URL + '/products'").count(), 4);
        assert!(code.contains("def test_valid_products_retrieval():"));
    }

    #[test]
    fn generation_is_deterministic() {
        let descriptor = analyze("PATCH /carts/{id}");
        assert_eq!(generate_code(&descriptor), generate_code(&descriptor));
    }

    #[test]
    fn custom_base_url_replaces_placeholder_host() {
        let code = generate_code_with_base_url(&analyze("GET /users/{id}"), "http://localhost:8080");
        assert!(code.contains("BASE_URL = 'http://localhost:8080'"));
        assert!(!code.contains(DEFAULT_BASE_URL));
    }

    #[test]
    fn one_template_per_category() {
        let categories: Vec<_> = CODE_TEMPLATES.iter().map(|t| t.category).collect();
        assert_eq!(categories, TestCategory::ALL);
    }
}

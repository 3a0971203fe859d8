//! Health check result reported by a single probe.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::skip_serializing_none;

/// Category of the signal a check reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckType {
    /// The service itself.
    #[serde(rename = "SELF")]
    SelfCheck,
    Metrics,
    Infrastructure,
    InternalDependency,
    ExternalDependency,
    InternetConnectivity,
}

/// Escalation level attached to an unhealthy result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Critical,
    Warning,
    Down,
}

/// Upstream service a check's health is contingent on.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    #[serde(rename = "service_name")]
    pub name: Option<String>,
}

impl Dependency {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// Returns true if no upstream service is named.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }
}

/// Result of a single probe invocation.
///
/// Optional fields that are unset are omitted from the serialized object:
///
/// ```json
/// {
///   "actionable": true,
///   "healthy": false,
///   "name": "Upstream API",
///   "type": "EXTERNAL_DEPENDENCY",
///   "severity": "DOWN",
///   "message": "connection refused",
///   "dependent_on": { "service_name": "Upstream" },
///   "additional_info": { "address": "10.0.0.5:443" },
///   "link": "https://runbooks.example.com/upstream"
/// }
/// ```
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Whether an operator can act on this signal.
    pub actionable: bool,
    pub healthy: bool,
    pub name: String,
    #[serde(rename = "type")]
    pub check_type: CheckType,
    pub severity: Option<Severity>,
    pub message: Option<String>,
    #[serde(
        rename = "dependent_on",
        default,
        skip_serializing_if = "Dependency::is_empty"
    )]
    pub dependency: Dependency,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub additional_info: Map<String, Value>,
    /// URL with further diagnostics.
    pub link: Option<String>,
}

impl HealthCheckResponse {
    /// Creates a result with all optional fields unset.
    pub fn new(name: impl Into<String>, check_type: CheckType, healthy: bool) -> Self {
        Self {
            actionable: false,
            healthy,
            name: name.into(),
            check_type,
            severity: None,
            message: None,
            dependency: Dependency::default(),
            additional_info: Map::new(),
            link: None,
        }
    }

    pub fn healthy(name: impl Into<String>, check_type: CheckType) -> Self {
        Self::new(name, check_type, true)
    }

    pub fn unhealthy(name: impl Into<String>, check_type: CheckType) -> Self {
        Self::new(name, check_type, false)
    }

    pub fn with_actionable(mut self, actionable: bool) -> Self {
        self.actionable = actionable;
        self
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_dependency(mut self, name: impl Into<String>) -> Self {
        self.dependency = Dependency::new(name);
        self
    }

    /// Adds an entry to `additional_info`, replacing any previous value for `key`.
    pub fn with_info(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.additional_info.insert(key.into(), value.into());
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_response_omits_optional_fields() {
        let response = HealthCheckResponse::healthy("Sample Check", CheckType::SelfCheck)
            .with_actionable(true);

        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(
            value,
            json!({
                "actionable": true,
                "healthy": true,
                "name": "Sample Check",
                "type": "SELF"
            })
        );
    }

    #[test]
    fn test_full_response_uses_wire_key_names() {
        let response = HealthCheckResponse::unhealthy("Failing Check", CheckType::SelfCheck)
            .with_severity(Severity::Critical)
            .with_message("Something has gone really wrong!")
            .with_dependency("Upstream")
            .with_info("foo", "bar")
            .with_link("https://www.wolframalpha.com/input/?i=why+are+firetrucks+red%3F");

        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["severity"], "CRITICAL");
        assert_eq!(value["message"], "Something has gone really wrong!");
        assert_eq!(value["dependent_on"]["service_name"], "Upstream");
        assert_eq!(value["additional_info"]["foo"], "bar");
        assert!(
            value["link"]
                .as_str()
                .unwrap()
                .contains("wolframalpha")
        );
    }

    #[test]
    fn test_check_type_wire_names() {
        let names: Vec<Value> = [
            CheckType::SelfCheck,
            CheckType::Metrics,
            CheckType::Infrastructure,
            CheckType::InternalDependency,
            CheckType::ExternalDependency,
            CheckType::InternetConnectivity,
        ]
        .iter()
        .map(|t| serde_json::to_value(t).unwrap())
        .collect();

        assert_eq!(
            names,
            vec![
                json!("SELF"),
                json!("METRICS"),
                json!("INFRASTRUCTURE"),
                json!("INTERNAL_DEPENDENCY"),
                json!("EXTERNAL_DEPENDENCY"),
                json!("INTERNET_CONNECTIVITY"),
            ]
        );
    }

    #[test]
    fn test_severity_wire_names() {
        assert_eq!(serde_json::to_value(Severity::Critical).unwrap(), "CRITICAL");
        assert_eq!(serde_json::to_value(Severity::Warning).unwrap(), "WARNING");
        assert_eq!(serde_json::to_value(Severity::Down).unwrap(), "DOWN");
    }

    #[test]
    fn test_deserialize_without_optional_fields() {
        let response: HealthCheckResponse = serde_json::from_value(json!({
            "actionable": false,
            "healthy": false,
            "name": "Failing Check",
            "type": "INFRASTRUCTURE"
        }))
        .unwrap();

        assert_eq!(response.check_type, CheckType::Infrastructure);
        assert!(response.severity.is_none());
        assert!(response.dependency.is_empty());
        assert!(response.additional_info.is_empty());
    }

    #[test]
    fn test_explicit_empty_message_is_kept() {
        let response =
            HealthCheckResponse::healthy("Sample Check", CheckType::Metrics).with_message("");

        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["message"], "");
    }
}

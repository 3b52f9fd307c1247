use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

use super::NeedTag;

/// Which kind of project a prompt is generated for.
///
/// Unrecognized tags never fail to parse; they are held in `Other` and render
/// with the agent template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectType {
    Agent,
    WebApp,
    Mobile,
    Api,
    Workflow,
    Product,
    Team,
    Other(String),
}

impl ProjectType {
    pub fn parse(tag: &str) -> Self {
        match tag {
            "agent" => Self::Agent,
            "webapp" => Self::WebApp,
            "mobile" => Self::Mobile,
            "api" => Self::Api,
            "workflow" => Self::Workflow,
            "product" => Self::Product,
            "team" => Self::Team,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Agent => "agent",
            Self::WebApp => "webapp",
            Self::Mobile => "mobile",
            Self::Api => "api",
            Self::Workflow => "workflow",
            Self::Product => "product",
            Self::Team => "team",
            Self::Other(raw) => raw,
        }
    }

    pub fn is_team(&self) -> bool {
        matches!(self, Self::Team)
    }
}

impl From<String> for ProjectType {
    fn from(tag: String) -> Self {
        Self::parse(&tag)
    }
}

impl From<ProjectType> for String {
    fn from(project_type: ProjectType) -> Self {
        project_type.as_str().to_string()
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a prompt is generated from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDescriptor {
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub needs: Vec<NeedTag>,
}

impl ProjectDescriptor {
    pub fn new(project_type: ProjectType, name: impl Into<String>) -> Self {
        Self {
            project_type,
            name: name.into(),
            description: None,
            needs: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_needs<I>(mut self, needs: I) -> Self
    where
        I: IntoIterator<Item = NeedTag>,
    {
        self.needs = needs.into_iter().collect();
        self
    }

    /// Reads a descriptor from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read descriptor file {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid descriptor JSON in {}", path.display()))
    }

    /// Needs joined as `a, b, c`, the way they are quoted back to the model.
    pub fn needs_list(&self) -> String {
        self.needs
            .iter()
            .map(NeedTag::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn unknown_type_is_preserved() {
        let project_type = ProjectType::parse("desktop");
        assert_eq!(project_type, ProjectType::Other("desktop".to_string()));
        assert_eq!(project_type.as_str(), "desktop");
        assert!(!project_type.is_team());
    }

    #[test]
    fn deserializes_from_wire_shape() {
        let json = r#"{
            "type": "webapp",
            "name": "Shopfront",
            "needs": ["database", "payments", "quantum"]
        }"#;

        let descriptor: ProjectDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(descriptor.project_type, ProjectType::WebApp);
        assert_eq!(descriptor.name, "Shopfront");
        assert!(descriptor.description.is_none());
        assert_eq!(
            descriptor.needs,
            vec![
                NeedTag::Database,
                NeedTag::Payments,
                NeedTag::Other("quantum".to_string())
            ]
        );
    }

    #[test]
    fn serializes_type_under_type_key() {
        let descriptor = ProjectDescriptor::new(ProjectType::Team, "Crew");
        let value = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(value["type"], "team");
        assert_eq!(value["needs"], serde_json::json!([]));
        assert!(value.get("description").is_none());
    }

    #[test]
    fn needs_list_keeps_input_order() {
        let descriptor = ProjectDescriptor::new(ProjectType::Api, "Ledger")
            .with_needs([NeedTag::Search, NeedTag::Ai, NeedTag::Database]);
        assert_eq!(descriptor.needs_list(), "search, ai, database");
    }

    #[test]
    fn loads_descriptor_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"type": "mobile", "name": "Trails", "description": "Hiking log"}}"#
        )
        .unwrap();

        let descriptor = ProjectDescriptor::from_file(file.path()).unwrap();
        assert_eq!(descriptor.project_type, ProjectType::Mobile);
        assert_eq!(descriptor.description.as_deref(), Some("Hiking log"));
        assert!(descriptor.needs.is_empty());
    }

    #[test]
    fn rejects_malformed_descriptor_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(ProjectDescriptor::from_file(file.path()).is_err());
    }
}

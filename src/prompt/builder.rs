use log::{debug, info};
use std::sync::Arc;

use crate::ai::Enhancer;
use crate::project::{ProjectDescriptor, ProjectType};
use crate::prompt::templates;

/// Turns a project descriptor into a build prompt.
///
/// The base prompt is a pure function of the descriptor (and of whether an
/// enhancer is attached, which the team template checks). Enhancement is
/// attempted only when the attached enhancer reports itself configured.
#[derive(Clone, Default)]
pub struct PromptBuilder {
    enhancer: Option<Arc<dyn Enhancer>>,
}

impl PromptBuilder {
    pub fn new() -> Self {
        Self { enhancer: None }
    }

    pub fn with_enhancer(enhancer: Arc<dyn Enhancer>) -> Self {
        Self {
            enhancer: Some(enhancer),
        }
    }

    pub fn has_enhancer(&self) -> bool {
        self.enhancer.is_some()
    }

    pub fn build_base_prompt(&self, descriptor: &ProjectDescriptor) -> String {
        match &descriptor.project_type {
            ProjectType::WebApp => templates::webapp_prompt(descriptor),
            ProjectType::Mobile => templates::mobile_prompt(descriptor),
            ProjectType::Api => templates::api_prompt(descriptor),
            ProjectType::Workflow => templates::workflow_prompt(descriptor),
            ProjectType::Product => templates::product_prompt(descriptor),
            ProjectType::Agent | ProjectType::Team | ProjectType::Other(_) => {
                templates::agent_prompt(descriptor, self.has_enhancer())
            }
        }
    }

    pub async fn generate(&self, descriptor: &ProjectDescriptor) -> String {
        debug!(
            "Building {} prompt for {:?}",
            descriptor.project_type, descriptor.name
        );
        let base_prompt = self.build_base_prompt(descriptor);

        match &self.enhancer {
            Some(enhancer) if enhancer.is_configured() => {
                info!("Enhancing prompt for {:?}", descriptor.name);
                enhancer.enhance(descriptor, &base_prompt).await
            }
            _ => base_prompt,
        }
    }
}

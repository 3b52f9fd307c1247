use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::ai::GeminiClient;
use crate::cli::{Commands, OutputFormatter, ProjectArgs, Spinner};
use crate::config::{DefaultConfig, Settings};
use crate::project::{ProjectDescriptor, ProjectType};
use crate::prompt::{recommend_tools, PromptBuilder};
use crate::utils::validation::{is_plausible_api_key, mask_api_key, parse_needs};

pub struct CommandHandler {
    gemini: Arc<GeminiClient>,
    settings: Settings,
    formatter: OutputFormatter,
}

impl CommandHandler {
    pub fn new(settings: Settings, use_colors: bool) -> Self {
        let gemini = Arc::new(GeminiClient::new(&settings.gemini));
        let formatter = OutputFormatter::new(use_colors && settings.output.use_colors);

        Self {
            gemini,
            settings,
            formatter,
        }
    }

    pub async fn handle_command(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Generate {
                project,
                descriptor,
                no_enhance,
                output,
            } => {
                let descriptor = match descriptor {
                    Some(path) => ProjectDescriptor::from_file(&path)?,
                    None => Self::descriptor_from_args(project)?,
                };
                self.handle_generate(&descriptor, no_enhance, output.as_deref())
                    .await
            }
            Commands::Tools { needs } => Ok(self.handle_tools(&needs)),
            Commands::Recommend {
                project_type,
                needs,
            } => self.handle_recommend(&project_type, &needs).await,
            Commands::Init => self.handle_init(),
            Commands::Config => self.handle_config(),
            Commands::Doctor => self.handle_doctor(),
        }
    }

    fn descriptor_from_args(project: ProjectArgs) -> Result<ProjectDescriptor> {
        let project_type = project
            .project_type
            .context("Missing --type (or pass --descriptor)")?;
        let name = project.name.context("Missing --name (or pass --descriptor)")?;

        let mut descriptor = ProjectDescriptor::new(ProjectType::parse(&project_type), name)
            .with_needs(parse_needs(&project.needs));
        descriptor.description = project.description;

        Ok(descriptor)
    }

    /// A builder with the Gemini client attached whenever a key is present.
    /// Whether it actually enhances is decided by the length gate.
    fn prompt_builder(&self, no_enhance: bool) -> PromptBuilder {
        if no_enhance || !self.gemini.has_api_key() {
            PromptBuilder::new()
        } else {
            PromptBuilder::with_enhancer(self.gemini.clone())
        }
    }

    async fn handle_generate(
        &self,
        descriptor: &ProjectDescriptor,
        no_enhance: bool,
        output: Option<&Path>,
    ) -> Result<String> {
        debug!("Generating prompt for {descriptor:?}");
        let builder = self.prompt_builder(no_enhance);

        let prompt = if builder.has_enhancer() && self.gemini.is_configured() {
            let spinner = Spinner::new("Enhancing prompt with Gemini...");
            let prompt = builder.generate(descriptor).await;
            spinner.stop();
            prompt
        } else {
            builder.generate(descriptor).await
        };

        match output {
            Some(path) => {
                fs::write(path, &prompt)
                    .with_context(|| format!("Failed to write prompt to {}", path.display()))?;
                info!("Prompt written to {}", path.display());
                Ok(self
                    .formatter
                    .format_success(&format!("Prompt written to {}", path.display())))
            }
            None => Ok(prompt),
        }
    }

    fn handle_tools(&self, needs: &str) -> String {
        self.formatter.format_tools(&recommend_tools(&parse_needs(needs)))
    }

    async fn handle_recommend(&self, project_type: &str, needs: &str) -> Result<String> {
        if !self.gemini.is_configured() {
            return Ok(self.formatter.format_warning(
                "Gemini API key not configured. Set GEMINI_API_KEY or run 'archprompt init'.",
            ));
        }

        // Only type and needs go into the analysis request.
        let descriptor = ProjectDescriptor::new(ProjectType::parse(project_type), "")
            .with_needs(parse_needs(needs));

        let spinner = Spinner::new("Asking Gemini for recommendations...");
        let recommendations = self.gemini.get_recommendations(&descriptor).await;
        spinner.stop();

        Ok(recommendations.unwrap_or_else(|| {
            self.formatter
                .format_warning("No recommendations returned. Check the log output for details.")
        }))
    }

    fn handle_init(&self) -> Result<String> {
        let config_path = Settings::get_config_path_static()?;

        if config_path.exists() {
            return Ok(self.formatter.format_info(&format!(
                "Config already exists at {}",
                config_path.display()
            )));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&config_path, DefaultConfig::create_default_config_file())
            .with_context(|| format!("Failed to write {}", config_path.display()))?;

        info!("Wrote default config to {}", config_path.display());
        Ok(self.formatter.format_success(&format!(
            "Config written to {}",
            config_path.display()
        )))
    }

    fn handle_config(&self) -> Result<String> {
        let api_key = match self.settings.gemini.api_key.as_deref() {
            Some(key) if self.gemini.is_configured() => mask_api_key(key),
            Some(key) => format!("{} (fails length check)", mask_api_key(key)),
            None => "not set".to_string(),
        };

        Ok(format!(
            "archprompt Configuration:\n\
            - Config file: {}\n\
            - Gemini endpoint: {}\n\
            - Gemini model: {}\n\
            - API key: {}\n\
            - Use colors: {}",
            self.settings.get_config_path()?.display(),
            self.settings.gemini.base_url,
            self.gemini.model(),
            api_key,
            self.settings.output.use_colors
        ))
    }

    fn handle_doctor(&self) -> Result<String> {
        let mut diagnostics = Vec::new();

        let config_path = self.settings.get_config_path()?;
        if config_path.exists() {
            diagnostics.push(format!("✓ Config file found at {}", config_path.display()));
        } else {
            diagnostics.push("✗ Config file missing (run: archprompt init)".to_string());
        }

        match self.settings.gemini.api_key.as_deref() {
            Some(key) if is_plausible_api_key(key) => {
                diagnostics.push("✓ Gemini API key configured".to_string())
            }
            Some(_) => diagnostics.push(
                "✗ Gemini API key looks wrong (expected 21-99 characters)".to_string(),
            ),
            None => diagnostics
                .push("✗ Gemini API key missing (prompts will not be enhanced)".to_string()),
        }

        Ok(format!("archprompt Health Check:\n{}", diagnostics.join("\n")))
    }

    pub fn format_error(&self, message: &str) -> String {
        self.formatter.format_error(message)
    }
}

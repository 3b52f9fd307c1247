use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "archprompt")]
#[command(about = "Opinionated build prompts for AI coding tools")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Gemini API key (overrides GEMINI_API_KEY and the config file)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a build prompt
    Generate {
        #[command(flatten)]
        project: ProjectArgs,

        /// Read the project descriptor from a JSON file instead
        #[arg(long, conflicts_with_all = ["project_type", "name", "description", "needs"])]
        descriptor: Option<PathBuf>,

        /// Skip Gemini enhancement even when a key is configured
        #[arg(long)]
        no_enhance: bool,

        /// Write the prompt to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List tool recommendations for a set of needs
    Tools {
        /// Comma-separated needs, e.g. database,payments
        #[arg(long, default_value = "")]
        needs: String,
    },
    /// Ask Gemini for a short architectural analysis
    Recommend {
        /// Project type
        #[arg(long = "type", default_value = "agent")]
        project_type: String,

        /// Comma-separated needs
        #[arg(long, default_value = "")]
        needs: String,
    },
    /// Write a starter config file
    Init,
    /// Show configuration
    Config,
    /// Run diagnostics
    Doctor,
}

#[derive(Args, Debug, Clone)]
pub struct ProjectArgs {
    /// Project type: agent, webapp, mobile, api, workflow, product, team
    #[arg(long = "type", required_unless_present = "descriptor")]
    pub project_type: Option<String>,

    /// Project name
    #[arg(long, required_unless_present = "descriptor")]
    pub name: Option<String>,

    /// What the project is for
    #[arg(long)]
    pub description: Option<String>,

    /// Comma-separated needs, e.g. user_auth,database,payments
    #[arg(long, default_value = "")]
    pub needs: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_generate_flags() {
        let cli = Cli::try_parse_from([
            "archprompt",
            "generate",
            "--type",
            "webapp",
            "--name",
            "Shop",
            "--needs",
            "database,payments",
            "--no-enhance",
        ])
        .unwrap();

        match cli.command {
            Commands::Generate {
                project,
                no_enhance,
                descriptor,
                ..
            } => {
                assert_eq!(project.project_type.as_deref(), Some("webapp"));
                assert_eq!(project.name.as_deref(), Some("Shop"));
                assert_eq!(project.needs, "database,payments");
                assert!(no_enhance);
                assert!(descriptor.is_none());
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn generate_requires_name_without_descriptor() {
        assert!(Cli::try_parse_from(["archprompt", "generate", "--type", "api"]).is_err());
        assert!(
            Cli::try_parse_from(["archprompt", "generate", "--descriptor", "project.json"]).is_ok()
        );
    }
}

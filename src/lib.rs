pub mod ai;
pub mod cli;
pub mod config;
pub mod project;
pub mod prompt;
pub mod utils;

pub use ai::{Enhancer, GeminiClient, GeminiError};
pub use cli::{Cli, CommandHandler, Commands};
pub use config::Settings;
pub use project::{NeedTag, ProjectDescriptor, ProjectType};
pub use prompt::{recommend_tools, PromptBuilder};

pub mod builder;
pub mod templates;
pub mod tools;

pub use builder::PromptBuilder;
pub use tools::recommend_tools;

pub mod enhancer;
pub mod error;
pub mod gemini_client;
pub mod reasoning;

pub use enhancer::Enhancer;
pub use error::GeminiError;
pub use gemini_client::GeminiClient;

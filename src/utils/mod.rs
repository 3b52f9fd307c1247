pub mod validation;

pub use validation::{is_plausible_api_key, parse_needs};

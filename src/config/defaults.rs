use crate::config::settings::{DEFAULT_BASE_URL, DEFAULT_MODEL};

pub struct DefaultConfig;

impl DefaultConfig {
    pub fn create_default_config_file() -> String {
        format!(
            r#"[gemini]
# Gemini API key. GEMINI_API_KEY or --api-key take precedence.
# api_key = ""
base_url = "{DEFAULT_BASE_URL}"
model = "{DEFAULT_MODEL}"

[output]
use_colors = true
"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    #[test]
    fn starter_file_parses_to_defaults() {
        let starter = DefaultConfig::create_default_config_file();
        let settings: Settings = toml::from_str(&starter).unwrap();
        assert_eq!(settings, Settings::default());
    }
}

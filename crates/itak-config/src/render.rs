use serde::{Deserialize, Serialize};

fn default_locale() -> String {
    "ja".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct RenderConfig {
    /// Target wiki, "en" or "ja"
    #[serde(default = "default_locale")]
    pub locale: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
        }
    }
}

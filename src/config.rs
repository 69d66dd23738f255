use serde::Deserialize;
use thiserror::Error;
use web_sys::window;

/// Id of the `<script type="application/json">` block in index.html.
pub const CONFIG_SCRIPT_ID: &str = "site-config";

pub const DEFAULT_PARTICLE_COUNT: usize = 2000;
const MAX_PARTICLE_COUNT: usize = 20_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no window/document")]
    NoDocument,
    #[error("malformed site-config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub brand: String,
    pub contact_email: String,
    pub github_url: String,
    pub linkedin_url: String,
    pub particle_count: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "AudioAI".into(),
            contact_email: "contact@audioai.com".into(),
            github_url: "https://github.com".into(),
            linkedin_url: "https://linkedin.com".into(),
            particle_count: DEFAULT_PARTICLE_COUNT,
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let mut cfg: SiteConfig = serde_json::from_str(json)?;
        cfg.particle_count = cfg.particle_count.clamp(1, MAX_PARTICLE_COUNT);
        Ok(cfg)
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.contact_email)
    }
}

/// Missing or empty script block means "use defaults", not an error.
pub fn load_site_config() -> Result<SiteConfig, ConfigError> {
    let doc = window()
        .and_then(|w| w.document())
        .ok_or(ConfigError::NoDocument)?;

    let json = doc
        .get_element_by_id(CONFIG_SCRIPT_ID)
        .and_then(|el| el.text_content())
        .unwrap_or_default();

    if json.trim().is_empty() {
        return Ok(SiteConfig::default());
    }

    let cfg = SiteConfig::from_json(&json)?;
    gloo::console::log!(format!("site-config loaded ({} particles)", cfg.particle_count));
    Ok(cfg)
}

use anyhow::Context;
use serde::Deserialize;
use tracing::Level;

/// Delays, in milliseconds, between an action and its follow-up effect.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Timings {
    pub signup_close_ms: u32,
    pub login_close_ms: u32,
    pub generation_ms: u32,
    pub toast_display_ms: u32,
    pub toast_exit_ms: u32,
    pub ripple_ms: u32,
    pub logout_reload_ms: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            signup_close_ms: 2000,
            login_close_ms: 1500,
            generation_ms: 2500,
            toast_display_ms: 3000,
            toast_exit_ms: 300,
            ripple_ms: 600,
            logout_reload_ms: 1000,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub image_service_url: String,
    pub image_width: u32,
    pub image_height: u32,
    pub grayscale: bool,
    pub log_level: String,
    pub timings: Timings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            image_service_url: "https://picsum.photos".into(),
            image_width: 600,
            image_height: 400,
            grayscale: true,
            log_level: "info".into(),
            timings: Timings::default(),
        }
    }
}

impl AppConfig {
    /// Reads overrides baked in at build time. A browser has no process
    /// environment, so `option_env!` stands in for `std::env::var`.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| {
            match key {
                "PIXAI_IMAGE_SERVICE_URL" => option_env!("PIXAI_IMAGE_SERVICE_URL"),
                "PIXAI_IMAGE_WIDTH" => option_env!("PIXAI_IMAGE_WIDTH"),
                "PIXAI_IMAGE_HEIGHT" => option_env!("PIXAI_IMAGE_HEIGHT"),
                "PIXAI_GRAYSCALE" => option_env!("PIXAI_GRAYSCALE"),
                "PIXAI_LOG_LEVEL" => option_env!("PIXAI_LOG_LEVEL"),
                _ => None,
            }
            .map(str::to_string)
        })
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let image_service_url = lookup("PIXAI_IMAGE_SERVICE_URL")
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.image_service_url);
        let image_width = match lookup("PIXAI_IMAGE_WIDTH") {
            Some(raw) => raw.trim().parse().context("invalid PIXAI_IMAGE_WIDTH")?,
            None => defaults.image_width,
        };
        let image_height = match lookup("PIXAI_IMAGE_HEIGHT") {
            Some(raw) => raw.trim().parse().context("invalid PIXAI_IMAGE_HEIGHT")?,
            None => defaults.image_height,
        };
        let grayscale = match lookup("PIXAI_GRAYSCALE") {
            Some(raw) => raw.trim().parse().context("invalid PIXAI_GRAYSCALE")?,
            None => defaults.grayscale,
        };
        let log_level = match lookup("PIXAI_LOG_LEVEL") {
            Some(raw) => {
                let raw = raw.trim().to_string();
                raw.parse::<Level>()
                    .map_err(|e| anyhow::anyhow!("invalid PIXAI_LOG_LEVEL: {}", e))?;
                raw
            }
            None => defaults.log_level,
        };

        Ok(Self {
            image_service_url,
            image_width,
            image_height,
            grayscale,
            log_level,
            timings: defaults.timings,
        })
    }

    pub fn level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::INFO)
    }
}

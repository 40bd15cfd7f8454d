//! Placeholder "generation": prompt and style map to a fixed stock image.

use chrono::{DateTime, Utc};
use derive_more::Display;
use tracing::{debug, info};

use crate::auth::trim_input;
use crate::config::AppConfig;
use crate::error::GenerationError;
use crate::user::SessionUser;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum ArtStyle {
    #[default]
    #[display("realistic")]
    Realistic,
    #[display("anime")]
    Anime,
    #[display("digital-art")]
    DigitalArt,
    #[display("oil-painting")]
    OilPainting,
    #[display("watercolor")]
    Watercolor,
    #[display("cyberpunk")]
    Cyberpunk,
}

impl ArtStyle {
    pub const ALL: [ArtStyle; 6] = [
        ArtStyle::Realistic,
        ArtStyle::Anime,
        ArtStyle::DigitalArt,
        ArtStyle::OilPainting,
        ArtStyle::Watercolor,
        ArtStyle::Cyberpunk,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ArtStyle::Realistic => "Realistic",
            ArtStyle::Anime => "Anime",
            ArtStyle::DigitalArt => "Digital Art",
            ArtStyle::OilPainting => "Oil Painting",
            ArtStyle::Watercolor => "Watercolor",
            ArtStyle::Cyberpunk => "Cyberpunk",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.to_string() == id)
    }
}

/// Sum of the prompt's UTF-16 code units.
pub fn prompt_seed(prompt: &str) -> u64 {
    prompt.encode_utf16().map(u64::from).sum()
}

pub fn image_url(config: &AppConfig, seed: u64, style: ArtStyle) -> String {
    format!(
        "{}/seed/{}{}/{}/{}{}",
        config.image_service_url,
        seed,
        style,
        config.image_width,
        config.image_height,
        if config.grayscale { "?grayscale" } else { "" }
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub image_url: String,
    pub prompt: String,
    pub style: ArtStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Generating { prompt: String, style: ArtStyle },
    Displaying,
}

/// Accepted request waiting for its artificial delay to elapse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingGeneration {
    pub prompt: String,
    pub style: ArtStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub url: String,
    pub filename: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

/// `idle -> generating -> displaying`, plus the last finished image.
///
/// The last image outlives a new request: until that request completes,
/// download and share still refer to the previous result.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationFlow {
    phase: Phase,
    image: Option<GeneratedImage>,
}

impl Default for GenerationFlow {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            image: None,
        }
    }
}

impl GenerationFlow {
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn image(&self) -> Option<&GeneratedImage> {
        self.image.as_ref()
    }

    pub fn is_generating(&self) -> bool {
        matches!(self.phase, Phase::Generating { .. })
    }

    pub fn actions_visible(&self) -> bool {
        self.phase == Phase::Displaying
    }

    pub fn begin(
        &mut self,
        prompt: &str,
        style: ArtStyle,
    ) -> Result<PendingGeneration, GenerationError> {
        let prompt = trim_input(prompt);
        if prompt.is_empty() {
            return Err(GenerationError::EmptyPrompt);
        }

        debug!(%style, "generation started");
        self.phase = Phase::Generating {
            prompt: prompt.to_string(),
            style,
        };
        Ok(PendingGeneration {
            prompt: prompt.to_string(),
            style,
        })
    }

    pub fn complete(&mut self, pending: PendingGeneration, config: &AppConfig) -> GeneratedImage {
        let seed = prompt_seed(&pending.prompt);
        let image = GeneratedImage {
            image_url: image_url(config, seed, pending.style),
            prompt: pending.prompt,
            style: pending.style,
        };
        info!(seed, url = %image.image_url, "image generated");
        self.phase = Phase::Displaying;
        self.image = Some(image.clone());
        image
    }

    pub fn download(&self, now: DateTime<Utc>) -> Result<DownloadRequest, GenerationError> {
        let image = self.image.as_ref().ok_or(GenerationError::NoImage)?;
        Ok(DownloadRequest {
            url: image.image_url.clone(),
            filename: format!("ai-art-{}.jpg", now.timestamp_millis()),
        })
    }

    /// Saving only needs a session; nothing is written.
    pub fn save(&self, session: Option<&SessionUser>) -> Result<(), GenerationError> {
        match session {
            Some(_) => Ok(()),
            None => Err(GenerationError::NotLoggedIn),
        }
    }

    pub fn share_payload(&self, page_url: &str) -> SharePayload {
        let prompt = self.image.as_ref().map_or("", |i| i.prompt.as_str());
        SharePayload {
            title: "My AI Art Creation".into(),
            text: format!("Check out this AI art I created: {prompt}"),
            url: page_url.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn seed_sums_code_units() {
        assert_eq!(prompt_seed("cat"), 312);
        assert_eq!(prompt_seed(""), 0);
        // U+1F600 is the surrogate pair D83D DE00
        assert_eq!(prompt_seed("😀"), 0xD83D + 0xDE00);
    }

    #[test]
    fn url_is_deterministic() {
        let config = AppConfig::default();
        assert_eq!(
            image_url(&config, 312, ArtStyle::Anime),
            "https://picsum.photos/seed/312anime/600/400?grayscale"
        );

        let mut a = GenerationFlow::default();
        let mut b = GenerationFlow::default();
        let first = a.begin("a red fox", ArtStyle::Watercolor).unwrap();
        let second = b.begin("a red fox", ArtStyle::Watercolor).unwrap();
        assert_eq!(
            a.complete(first, &config).image_url,
            b.complete(second, &config).image_url
        );
    }

    #[test]
    fn style_changes_url() {
        let config = AppConfig::default();
        assert_ne!(
            image_url(&config, 312, ArtStyle::Anime),
            image_url(&config, 312, ArtStyle::Cyberpunk)
        );
    }

    #[test]
    fn grayscale_flag_can_be_disabled() {
        let config = AppConfig {
            grayscale: false,
            ..AppConfig::default()
        };
        assert_eq!(
            image_url(&config, 1, ArtStyle::Realistic),
            "https://picsum.photos/seed/1realistic/600/400"
        );
    }

    #[test]
    fn empty_prompt_stays_idle() {
        let mut flow = GenerationFlow::default();
        assert_eq!(
            flow.begin("   ", ArtStyle::Anime),
            Err(GenerationError::EmptyPrompt)
        );
        assert_eq!(
            flow.begin("\u{FEFF}\n", ArtStyle::Anime),
            Err(GenerationError::EmptyPrompt)
        );
        assert_eq!(flow.phase(), &Phase::Idle);
        assert!(flow.image().is_none());
    }

    #[test]
    fn phases_advance() {
        let config = AppConfig::default();
        let mut flow = GenerationFlow::default();
        let pending = flow.begin(" cat ", ArtStyle::Anime).unwrap();
        assert_eq!(pending.prompt, "cat");
        assert!(flow.is_generating());
        assert!(!flow.actions_visible());

        let image = flow.complete(pending, &config);
        assert_eq!(flow.phase(), &Phase::Displaying);
        assert!(flow.actions_visible());
        assert_eq!(image.image_url, "https://picsum.photos/seed/312anime/600/400?grayscale");
        assert_eq!(flow.image(), Some(&image));
    }

    #[test]
    fn previous_image_survives_new_request() {
        let config = AppConfig::default();
        let mut flow = GenerationFlow::default();
        let pending = flow.begin("cat", ArtStyle::Anime).unwrap();
        let first = flow.complete(pending, &config);

        flow.begin("dog", ArtStyle::Anime).unwrap();
        assert!(!flow.actions_visible());
        assert_eq!(flow.image(), Some(&first));
    }

    #[test]
    fn download_requires_an_image() {
        let now = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        let mut flow = GenerationFlow::default();
        assert_eq!(flow.download(now), Err(GenerationError::NoImage));

        let pending = flow.begin("cat", ArtStyle::Anime).unwrap();
        flow.complete(pending, &AppConfig::default());
        let request = flow.download(now).unwrap();
        assert_eq!(request.filename, "ai-art-1700000000123.jpg");
        assert!(request.url.contains("/seed/312anime/"));
    }

    #[test]
    fn save_requires_a_session() {
        let flow = GenerationFlow::default();
        assert_eq!(flow.save(None), Err(GenerationError::NotLoggedIn));
        let ann = SessionUser {
            name: "Ann".into(),
            email: "ann@x.com".into(),
        };
        assert_eq!(flow.save(Some(&ann)), Ok(()));
    }

    #[test]
    fn share_text_names_the_prompt() {
        let mut flow = GenerationFlow::default();
        let pending = flow.begin("cat", ArtStyle::Anime).unwrap();
        flow.complete(pending, &AppConfig::default());
        let payload = flow.share_payload("https://pixai.example/");
        assert_eq!(payload.title, "My AI Art Creation");
        assert_eq!(payload.text, "Check out this AI art I created: cat");
        assert_eq!(payload.url, "https://pixai.example/");
    }

    #[test]
    fn style_ids_round_trip() {
        for style in ArtStyle::ALL {
            assert_eq!(ArtStyle::from_id(&style.to_string()), Some(style));
        }
        assert_eq!(ArtStyle::from_id("sketch"), None);
    }
}

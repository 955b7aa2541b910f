//! Content for the panels that load after first paint.

use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

pub const TRUST_SOURCE: &str = include_str!("../assets/trust.json");
pub const ROI_SOURCE: &str = include_str!("../assets/roi.json");

#[derive(Clone, Debug, Error, PartialEq)]
pub enum PanelError {
    #[error("{panel} content is malformed: {reason}")]
    Malformed { panel: &'static str, reason: String },
    #[error("{panel} content is empty")]
    Empty { panel: &'static str },
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Stat {
    pub icon: String,
    pub value: String,
    pub label: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
    pub company: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct TrustContent {
    pub stats: Vec<Stat>,
    pub testimonials: Vec<Testimonial>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct RoiCopy {
    pub title: String,
    pub budget_label: String,
    pub roi_label: String,
    pub result_label: String,
    pub caption: String,
}

pub trait PanelContent: DeserializeOwned {
    const NAME: &'static str;

    fn validate(&self) -> Result<(), PanelError> {
        Ok(())
    }
}

impl PanelContent for TrustContent {
    const NAME: &'static str = "trust signals";

    fn validate(&self) -> Result<(), PanelError> {
        if self.stats.is_empty() && self.testimonials.is_empty() {
            return Err(PanelError::Empty { panel: Self::NAME });
        }
        Ok(())
    }
}

impl PanelContent for RoiCopy {
    const NAME: &'static str = "roi calculator";
}

pub fn decode<T: PanelContent>(source: &str) -> Result<T, PanelError> {
    let content: T = serde_json::from_str(source).map_err(|e| PanelError::Malformed {
        panel: T::NAME,
        reason: e.to_string(),
    })?;
    content.validate()?;
    Ok(content)
}

/// Yields to the event loop once before decoding, so the placeholder gets a
/// frame while the panel is prepared.
pub async fn load<T: PanelContent>(source: &'static str) -> Result<T, PanelError> {
    TimeoutFuture::new(0).await;
    decode(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_trust_content_decodes() {
        let content: TrustContent = decode(TRUST_SOURCE).expect("trust.json");
        assert_eq!(content.stats.len(), 4);
        assert_eq!(content.testimonials.len(), 2);
        assert_eq!(content.stats[0].value, "180%");
    }

    #[test]
    fn bundled_roi_copy_decodes() {
        let copy: RoiCopy = decode(ROI_SOURCE).expect("roi.json");
        assert_eq!(copy.title, "ROI Calculator");
    }

    #[test]
    fn malformed_json_is_reported_with_panel_name() {
        let err = decode::<TrustContent>("{\"stats\": [").unwrap_err();
        assert!(matches!(err, PanelError::Malformed { panel: "trust signals", .. }));
        assert!(err.to_string().starts_with("trust signals content is malformed"));
    }

    #[test]
    fn empty_trust_content_is_rejected() {
        let err = decode::<TrustContent>(r#"{"stats": [], "testimonials": []}"#).unwrap_err();
        assert_eq!(err, PanelError::Empty { panel: "trust signals" });
    }
}

use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const SITE_NAME: &str = "Global Sustainable Initiative";

/// Receives contact form drafts.
pub const CONTACT_RECIPIENT: &str = "karthikeya.gsi@gmail.com";
/// Receives chat widget drafts and support mail.
pub const SUPPORT_RECIPIENT: &str = "customerrelations.gsi@gmail.com";
pub const PRIVACY_CONTACT: &str = "cx.gsi.eco@gmail.com";
pub const CHAT_SUBJECT: &str = "Chat Inquiry";

/// Header switches to its opaque style once the page is scrolled past this many pixels.
pub const SCROLL_THRESHOLD_PX: f64 = 100.0;

pub const ROI_MULTIPLIER: f64 = 1.8;
pub const DEFAULT_MONTHLY_BUDGET: f64 = 1000.0;
pub const DEFAULT_CURRENT_ROI: f64 = 150.0;

pub const LINKEDIN_PROFILE: &str = "https://www.linkedin.com/in/karthikeyagsi/";
pub const LINKEDIN_NEWSLETTER: &str =
    "https://www.linkedin.com/newsletters/global-sustainable-initiative-7325848775837577216";
pub const OUR_WORK_URL: &str = "https://bestdealsindia.vercel.app/";

pub struct ExternalLink {
    pub label: &'static str,
    pub icon: &'static str,
    pub href: &'static str,
}

pub const JOURNEY_LINKS: [ExternalLink; 4] = [
    ExternalLink {
        label: "Medium Articles",
        icon: "✒️",
        href: "https://medium.com/@KarthikeyaGSI",
    },
    ExternalLink {
        label: "Substack Newsletter",
        icon: "📖",
        href: "https://substack.com/@karthikeyathallapally",
    },
    ExternalLink {
        label: "YouTube Channel",
        icon: "▶️",
        href: "https://www.youtube.com/@karthikeyagsi",
    },
    ExternalLink {
        label: "Quora Insights",
        icon: "✉️",
        href: "https://www.quora.com/profile/Karthikeya-Thallapally",
    },
];

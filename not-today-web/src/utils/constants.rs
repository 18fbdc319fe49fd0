//! Application constants

pub const LOG_LEVEL: log::Level = log::Level::Info;

// Branding
pub const APP_TITLE: &str = "NOT TODAY";
pub const LOGO_URL: &str =
    "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/NOT%20TODAY-GnE0Qj8TwSANCBMN8NLteJ3F1vtWDs.png";

// Embedded third-party surfaces
pub const ORRERY_URL: &str = "https://nsa-not-today.github.io/Not-Today-orrery/";
pub const LIVE_FEED_URL: &str = "https://www.youtube.com/embed/0FBiyFpV__g";
pub const LIVE_FEED_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

// Social links (placeholders)
pub const INSTAGRAM_URL: &str = "#";
pub const TWITTER_URL: &str = "#";
pub const YOUTUBE_URL: &str = "#";

// Timers
pub const CLOCK_TICK_MS: u64 = 1000;
pub const VIEWER_TICK_MS: u64 = 5000;

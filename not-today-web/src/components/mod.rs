//! UI Components shared by both layouts

pub mod accordion;
pub mod cart;
pub mod daily_update;
pub mod footer;
pub mod games;
pub mod header;
pub mod leaderboard;
pub mod live_feed;
pub mod nearby;
pub mod orrery;
pub mod quiz;
pub mod shop;
pub mod subscribe;

pub use accordion::AccordionItem;
pub use cart::CartSummary;
pub use daily_update::DailyUpdate;
pub use footer::Footer;
pub use games::{GamePreview, SpaceGames};
pub use header::SiteHeader;
pub use leaderboard::TopDefenders;
pub use live_feed::{CommentForm, LiveFeed};
pub use nearby::NearbyObjects;
pub use orrery::Orrery;
pub use quiz::DailyQuiz;
pub use shop::MerchShop;
pub use subscribe::StayUpdated;

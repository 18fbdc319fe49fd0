//! Page modules - one per layout variant

pub mod fixed;
pub mod responsive;

pub use fixed::FixedLayoutPage;
pub use responsive::ResponsiveLayoutPage;

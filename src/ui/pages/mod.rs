//! Application pages module
//!
//! - Landing page (home)
//! - Privacy policy
//! - 404 page

mod landing;
mod not_found;
mod privacy;

pub use landing::LandingPage;
pub use not_found::NotFoundPage;
pub use privacy::PrivacyPage;

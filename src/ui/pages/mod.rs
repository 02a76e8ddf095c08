//! Page components
//!
//! Top-level route components:
//! - Landing page (course sales page)
//! - Not found (404)

mod landing;
mod not_found;

pub use landing::LandingPage;
pub use not_found::NotFoundPage;

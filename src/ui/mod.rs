pub mod countdown;
pub mod faq;
pub mod fade_in;
pub mod pages;
pub mod scroll;
pub mod testimonials;
pub mod timeline;

pub use countdown::CountdownTimer;
pub use faq::FaqSection;
pub use fade_in::FadeInOnScroll;
pub use pages::{LandingPage, NotFoundPage};
pub use scroll::{use_interval, use_reveal, use_scroll_progress};
pub use testimonials::Testimonials;
pub use timeline::Timeline;

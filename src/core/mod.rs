pub mod config;
pub mod engine;
pub mod flip;
pub mod geometry;
pub mod holo;
pub mod sampler;
pub mod smoother;
pub mod style;

pub use config::CardConfig;
pub use engine::{CardEngine, CardView, LoopControl};
pub use flip::TrackingChange;
pub use geometry::{CardRect, PointerClass};
pub use sampler::PointerSource;
pub use style::FaceStyle;

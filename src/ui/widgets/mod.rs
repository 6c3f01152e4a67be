// Reusable widgets shared across the lesson renderers
pub mod progress;

pub use progress::ProgressTrack;

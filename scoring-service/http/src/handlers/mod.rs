mod analyze;
mod health;

pub use analyze::{analyze_voice, AUDIO_FIELD};
pub use health::health_check;

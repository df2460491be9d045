pub mod cue;
pub mod player;

pub use cue::{SoundCue, SoundSink};
pub use player::{AudioPlayer, SoundClip};

//! Sound cues for game events. Playback problems never reach the game.

pub mod signaler;

pub use signaler::{AudioSignaler, BellPlayer, CuePlayer, SilentPlayer, SoundCue};

use std::io::{self, Write};

use log::{debug, warn};

use crate::game::GameEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Eat,
    LevelUp,
    GameOver,
}

impl SoundCue {
    pub fn for_event(event: &GameEvent) -> Self {
        match event {
            GameEvent::AteFood => SoundCue::Eat,
            GameEvent::LevelUp { .. } => SoundCue::LevelUp,
            GameEvent::GameOver(_) => SoundCue::GameOver,
        }
    }
}

/// Something that can make a noise for a cue
pub trait CuePlayer {
    fn play(&mut self, cue: SoundCue) -> io::Result<()>;
}

/// Rings the terminal bell: once to eat, twice to level up, three times on death
pub struct BellPlayer<W> {
    out: W,
}

impl BellPlayer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> BellPlayer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn rings(cue: SoundCue) -> usize {
        match cue {
            SoundCue::Eat => 1,
            SoundCue::LevelUp => 2,
            SoundCue::GameOver => 3,
        }
    }
}

impl<W: Write> CuePlayer for BellPlayer<W> {
    fn play(&mut self, cue: SoundCue) -> io::Result<()> {
        for _ in 0..Self::rings(cue) {
            self.out.write_all(b"\x07")?;
        }
        self.out.flush()
    }
}

pub struct SilentPlayer;

impl CuePlayer for SilentPlayer {
    fn play(&mut self, _cue: SoundCue) -> io::Result<()> {
        Ok(())
    }
}

/// Plays a cue for every game event. The first playback error is logged and
/// mutes the signaler for the rest of the session.
pub struct AudioSignaler {
    player: Box<dyn CuePlayer>,
    muted: bool,
}

impl AudioSignaler {
    pub fn new(player: Box<dyn CuePlayer>) -> Self {
        Self {
            player,
            muted: false,
        }
    }

    pub fn silent() -> Self {
        Self::new(Box::new(SilentPlayer))
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn on_events(&mut self, events: &[GameEvent]) {
        for event in events {
            self.signal(SoundCue::for_event(event));
        }
    }

    pub fn signal(&mut self, cue: SoundCue) {
        if self.muted {
            return;
        }

        debug!("Playing {:?} cue", cue);
        if let Err(e) = self.player.play(cue) {
            warn!("Failed to play {:?} cue, muting audio: {}", cue, e);
            self.muted = true;
        }
    }
}

impl Default for AudioSignaler {
    fn default() -> Self {
        Self::silent()
    }
}

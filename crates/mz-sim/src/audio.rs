//! Sound cues and the two-channel arbitration the host uses to play them.
//!
//! Decoding and mixing belong to the audio backend behind [`AudioChannel`];
//! this module only decides *which* channel gets *which* cue and when a cue
//! is dropped.

use std::fmt;

/// Every sound the game can request.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SoundCue {
    Startup,
    Death,
    MunchGhost,
    MunchFruit,
    MunchPellet,
    GhostSiren,
}

impl SoundCue {
    pub const ALL: [SoundCue; 6] = [
        SoundCue::Startup,
        SoundCue::Death,
        SoundCue::MunchGhost,
        SoundCue::MunchFruit,
        SoundCue::MunchPellet,
        SoundCue::GhostSiren,
    ];

    /// Asset file a backend is expected to load for this cue.
    pub fn file_name(self) -> &'static str {
        match self {
            SoundCue::Startup     => "pacman_beginning.wav",
            SoundCue::Death       => "pacman_death.wav",
            SoundCue::MunchGhost  => "pacman_eatghost.wav",
            SoundCue::MunchFruit  => "pacman_eatfruit.wav",
            SoundCue::MunchPellet => "pacman_chomp_trimmed.wav",
            SoundCue::GhostSiren  => "ghostsiren.wav",
        }
    }
}

impl fmt::Display for SoundCue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// One mixer channel of the audio backend.
///
/// `play` replaces whatever the channel is currently playing.
pub trait AudioChannel {
    fn play(&mut self, cue: SoundCue, looped: bool);

    fn pause(&mut self);

    fn unpause(&mut self);

    /// `true` while a cue is still audible on this channel.
    fn is_busy(&self) -> bool;
}

/// Routes game events onto two channels: one for one-shot effects and one
/// for the looping ghost siren.
///
/// Effects interrupt each other, except the pellet chomp, which is dropped
/// while another effect is still playing.
pub struct SoundBoard<C: AudioChannel> {
    effects: C,
    siren:   C,
}

impl<C: AudioChannel> SoundBoard<C> {
    pub fn new(effects: C, siren: C) -> Self {
        Self { effects, siren }
    }

    pub fn effects(&self) -> &C {
        &self.effects
    }

    pub fn siren(&self) -> &C {
        &self.siren
    }

    /// Both channels, effects first, for backends that need driving.
    pub fn channels_mut(&mut self) -> (&mut C, &mut C) {
        (&mut self.effects, &mut self.siren)
    }

    pub fn play_startup(&mut self) {
        self.effects.play(SoundCue::Startup, false);
    }

    pub fn play_death(&mut self) {
        self.effects.play(SoundCue::Death, false);
    }

    pub fn play_munch_ghost(&mut self) {
        self.effects.play(SoundCue::MunchGhost, false);
    }

    pub fn play_munch_fruit(&mut self) {
        self.effects.play(SoundCue::MunchFruit, false);
    }

    /// No-op while the effects channel is busy.
    pub fn play_munch_pellet(&mut self) {
        if !self.effects.is_busy() {
            self.effects.play(SoundCue::MunchPellet, false);
        }
    }

    /// Resume the siren channel and (re)start the siren looping.
    pub fn play_ghost_siren(&mut self) {
        self.siren.unpause();
        self.siren.play(SoundCue::GhostSiren, true);
    }

    pub fn pause_ghost_siren(&mut self) {
        self.siren.pause();
    }
}

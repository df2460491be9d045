/// Short sound effects fired by the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// An accepted turn
    DirectionChange,
    /// The snake died
    GameOver,
}

/// Fire-and-forget sound output.
///
/// Implementations must not block and must tolerate missing audio.
pub trait SoundSink {
    fn play(&mut self, cue: SoundCue);
}

use log::{debug, info, warn};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::cue::{SoundCue, SoundSink};
use crate::assets::{AssetError, GAME_OVER_SOUND, MOVE_SOUND, MUSIC_FILE, load_optional};

/// An encoded sound kept in memory and decoded on every play
#[derive(Debug, Clone)]
pub struct SoundClip {
    path: PathBuf,
    bytes: Arc<[u8]>,
}

impl SoundClip {
    /// Read a clip and make sure it decodes
    pub fn load(path: &Path) -> Result<Self, AssetError> {
        let bytes = fs::read(path).map_err(|source| AssetError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let clip = Self {
            path: path.to_path_buf(),
            bytes: bytes.into(),
        };
        clip.decoder()?;
        Ok(clip)
    }

    fn cursor(&self) -> Cursor<Arc<[u8]>> {
        Cursor::new(Arc::clone(&self.bytes))
    }

    fn decode_error(&self, source: rodio::decoder::DecoderError) -> AssetError {
        AssetError::Decode {
            path: self.path.clone(),
            source,
        }
    }

    fn decoder(&self) -> Result<Decoder<Cursor<Arc<[u8]>>>, AssetError> {
        Decoder::new(self.cursor()).map_err(|e| self.decode_error(e))
    }
}

/// Open output stream. Dropping it stops all sound.
struct AudioOutput {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    music: Option<Sink>,
}

impl AudioOutput {
    fn open() -> Result<Self, AssetError> {
        let (stream, handle) = OutputStream::try_default()?;
        Ok(Self {
            _stream: stream,
            handle,
            music: None,
        })
    }

    fn start_music(&mut self, clip: &SoundClip) -> Result<(), AssetError> {
        let source = Decoder::new_looped(clip.cursor()).map_err(|e| clip.decode_error(e))?;
        let sink = Sink::try_new(&self.handle)?;
        sink.append(source);
        if let Some(previous) = self.music.replace(sink) {
            previous.stop();
        }
        Ok(())
    }

    fn play(&self, clip: &SoundClip) -> Result<(), AssetError> {
        let sink = Sink::try_new(&self.handle)?;
        sink.append(clip.decoder()?);
        sink.detach();
        Ok(())
    }
}

/// Plays background music and sound cues through the default device.
///
/// Any piece can be absent: no device, no music, or a missing cue. Absent
/// pieces are skipped at play time.
pub struct AudioPlayer {
    output: Option<AudioOutput>,
    move_cue: Option<SoundClip>,
    game_over_cue: Option<SoundClip>,
}

impl AudioPlayer {
    /// Open the audio device, load sounds from `dir` and start the music
    pub fn new(dir: &Path, muted: bool) -> Self {
        if muted {
            info!("Audio muted");
            return Self::silent();
        }

        let Some(mut output) = load_optional("audio output", AudioOutput::open()) else {
            return Self::silent();
        };

        let music = load_optional("background music", SoundClip::load(&dir.join(MUSIC_FILE)));
        if let Some(music) = music {
            if let Err(e) = output.start_music(&music) {
                warn!("Failed to start background music: {e}");
            }
        }

        Self {
            output: Some(output),
            move_cue: load_optional(
                "direction change sound",
                SoundClip::load(&dir.join(MOVE_SOUND)),
            ),
            game_over_cue: load_optional(
                "game over sound",
                SoundClip::load(&dir.join(GAME_OVER_SOUND)),
            ),
        }
    }

    /// A player that never makes a sound
    pub fn silent() -> Self {
        Self {
            output: None,
            move_cue: None,
            game_over_cue: None,
        }
    }

    /// True when an output device is open
    pub fn is_active(&self) -> bool {
        self.output.is_some()
    }

    fn clip(&self, cue: SoundCue) -> Option<&SoundClip> {
        match cue {
            SoundCue::DirectionChange => self.move_cue.as_ref(),
            SoundCue::GameOver => self.game_over_cue.as_ref(),
        }
    }
}

impl SoundSink for AudioPlayer {
    fn play(&mut self, cue: SoundCue) {
        let (Some(output), Some(clip)) = (self.output.as_ref(), self.clip(cue)) else {
            return;
        };

        if let Err(e) = output.play(clip) {
            debug!("Failed to play {cue:?}: {e}");
        }
    }
}

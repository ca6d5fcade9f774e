//! Audio playback for Cozy Cabin
//! One fireplace clip, decoded fully into memory at startup and looped on demand.

use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use anyhow::Context;
use rodio::buffer::SamplesBuffer;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};

/// A clip that can be restarted from its first frame in loop mode and stopped.
pub trait LoopingClip {
    /// Stop, rewind to frame zero and play looping continuously.
    fn restart_looping(&mut self);

    fn stop(&mut self);
}

/// Whole clip as interleaved samples; playback never touches the file again.
#[derive(Clone, Debug)]
pub struct DecodedClip {
    pub channels: u16,
    pub sample_rate: u32,
    pub samples: Vec<f32>,
}

impl DecodedClip {
    /// Decode every sample up front. A truncated or corrupt body fails here.
    pub fn decode<R>(reader: R) -> anyhow::Result<Self>
    where
        R: Read + Seek + Send + Sync + 'static,
    {
        let decoder = Decoder::new(reader).context("unsupported audio format")?;
        let channels = decoder.channels();
        let sample_rate = decoder.sample_rate();
        let samples: Vec<f32> = decoder.convert_samples::<f32>().collect();
        if samples.is_empty() {
            anyhow::bail!("audio clip contains no samples");
        }
        Ok(Self {
            channels,
            sample_rate,
            samples,
        })
    }

    pub fn duration_secs(&self) -> f32 {
        self.samples.len() as f32 / (self.channels as f32 * self.sample_rate as f32)
    }

    fn source(&self) -> SamplesBuffer<f32> {
        SamplesBuffer::new(self.channels, self.sample_rate, self.samples.clone())
    }
}

/// Audio System - owns the output device and the decoded clip
pub struct AudioPlayer {
    _stream: OutputStream,
    _stream_handle: OutputStreamHandle,
    sink: Sink,
    clip: DecodedClip,
    path: String,
}

impl AudioPlayer {
    /// Decode the clip at `path` and open the default output device.
    ///
    /// Fails when the file is missing, the format is unsupported or the body
    /// is corrupt, or when no output device is available.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
        let clip = DecodedClip::decode(BufReader::new(file))
            .with_context(|| format!("failed to decode {}", path.display()))?;

        let (_stream, stream_handle) =
            OutputStream::try_default().context("no audio output device available")?;
        let sink = Sink::try_new(&stream_handle).context("failed to create audio sink")?;

        log::info!(
            "Loaded audio clip {} ({} ch, {} Hz, {:.1}s)",
            path.display(),
            clip.channels,
            clip.sample_rate,
            clip.duration_secs()
        );

        Ok(Self {
            _stream,
            _stream_handle: stream_handle,
            sink,
            clip,
            path: path.display().to_string(),
        })
    }
}

impl LoopingClip for AudioPlayer {
    fn restart_looping(&mut self) {
        // Clearing the queue drops the old position; a fresh buffer starts at frame zero.
        self.sink.stop();
        self.sink.append(self.clip.source().repeat_infinite());
        self.sink.play();
        log::debug!("Looping {}", self.path);
    }

    fn stop(&mut self) {
        self.sink.stop();
        log::debug!("Stopped {}", self.path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Mono 16-bit PCM WAV holding `samples`.
    fn wav_bytes(sample_rate: u32, samples: &[i16]) -> Vec<u8> {
        let data_len = (samples.len() * 2) as u32;
        let mut out = Vec::with_capacity(44 + data_len as usize);
        out.extend_from_slice(b"RIFF");
        out.extend_from_slice(&(36 + data_len).to_le_bytes());
        out.extend_from_slice(b"WAVE");
        out.extend_from_slice(b"fmt ");
        out.extend_from_slice(&16u32.to_le_bytes());
        out.extend_from_slice(&1u16.to_le_bytes()); // PCM
        out.extend_from_slice(&1u16.to_le_bytes()); // mono
        out.extend_from_slice(&sample_rate.to_le_bytes());
        out.extend_from_slice(&(sample_rate * 2).to_le_bytes());
        out.extend_from_slice(&2u16.to_le_bytes());
        out.extend_from_slice(&16u16.to_le_bytes());
        out.extend_from_slice(b"data");
        out.extend_from_slice(&data_len.to_le_bytes());
        for s in samples {
            out.extend_from_slice(&s.to_le_bytes());
        }
        out
    }

    #[test]
    fn decode_reads_every_sample_up_front() {
        let samples: Vec<i16> = (0..8000).map(|i| ((i % 100) * 300) as i16).collect();
        let clip = DecodedClip::decode(Cursor::new(wav_bytes(8000, &samples))).unwrap();

        assert_eq!(clip.channels, 1);
        assert_eq!(clip.sample_rate, 8000);
        assert_eq!(clip.samples.len(), samples.len());
        assert!((clip.duration_secs() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn restarted_source_begins_at_frame_zero() {
        let samples: Vec<i16> = vec![0, 16384, -16384, 8192];
        let clip = DecodedClip::decode(Cursor::new(wav_bytes(8000, &samples))).unwrap();

        let first: Vec<f32> = clip.source().collect();
        let second: Vec<f32> = clip.source().collect();
        assert_eq!(first, clip.samples);
        assert_eq!(first, second);
    }

    #[test]
    fn garbage_fails_at_decode_time() {
        let result = DecodedClip::decode(Cursor::new(b"definitely not audio".to_vec()));
        assert!(result.is_err());
    }

    #[test]
    fn missing_file_is_an_error_not_a_panic() {
        let result = AudioPlayer::load("definitely/not/here/FireplaceLoop.wav");
        assert!(result.is_err());
    }
}

//! Canonical WAV (RIFF) container encoding and decoding.
//!
//! The header layout is the fixed 44-byte canonical form: RIFF chunk,
//! "WAVE" format tag, "fmt " subchunk (PCM), "data" subchunk. Every length
//! field is derived from the actual payload; players reject or truncate
//! playback when they disagree.

use anyhow::{bail, Result};

pub const HEADER_LEN: usize = 44;

const RIFF_CHUNK_ID: &[u8; 4] = b"RIFF";
const WAVE_FORMAT: &[u8; 4] = b"WAVE";
const FMT_CHUNK_ID: &[u8; 4] = b"fmt ";
const DATA_CHUNK_ID: &[u8; 4] = b"data";

/// PCM format tag in the fmt chunk.
const AUDIO_FORMAT_PCM: u16 = 1;
/// Size of the fmt chunk body for plain PCM.
const FMT_CHUNK_SIZE: u32 = 16;
/// RIFF chunk size excludes the 8-byte RIFF header itself: 4 ("WAVE") +
/// 24 (fmt chunk) + 8 (data chunk header) + payload.
const RIFF_OVERHEAD: u32 = 36;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct WavSpec {
    pub channels: u16,
    pub sample_rate: u32,
    pub bits_per_sample: u16,
}

impl WavSpec {
    pub fn mono_16bit(sample_rate: u32) -> WavSpec {
        WavSpec {
            channels: 1,
            sample_rate,
            bits_per_sample: 16,
        }
    }

    fn block_align(&self) -> u16 {
        self.channels * (self.bits_per_sample / 8)
    }

    fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }
}

/// Encode 16-bit PCM samples into a complete WAV byte stream.
pub fn encode(samples: &[i16], spec: WavSpec) -> Vec<u8> {
    let data_size = (samples.len() * 2) as u32;
    let mut out = Vec::with_capacity(HEADER_LEN + data_size as usize);

    // RIFF chunk.
    out.extend_from_slice(RIFF_CHUNK_ID);
    out.extend_from_slice(&(RIFF_OVERHEAD + data_size).to_le_bytes());
    out.extend_from_slice(WAVE_FORMAT);

    // fmt subchunk.
    out.extend_from_slice(FMT_CHUNK_ID);
    out.extend_from_slice(&FMT_CHUNK_SIZE.to_le_bytes());
    out.extend_from_slice(&AUDIO_FORMAT_PCM.to_le_bytes());
    out.extend_from_slice(&spec.channels.to_le_bytes());
    out.extend_from_slice(&spec.sample_rate.to_le_bytes());
    out.extend_from_slice(&spec.byte_rate().to_le_bytes());
    out.extend_from_slice(&spec.block_align().to_le_bytes());
    out.extend_from_slice(&spec.bits_per_sample.to_le_bytes());

    // data subchunk.
    out.extend_from_slice(DATA_CHUNK_ID);
    out.extend_from_slice(&data_size.to_le_bytes());
    for sample in samples {
        out.extend_from_slice(&sample.to_le_bytes());
    }

    out
}

/// The declared header fields of an encoded WAV stream.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ParsedHeader {
    pub riff_chunk_size: u32,
    pub audio_format: u16,
    pub channels: u16,
    pub sample_rate: u32,
    pub byte_rate: u32,
    pub block_align: u16,
    pub bits_per_sample: u16,
    pub data_chunk_size: u32,
}

fn read_u16(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

/// Parse the canonical 44-byte header back out of an encoded stream.
pub fn parse_header(bytes: &[u8]) -> Result<ParsedHeader> {
    if bytes.len() < HEADER_LEN {
        bail!(
            "WAV stream too short: {} bytes, header needs {}",
            bytes.len(),
            HEADER_LEN
        );
    }
    if &bytes[0..4] != RIFF_CHUNK_ID {
        bail!("Missing RIFF chunk id");
    }
    if &bytes[8..12] != WAVE_FORMAT {
        bail!("Missing WAVE format tag");
    }
    if &bytes[12..16] != FMT_CHUNK_ID {
        bail!("Missing fmt chunk id");
    }
    if &bytes[36..40] != DATA_CHUNK_ID {
        bail!("Missing data chunk id");
    }

    Ok(ParsedHeader {
        riff_chunk_size: read_u32(bytes, 4),
        audio_format: read_u16(bytes, 20),
        channels: read_u16(bytes, 22),
        sample_rate: read_u32(bytes, 24),
        byte_rate: read_u32(bytes, 28),
        block_align: read_u16(bytes, 32),
        bits_per_sample: read_u16(bytes, 34),
        data_chunk_size: read_u32(bytes, 40),
    })
}

//! Headerless frame dump reading and writing.
//!
//! # Format
//!
//! - Input: `width * height * 4` little-endian f32 values, nothing else.
//! - Output: `width * height * 3` u8 values, nothing else.
//!
//! The float layout matches what the renderer's framebuffer dump produces;
//! endianness is explicit rather than native so dumps transfer across
//! machines.

use byteorder::{LittleEndian, ReadBytesExt};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::mem;
use std::path::Path;
use tonemap_core::FrameDesc;
use tracing::debug;

use crate::{IoError, IoResult};

/// Reads a raw little-endian f32 RGBA dump from a file.
///
/// The file must contain exactly `desc.input_len()` floats.
///
/// # Errors
///
/// - [`IoError::Io`] if the file cannot be opened or read
/// - [`IoError::TruncatedFile`] if it is shorter than the frame
/// - [`IoError::TrailingData`] if it is longer than the frame
pub fn read_f32_raw(path: impl AsRef<Path>, desc: FrameDesc) -> IoResult<Vec<f32>> {
    let path = path.as_ref();
    debug!(path = %path.display(), width = desc.width(), height = desc.height(), "reading raw frame");
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    read_f32_from(&mut reader, desc)
}

/// Reads a raw little-endian f32 RGBA dump from any reader.
///
/// Enforces the exact element count: the reader must yield
/// `desc.input_len()` floats and then EOF.
pub fn read_f32_from<R: Read>(reader: &mut R, desc: FrameDesc) -> IoResult<Vec<f32>> {
    let expected = desc.input_len();
    let expected_bytes = expected * mem::size_of::<f32>();

    let mut data = vec![0f32; expected];
    reader
        .read_f32_into::<LittleEndian>(&mut data)
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::UnexpectedEof => IoError::TruncatedFile { expected_bytes },
            _ => IoError::Io(e),
        })?;

    // The dump has no header, so a length mismatch is the only way to
    // catch wrong dimensions. Reject any trailing byte.
    let mut probe = [0u8; 1];
    match reader.read(&mut probe)? {
        0 => Ok(data),
        _ => Err(IoError::TrailingData { expected_bytes }),
    }
}

/// Writes a quantized RGB buffer as a headerless u8 dump.
///
/// # Errors
///
/// Returns [`IoError::Io`] if the file cannot be created or written.
pub fn write_u8_raw(path: impl AsRef<Path>, data: &[u8]) -> IoResult<()> {
    let path = path.as_ref();
    debug!(path = %path.display(), bytes = data.len(), "writing quantized frame");
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(data)?;
    writer.flush()?;
    Ok(())
}

//!
//! Contains a number of tools that are useful when working with EBML encoded files.
//!
//! Besides the vint codec, this module holds the payload codecs shared by the reader and the write tree.
//!

use chrono::{DateTime, Duration, TimeZone, Utc};

use super::errors::tool::ToolError;

///
/// Seconds between the Unix epoch and 2001-01-01T00:00:00 UTC, the reference point of EBML dates.
///
pub const DATE_EPOCH_UNIX_SECONDS: i64 = 978_307_200;

///
/// Returns the minimal number of bytes needed to write `val` as a size vint.
///
/// A length `L` can hold values up to `2^(7L) - 2`; the all-ones pattern is reserved for "unknown size".
///
/// ```
/// # use ebml_splice::tools::size_length;
/// assert_eq!(1, size_length(125));
/// assert_eq!(2, size_length(126));
/// ```
///
pub fn size_length(val: u64) -> u8 {
    for length in 1..8u8 {
        if val < (1u64 << (7 * length as u32)) - 2 {
            return length;
        }
    }
    8
}

///
/// Trait to enable easy serialization to a vint.
///
/// This is only available for types that can be cast as `u64`.
///
pub trait Vint: Into<u64> + Copy {
    ///
    /// Returns a representation of the current value as a vint array of minimal length.
    ///
    /// # Errors
    ///
    /// This can return an error if the value is too large to be representable as a vint.
    ///
    fn as_vint(&self) -> Result<Vec<u8>, ToolError> {
        let val: u64 = (*self).into();
        self.as_vint_with_length(size_length(val) as usize)
    }

    ///
    /// Returns a representation of the current value as a vint array with a specified length.
    ///
    /// # Errors
    ///
    /// This can return an error if the value does not fit in `length` bytes.
    ///
    fn as_vint_with_length(&self, length: usize) -> Result<Vec<u8>, ToolError> {
        let val: u64 = (*self).into();
        check_size_u64(val, length)?;
        Ok(as_vint_no_check_u64(val, length))
    }
}

impl Vint for u64 { }
impl Vint for u32 { }
impl Vint for u16 { }
impl Vint for u8 { }

#[inline]
fn check_size_u64(val: u64, length: usize) -> Result<(), ToolError> {
    if length == 0 || length > 8 || val >= (1u64 << (length * 7)) - 1 {
        Err(ToolError::WriteVintOverflow { value: val, length })
    } else {
        Ok(())
    }
}

#[inline]
fn as_vint_no_check_u64(val: u64, length: usize) -> Vec<u8> {
    let bytes: [u8; 8] = val.to_be_bytes();
    let mut result: Vec<u8> = Vec::from(&bytes[(8-length)..]);
    result[0] |= 1 << (8 - length);
    result
}

///
/// Returns the total length of a vint from its first byte.
///
/// # Errors
///
/// `0x00` has no length marker and `0xFF` is the reserved unknown-size marker; both are rejected.
///
pub fn vint_length(first: u8) -> Result<usize, ToolError> {
    match first {
        0x00 => Err(ToolError::InvalidVintMarker),
        0xFF => Err(ToolError::UnknownSizeMarker),
        _ => Ok(first.leading_zeros() as usize + 1),
    }
}

///
/// Reads a vint from the beginning of the input array slice.
///
/// This method returns an option with the `None` variant used to indicate there was not enough data in the buffer to completely read a vint.
///
/// The returned tuple contains the value of the vint (`u64`, marker bit removed) and the length of the vint (`usize`).
///
/// # Errors
///
/// This method can return a `ToolError` if the first byte carries no valid length marker.
///
pub fn read_vint(buffer: &[u8]) -> Result<Option<(u64, usize)>, ToolError> {
    if buffer.is_empty() {
        return Ok(None);
    }

    let length = vint_length(buffer[0])?;

    if length > buffer.len() {
        // Not enough data in the buffer to read out the vint value
        return Ok(None);
    }

    let mut value = buffer[0] as u64;
    value -= 1 << (8 - length);

    for item in buffer.iter().take(length).skip(1) {
        value <<= 8;
        value += *item as u64;
    }

    Ok(Some((value, length)))
}

///
/// Writes an element id as raw big-endian bytes with leading zero bytes removed.
///
/// Ids keep their vint marker as part of the value, so no marker is added here.
///
pub fn encode_id(id: u64) -> Vec<u8> {
    id.to_be_bytes().iter().skip_while(|&v| *v == 0).copied().collect()
}

///
/// Reads a `u64` value from any length array slice.
///
/// Bytes are big endian - i.e. an array of `[4, 0]` returns a value of `1024`.  An empty slice reads as `0`.
///
/// # Errors
///
/// This method will return an error if the input slice has a length > 8.
///
/// ## Example
///
/// ```
/// # use ebml_splice::tools::arr_to_u64;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let result = arr_to_u64(&[16,0])?;
/// assert_eq!(result, 4096);
/// # Ok(())
/// # }
/// ```
///
pub fn arr_to_u64(arr: &[u8]) -> Result<u64, ToolError> {
    if arr.len() > 8 {
        return Err(ToolError::ReadU64Overflow(Vec::from(arr)));
    }

    let mut val = 0u64;
    for byte in arr {
        val <<= 8;
        val += *byte as u64;
    }
    Ok(val)
}

///
/// Reads a two's complement `i64` value from any length array slice.
///
/// An empty slice reads as `0`.
///
/// # Errors
///
/// This method will return an error if the input slice has a length > 8.
///
pub fn arr_to_i64(arr: &[u8]) -> Result<i64, ToolError> {
    if arr.len() > 8 {
        return Err(ToolError::ReadI64Overflow(Vec::from(arr)));
    }
    if arr.is_empty() {
        return Ok(0);
    }

    let fill = if arr[0] > 127 { 0xFF } else { 0x00 };
    let mut bytes = [fill; 8];
    bytes[(8 - arr.len())..].copy_from_slice(arr);
    Ok(i64::from_be_bytes(bytes))
}

///
/// Reads an `f64` value from an array slice of length 0, 4 or 8.
///
/// # Errors
///
/// This method will throw an error for any other input length.
///
pub fn arr_to_f64(arr: &[u8]) -> Result<f64, ToolError> {
    match arr.len() {
        0 => Ok(0.0),
        4 => arr.try_into().map(|b| f32::from_be_bytes(b) as f64).map_err(|_| ToolError::ReadF64Mismatch(Vec::from(arr))),
        8 => arr.try_into().map(f64::from_be_bytes).map_err(|_| ToolError::ReadF64Mismatch(Vec::from(arr))),
        _ => Err(ToolError::ReadF64Mismatch(Vec::from(arr))),
    }
}

///
/// Writes an unsigned int as 1, 2, 4 or 8 big-endian bytes, whichever is the smallest that fits.
///
pub fn u64_to_arr(data: u64) -> Vec<u8> {
    u8::try_from(data).map(|n| n.to_be_bytes().to_vec())
        .or_else(|_| u16::try_from(data).map(|n| n.to_be_bytes().to_vec()))
        .or_else(|_| u32::try_from(data).map(|n| n.to_be_bytes().to_vec()))
        .unwrap_or_else(|_| data.to_be_bytes().to_vec())
}

///
/// Writes a signed int as 1, 2, 4 or 8 big-endian bytes, whichever is the smallest that fits.
///
pub fn i64_to_arr(data: i64) -> Vec<u8> {
    i8::try_from(data).map(|n| n.to_be_bytes().to_vec())
        .or_else(|_| i16::try_from(data).map(|n| n.to_be_bytes().to_vec()))
        .or_else(|_| i32::try_from(data).map(|n| n.to_be_bytes().to_vec()))
        .unwrap_or_else(|_| data.to_be_bytes().to_vec())
}

///
/// Writes a float as 4 bytes when it survives a round trip through `f32`, otherwise as 8 bytes.
///
pub fn f64_to_arr(data: f64) -> Vec<u8> {
    let single = data as f32;
    if single as f64 == data {
        single.to_be_bytes().to_vec()
    } else {
        data.to_be_bytes().to_vec()
    }
}

fn date_epoch() -> Result<DateTime<Utc>, ToolError> {
    Utc.timestamp_opt(DATE_EPOCH_UNIX_SECONDS, 0).single().ok_or(ToolError::DateOutOfRange(0))
}

///
/// Converts an EBML date (nanoseconds since 2001-01-01T00:00:00 UTC) to a [`DateTime`].
///
pub fn nanos_to_date(nanos: i64) -> Result<DateTime<Utc>, ToolError> {
    date_epoch()?
        .checked_add_signed(Duration::nanoseconds(nanos))
        .ok_or(ToolError::DateOutOfRange(nanos))
}

///
/// Converts a [`DateTime`] to an EBML date (nanoseconds since 2001-01-01T00:00:00 UTC).
///
pub fn date_to_nanos(date: &DateTime<Utc>) -> Result<i64, ToolError> {
    let since_epoch = date.signed_duration_since(date_epoch()?);
    since_epoch.num_nanoseconds().ok_or(ToolError::DateOutOfRange(since_epoch.num_seconds()))
}

///
/// Computes the CRC-32 of `bytes` in the byte order it is stored in a CRC-32 element.
///
pub fn crc32(bytes: &[u8]) -> u32 {
    crc32fast::hash(bytes).swap_bytes()
}

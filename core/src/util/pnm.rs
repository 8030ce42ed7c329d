//! PPM image export and import.
//!
//! PPM is the RGB member of the NetPBM family of image formats: a short
//! textual header followed by pixel data. Only the binary sub-format P6,
//! with one byte per channel, is supported. It is the simplest way to get
//! a rendered frame out of a headless program.
//!
//! ```text
//! P6
//! <width> <height>
//! 255
//! <width * height * 3 bytes of RGB data, row-major, top row first>
//! ```

use alloc::{format, string::String, vec::Vec};
use core::{
    fmt::{self, Display, Formatter},
    num::{IntErrorKind, ParseIntError},
    str::FromStr,
};
#[cfg(feature = "std")]
use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Read, Write},
    path::Path,
};

use Error::*;

use crate::math::color::{Color3, rgb};
use crate::util::buf::Buf2;

/// Magic number of binary RGB images.
const P6: [u8; 2] = *b"P6";

/// The header of a PPM image.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct Header {
    width: u32,
    height: u32,
    max: u16,
}

/// Error during loading, saving, or decoding a PPM file.
#[derive(Debug, Eq, PartialEq)]
pub enum Error {
    /// An I/O error occurred.
    #[cfg(feature = "std")]
    Io(io::ErrorKind),
    /// Unsupported magic number, or a format variant that is not handled,
    /// such as 16-bit channels.
    Unsupported([u8; 2]),
    /// Unexpected end of input while decoding.
    UnexpectedEnd,
    /// Invalid numeric value encountered in the header.
    InvalidNumber,
}

/// Result of loading, saving, or decoding a PPM file.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            #[cfg(feature = "std")]
            Io(kind) => write!(f, "i/o error: {kind}"),
            Unsupported([a, b]) => write!(
                f,
                "unsupported image format: {}{}",
                char::from(*a),
                char::from(*b)
            ),
            UnexpectedEnd => f.write_str("unexpected end of image data"),
            InvalidNumber => f.write_str("invalid number in image header"),
        }
    }
}

impl From<ParseIntError> for Error {
    fn from(e: ParseIntError) -> Self {
        if *e.kind() == IntErrorKind::Empty {
            UnexpectedEnd
        } else {
            InvalidNumber
        }
    }
}

#[cfg(feature = "std")]
impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Io(e.kind())
    }
}

impl Header {
    /// Attempts to parse a P6 header from `src`, consuming exactly one
    /// whitespace byte after the maximum value.
    fn parse(src: impl IntoIterator<Item = u8>) -> Result<Self> {
        let mut it = src.into_iter();
        let magic = [
            it.next().ok_or(UnexpectedEnd)?,
            it.next().ok_or(UnexpectedEnd)?,
        ];
        if magic != P6 {
            return Err(Unsupported(magic));
        }
        let width: u32 = parse_num(&mut it)?;
        let height: u32 = parse_num(&mut it)?;
        let max: u16 = parse_num(&mut it)?;
        match max {
            0 => Err(InvalidNumber),
            256.. => Err(Unsupported(P6)),
            _ => Ok(Self { width, height, max }),
        }
    }

    fn to_bytes(self) -> Vec<u8> {
        let Self { width, height, max } = self;
        format!("P6\n{width} {height}\n{max}\n").into_bytes()
    }
}

/// Encodes an image as a binary PPM file in memory.
///
/// # Examples
/// ```
/// # use rastlab_core::{math::rgb, util::{buf::Buf2, pnm::encode_ppm}};
/// let img = Buf2::filled((2, 1), rgb(0xFF, 0x80, 0x00));
/// assert_eq!(encode_ppm(&img), b"P6\n2 1\n255\n\xFF\x80\x00\xFF\x80\x00");
/// ```
pub fn encode_ppm(img: &Buf2<Color3>) -> Vec<u8> {
    let (width, height) = img.dims();
    let mut out = Header { width, height, max: 255 }.to_bytes();
    out.reserve(img.data().len() * 3);
    out.extend(img.data().iter().flat_map(|c| c.0));
    out
}

/// Writes an image to `out` in binary PPM format.
///
/// # Errors
/// Returns [`pnm::Error::Io`][Error::Io] if writing fails.
#[cfg(feature = "std")]
pub fn write_ppm(mut out: impl Write, img: &Buf2<Color3>) -> Result<()> {
    out.write_all(&encode_ppm(img))?;
    Ok(out.flush()?)
}

/// Writes an image to a file in binary PPM format.
///
/// Overwrites the file if it already exists.
///
/// # Errors
/// Returns [`pnm::Error::Io`][Error::Io] if the file cannot be created or
/// written.
#[cfg(feature = "std")]
pub fn save_ppm(path: impl AsRef<Path>, img: &Buf2<Color3>) -> Result<()> {
    write_ppm(BufWriter::new(File::create(path)?), img)
}

/// Loads a binary PPM image from a file.
///
/// # Errors
/// Returns [`pnm::Error`][Error] in case of an I/O error or invalid image.
#[cfg(feature = "std")]
pub fn load_ppm(path: impl AsRef<Path>) -> Result<Buf2<Color3>> {
    let mut bytes = Vec::new();
    BufReader::new(File::open(path)?).read_to_end(&mut bytes)?;
    parse_ppm(bytes)
}

/// Attempts to decode a binary PPM image from an iterator of bytes.
///
/// Channels with a maximum value other than 255 are rescaled to the
/// full byte range. Bytes past the end of the pixel data are ignored.
///
/// # Errors
/// Returns [`pnm::Error`][Error] if the header is invalid or the pixel data
/// is truncated.
pub fn parse_ppm(src: impl IntoIterator<Item = u8>) -> Result<Buf2<Color3>> {
    let mut it = src.into_iter();
    let Header { width, height, max } = Header::parse(&mut it)?;

    let count = (width as usize)
        .checked_mul(height as usize)
        .ok_or(InvalidNumber)?;
    let scale = |c: u8| (c as u16 * 255 / max).min(255) as u8;

    // Sized by the data read, not by the header
    let mut data = Vec::new();
    for _ in 0..count {
        let mut next = || it.next().map(scale).ok_or(UnexpectedEnd);
        data.push(rgb(next()?, next()?, next()?));
    }
    Buf2::from_vec((width, height), data).ok_or(UnexpectedEnd)
}

/// Parses a number from `src`, skipping leading whitespace and comments.
///
/// Consumes the whitespace byte that terminates the number.
fn parse_num<T>(src: impl IntoIterator<Item = u8>) -> Result<T>
where
    T: FromStr,
    Error: From<T::Err>,
{
    let mut in_comment = false;
    let mut skip = |b: u8| match b {
        b'#' => {
            in_comment = true;
            true
        }
        b'\n' => {
            in_comment = false;
            true
        }
        _ => in_comment || b.is_ascii_whitespace(),
    };
    let digits: String = src
        .into_iter()
        .skip_while(|&b| skip(b))
        .take_while(|b| !b.is_ascii_whitespace())
        .map(char::from)
        .collect();

    Ok(digits.parse()?)
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    #[test]
    fn parse_num_skips_whitespace_and_comments() {
        assert_eq!(parse_num(*b"  \t\n 42 "), Ok(42u32));
        assert_eq!(parse_num(*b"# a comment 7\n  13\n"), Ok(13u32));
    }

    #[test]
    fn parse_num_errors() {
        assert_eq!(parse_num::<u32>(*b""), Err(UnexpectedEnd));
        assert_eq!(parse_num::<u32>(*b"  x1 "), Err(InvalidNumber));
        assert_eq!(parse_num::<u32>(*b"-3 "), Err(InvalidNumber));
    }

    #[test]
    fn parse_header() {
        assert_eq!(
            Header::parse(*b"P6\n# made by hand\n640 480\n255\n"),
            Ok(Header { width: 640, height: 480, max: 255 })
        );
    }

    #[test]
    fn parse_header_unsupported() {
        assert_eq!(Header::parse(*b"P3 1 1 255 "), Err(Unsupported(*b"P3")));
        assert_eq!(Header::parse(*b"P6 1 1 65535 "), Err(Unsupported(P6)));
        assert_eq!(Header::parse(*b"P6 1 1 0 "), Err(InvalidNumber));
        assert_eq!(Header::parse(*b"P"), Err(UnexpectedEnd));
    }

    #[test]
    fn parse_ppm_pixels() {
        let img = parse_ppm(
            *b"P6 2 2 255\n\
            \x01\x12\x23\x34\x45\x56\
            \x67\x78\x89\x9A\xAB\xBC",
        )
        .unwrap();
        assert_eq!(img.dims(), (2, 2));
        assert_eq!(img[0], [rgb(0x01, 0x12, 0x23), rgb(0x34, 0x45, 0x56)]);
        assert_eq!(img[1], [rgb(0x67, 0x78, 0x89), rgb(0x9A, 0xAB, 0xBC)]);
    }

    #[test]
    fn parse_ppm_pixel_data_may_start_with_whitespace_byte() {
        // 0x20 is ASCII space but must be read as a channel value
        let img = parse_ppm(*b"P6 1 1 255\n\x20\x0A\x09").unwrap();
        assert_eq!(img[[0, 0]], rgb(0x20, 0x0A, 0x09));
    }

    #[test]
    fn parse_ppm_rescales_small_max() {
        let img = parse_ppm(*b"P6 1 1 15\n\x0F\x00\x05").unwrap();
        assert_eq!(img[[0, 0]], rgb(255, 0, 85));
    }

    #[test]
    fn parse_ppm_truncated() {
        let res = parse_ppm(*b"P6 2 1 255\n\x01\x02\x03\x04");
        assert_eq!(res, Err(UnexpectedEnd));
    }

    #[test]
    fn parse_ppm_huge_dims_without_data() {
        let res = parse_ppm(*b"P6\n4000000000 4000000000\n255\n\0\0\0");
        assert_eq!(res, Err(UnexpectedEnd));
    }

    #[test]
    fn encode_then_parse_keeps_pixels() {
        let img = Buf2::new_with((3, 2), |x, y| rgb(x as u8, y as u8, 0xFF));
        let bytes = encode_ppm(&img);
        assert!(bytes.starts_with(b"P6\n3 2\n255\n"));
        assert_eq!(bytes.len(), 11 + 3 * 2 * 3);
        assert_eq!(parse_ppm(bytes), Ok(img));
    }

    #[test]
    fn error_display() {
        assert_eq!(
            format!("{}", Unsupported(*b"P3")),
            "unsupported image format: P3"
        );
        assert_eq!(format!("{}", UnexpectedEnd), "unexpected end of image data");
    }

    #[cfg(feature = "std")]
    #[test]
    fn write_ppm_to_vec() {
        let img = Buf2::filled((1, 2), rgb(1, 2, 3));
        let mut out = vec![];
        write_ppm(&mut out, &img).unwrap();
        assert_eq!(&out, b"P6\n1 2\n255\n\x01\x02\x03\x01\x02\x03");
    }
}

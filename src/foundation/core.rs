use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::foundation::error::{SkyvecError, SkyvecResult};

pub use kurbo::{Point, Vec2};

/// Dimensions of a drawing surface in device pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SurfaceSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl SurfaceSize {
    /// Size with the given width and height.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// One interleaved pixel channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Channel {
    /// Red.
    R,
    /// Green.
    G,
    /// Blue.
    B,
    /// Alpha.
    A,
}

impl Channel {
    fn from_ascii(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'R' => Some(Self::R),
            'G' => Some(Self::G),
            'B' => Some(Self::B),
            'A' => Some(Self::A),
            _ => None,
        }
    }

    fn letter(self) -> char {
        match self {
            Self::R => 'R',
            Self::G => 'G',
            Self::B => 'B',
            Self::A => 'A',
        }
    }
}

/// Interleaved channel layout of a pixel buffer, e.g. `RGBA` or `BGR`.
///
/// Between one and four distinct channels out of `{R, G, B, A}`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ChannelOrder {
    channels: Vec<Channel>,
}

impl ChannelOrder {
    /// The renderer's native layout.
    pub fn rgba() -> Self {
        Self {
            channels: vec![Channel::R, Channel::G, Channel::B, Channel::A],
        }
    }

    /// The alpha-less native layout.
    pub fn rgb() -> Self {
        Self {
            channels: vec![Channel::R, Channel::G, Channel::B],
        }
    }

    /// Parse an order string such as `"RGBA"` or `"bgr"`.
    pub fn parse(s: &str) -> SkyvecResult<Self> {
        if s.is_empty() || s.len() > 4 {
            return Err(SkyvecError::validation(format!(
                "channel order '{s}' must name 1..=4 channels"
            )));
        }
        let mut channels = Vec::with_capacity(s.len());
        for c in s.chars() {
            let ch = Channel::from_ascii(c).ok_or_else(|| {
                SkyvecError::validation(format!("channel order '{s}' has unknown channel '{c}'"))
            })?;
            if channels.contains(&ch) {
                return Err(SkyvecError::validation(format!(
                    "channel order '{s}' repeats channel '{c}'"
                )));
            }
            channels.push(ch);
        }
        Ok(Self { channels })
    }

    /// Channels in interleaving order.
    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    /// Bytes per pixel for this layout.
    pub fn num_channels(&self) -> usize {
        self.channels.len()
    }

    fn index_of(&self, ch: Channel) -> Option<usize> {
        self.channels.iter().position(|c| *c == ch)
    }
}

impl fmt::Display for ChannelOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in &self.channels {
            write!(f, "{}", ch.letter())?;
        }
        Ok(())
    }
}

impl FromStr for ChannelOrder {
    type Err = SkyvecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A raw interleaved 8-bit pixel buffer plus its channel layout.
///
/// The bytes are shared ([`Arc`]) so draw commands carrying images stay cheap
/// to clone; the buffer itself is immutable once constructed.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct PixelData {
    width: u32,
    height: u32,
    order: ChannelOrder,
    bytes: Arc<Vec<u8>>,
}

impl PixelData {
    /// Wrap a pixel buffer, validating that its length matches
    /// `width * height * channels`.
    pub fn new(
        width: u32,
        height: u32,
        order: ChannelOrder,
        bytes: impl Into<Arc<Vec<u8>>>,
    ) -> SkyvecResult<Self> {
        let bytes = bytes.into();
        let expected = (width as usize) * (height as usize) * order.num_channels();
        if bytes.len() != expected {
            return Err(SkyvecError::validation(format!(
                "pixel buffer is {} bytes, expected {} for {}x{} {}",
                bytes.len(),
                expected,
                width,
                height,
                order
            )));
        }
        Ok(Self {
            width,
            height,
            order,
            bytes,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Channel layout of the buffer.
    pub fn order(&self) -> &ChannelOrder {
        &self.order
    }

    /// Raw interleaved bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Permute channels into `dst` layout.
    ///
    /// A destination alpha missing from the source is synthesized fully
    /// opaque; dropping source channels is fine. Requesting a color channel
    /// the source does not have is an error.
    pub fn reorder(&self, dst: &ChannelOrder) -> SkyvecResult<Self> {
        if *dst == self.order {
            return Ok(self.clone());
        }

        let src_n = self.order.num_channels();
        let dst_n = dst.num_channels();
        let pixels = (self.width as usize) * (self.height as usize);
        let mut out = vec![0u8; pixels * dst_n];

        // Per-destination-channel source index, resolved once.
        let mut mapping = Vec::with_capacity(dst_n);
        for ch in dst.channels() {
            match self.order.index_of(*ch) {
                Some(idx) => mapping.push(Some(idx)),
                None if *ch == Channel::A => mapping.push(None),
                None => {
                    return Err(SkyvecError::validation(format!(
                        "cannot reorder {} pixels to {}: source lacks channel '{}'",
                        self.order,
                        dst,
                        ch.letter()
                    )));
                }
            }
        }

        for p in 0..pixels {
            let src = &self.bytes[p * src_n..p * src_n + src_n];
            let dst_px = &mut out[p * dst_n..p * dst_n + dst_n];
            for (slot, map) in dst_px.iter_mut().zip(&mapping) {
                *slot = match map {
                    Some(idx) => src[*idx],
                    None => u8::MAX,
                };
            }
        }

        Self::new(self.width, self.height, dst.clone(), out)
    }
}

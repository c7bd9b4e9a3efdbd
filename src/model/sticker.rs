//! Models for a single sticker: its binary payload and its emoji tags.

use std::fs;
use std::path::Path;
use std::result::Result as StdResult;

use crate::constants::{
    ANIMATED_STICKER_MAX_SIZE, STATIC_STICKER_MAX_SIZE, STICKER_DIMENSIONS_SIDE,
    VIDEO_STICKER_MAX_SIZE,
};
use crate::error::Result;
use crate::model::ModelError;
use crate::utils::image_dimensions;

/// The binary payload of a sticker, in one of the three formats Telegram
/// accepts.
///
/// The variant decides which size limit applies during validation and which
/// MIME type is reported to Telegram, so a payload must be wrapped in the
/// variant matching its actual format.
///
/// # Examples
///
/// ```rust
/// use telegram_stickers_import::model::StickerData;
///
/// let data = StickerData::Image(vec![0; 64]);
/// assert_eq!(data.mime_type(), "image/png");
/// assert!(!data.is_animated());
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum StickerData {
    /// A static sticker in PNG format.
    Image(Vec<u8>),
    /// An animated sticker in TGS format.
    Animation(Vec<u8>),
    /// A video sticker in WEBM format.
    Video(Vec<u8>),
}

impl StickerData {
    /// Builds a static sticker payload from the PNG file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file could not be read.
    ///
    /// [`Error::Io`]: crate::Error::Io
    pub fn image_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::Image(fs::read(path)?))
    }

    /// Builds an animated sticker payload from the TGS file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file could not be read.
    ///
    /// [`Error::Io`]: crate::Error::Io
    pub fn animation_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::Animation(fs::read(path)?))
    }

    /// Builds a video sticker payload from the WEBM file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file could not be read.
    ///
    /// [`Error::Io`]: crate::Error::Io
    pub fn video_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::Video(fs::read(path)?))
    }

    /// The raw bytes of the payload.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        match self {
            Self::Image(data) | Self::Animation(data) | Self::Video(data) => data,
        }
    }

    /// The size of the payload in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes().len()
    }

    /// Whether the payload holds no bytes at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes().is_empty()
    }

    /// The MIME type reported to Telegram for this payload.
    #[must_use]
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Image(_) => "image/png",
            Self::Animation(_) => "application/x-tgsticker",
            Self::Video(_) => "video/webm",
        }
    }

    /// Whether the payload is an animated sticker.
    #[must_use]
    pub fn is_animated(&self) -> bool {
        matches!(self, Self::Animation(_))
    }

    /// Whether the payload is a video sticker.
    #[must_use]
    pub fn is_video(&self) -> bool {
        matches!(self, Self::Video(_))
    }

    /// The maximum payload size in bytes that Telegram accepts for this
    /// format.
    #[must_use]
    pub fn max_size(&self) -> usize {
        match self {
            Self::Image(_) => STATIC_STICKER_MAX_SIZE,
            Self::Animation(_) => ANIMATED_STICKER_MAX_SIZE,
            Self::Video(_) => VIDEO_STICKER_MAX_SIZE,
        }
    }

    /// Checks the payload against Telegram's sticker rules.
    ///
    /// Static payloads that decode as an image must be 512 pixels wide with a
    /// height between 1 and 512 pixels. Payloads that cannot be decoded are
    /// not rejected here; Telegram performs the final check on its side.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::EmptyFile`] if the payload holds no bytes,
    /// [`ModelError::FileTooBig`] if it exceeds the limit for its format, or
    /// [`ModelError::InvalidDimensions`] if a decodable static payload has the
    /// wrong dimensions.
    pub fn validate(&self) -> StdResult<(), ModelError> {
        if self.is_empty() {
            return Err(ModelError::EmptyFile);
        }

        let max_size = self.max_size();
        if self.len() > max_size {
            return Err(ModelError::FileTooBig(self.len() - max_size));
        }

        if let Self::Image(data) = self {
            if let Some((width, height)) = image_dimensions(data) {
                if !dimensions_valid(width, height) {
                    return Err(ModelError::InvalidDimensions(width, height));
                }
            }
        }

        Ok(())
    }
}

/// A sticker of a set: a validated payload plus the emojis it stands for.
///
/// Stickers are created through [`StickerSet::add_sticker`] and are immutable
/// afterwards.
///
/// [`StickerSet::add_sticker`]: crate::model::StickerSet::add_sticker
#[derive(Clone, Debug)]
pub struct Sticker {
    data: StickerData,
    emojis: Vec<String>,
}

impl Sticker {
    pub(crate) fn new(data: StickerData, emojis: Vec<String>) -> Self {
        Self {
            data,
            emojis,
        }
    }

    /// The binary payload of the sticker.
    #[must_use]
    pub fn data(&self) -> &StickerData {
        &self.data
    }

    /// The emojis associated with the sticker, in the order they were given.
    #[must_use]
    pub fn emojis(&self) -> &[String] {
        &self.emojis
    }
}

fn dimensions_valid(width: u32, height: u32) -> bool {
    width == STICKER_DIMENSIONS_SIDE && (1..=STICKER_DIMENSIONS_SIDE).contains(&height)
}

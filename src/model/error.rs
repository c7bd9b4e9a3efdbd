//! Error enum definition wrapping the ways a sticker or a sticker set can be
//! rejected.

use std::error::Error as StdError;
use std::fmt;

/// An error returned from the [`model`] module.
///
/// This is always wrapped within the library's [`Error::Model`] variant.
///
/// Every rejection the validation rules can produce is a distinct variant,
/// so a host application can surface each case with its own message.
///
/// [`model`]: crate::model
/// [`Error::Model`]: crate::Error::Model
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// A sticker or thumbnail file contained no bytes at all.
    EmptyFile,
    /// A sticker or thumbnail file exceeded the maximum size for its format
    /// (PNG: 512 KB, TGS: 64 KB, WEBM: 256 KB).
    ///
    /// The number of bytes over the limit is provided.
    FileTooBig(usize),
    /// A static sticker bitmap had dimensions other than a width of
    /// [`STICKER_DIMENSIONS_SIDE`] and a height between 1 and
    /// [`STICKER_DIMENSIONS_SIDE`].
    ///
    /// The offending width and height are provided.
    ///
    /// [`STICKER_DIMENSIONS_SIDE`]: crate::constants::STICKER_DIMENSIONS_SIDE
    InvalidDimensions(u32, u32),
    /// The sticker set already holds the maximum number of stickers
    /// ([`STICKER_SET_MAX_COUNT`]).
    ///
    /// [`STICKER_SET_MAX_COUNT`]: crate::constants::STICKER_SET_MAX_COUNT
    CountLimitExceeded,
    /// Sticker data of one format was offered to a set declared for another,
    /// such as an animation added to a set of static stickers.
    DataTypeMismatch,
    /// A sticker was offered without any associated emojis.
    EmojiListEmpty,
    /// An import was attempted on a set with no stickers in it.
    SetIsEmpty,
    /// An import was attempted while the Telegram application is not
    /// installed, or is otherwise unable to receive a handoff.
    TelegramNotInstalled,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyFile => f.write_str("Sticker file is empty."),
            Self::FileTooBig(_) => f.write_str("Sticker file too large."),
            Self::InvalidDimensions(..) => f.write_str("Invalid sticker dimensions."),
            Self::CountLimitExceeded => f.write_str("Sticker set is full."),
            Self::DataTypeMismatch => f.write_str("Sticker data does not match the set type."),
            Self::EmojiListEmpty => f.write_str("No emojis associated with the sticker."),
            Self::SetIsEmpty => f.write_str("Sticker set is empty."),
            Self::TelegramNotInstalled => f.write_str("Telegram is not installed."),
        }
    }
}

impl StdError for Error {}

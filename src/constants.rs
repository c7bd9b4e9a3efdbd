//! A set of constants used by the library.

use std::time::Duration;

/// The side length a static sticker bitmap must have, in pixels.
///
/// The width must be exactly this value; the height may be anything from 1
/// up to and including it.
pub const STICKER_DIMENSIONS_SIDE: u32 = 512;

/// The maximum size of a static sticker PNG, in bytes.
pub const STATIC_STICKER_MAX_SIZE: usize = 512 * 1024;

/// The maximum size of an animated sticker TGS file, in bytes.
pub const ANIMATED_STICKER_MAX_SIZE: usize = 64 * 1024;

/// The maximum size of a video sticker WEBM file, in bytes.
pub const VIDEO_STICKER_MAX_SIZE: usize = 256 * 1024;

/// The maximum number of stickers in a single sticker set.
pub const STICKER_SET_MAX_COUNT: usize = 120;

/// The type tag attached to a delivered sticker set payload.
///
/// Telegram looks this tag up in the shared medium when woken.
pub const STICKER_SET_DATA_TYPE: &str = "org.telegram.third-party.stickerset";

/// The URL scheme registered by the Telegram application.
pub const TELEGRAM_SCHEME: &str = "tg";

/// The URL invoked to wake Telegram up after a payload has been delivered.
pub const IMPORT_STICKERS_URL: &str = "tg://importStickers";

/// How long a delivered payload stays readable before the medium may
/// discard it.
pub const PAYLOAD_EXPIRATION: Duration = Duration::from_secs(60);

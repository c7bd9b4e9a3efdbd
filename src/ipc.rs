//! The hand-off seam between the library and a Telegram client.

use std::time::Duration;

use url::Url;

use crate::constants::IMPORT_STICKERS_URL;

/// A one-way channel delivering a serialized sticker set to Telegram.
///
/// [`StickerSet::import`] stays out of platform specifics by going through
/// this trait; the host application implements it on top of whatever exchange
/// mechanism its platform provides, such as a pasteboard or a shared file.
///
/// [`StickerSet::import`]: crate::model::StickerSet::import
pub trait ExchangeChannel {
    /// Whether a Telegram client is present to receive the hand-off.
    fn is_available(&self) -> bool;

    /// Publishes the serialized set under the given data type, valid for the
    /// given duration, and brings Telegram to the foreground to pick it up.
    fn deliver(&self, payload: Vec<u8>, data_type: &str, expiration: Duration);
}

/// The deep link a host application opens to put Telegram into import mode.
///
/// # Examples
///
/// ```rust
/// use telegram_stickers_import::ipc::import_url;
///
/// assert_eq!(import_url().scheme(), "tg");
/// ```
#[must_use]
pub fn import_url() -> Url {
    Url::parse(IMPORT_STICKERS_URL).expect("can't fail")
}

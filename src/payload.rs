//! The JSON wire representation of a sticker set.

use base64::prelude::*;
use serde::Serialize;

use crate::model::{StickerSet, StickerSetType};

/// The document handed to Telegram during an import.
///
/// Binary payloads are carried base64-encoded. The thumbnail key is left out
/// entirely when the set has none; Telegram treats a present-but-null key as
/// malformed.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StickerSetPayload<'a> {
    software: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    thumbnail: Option<String>,
    is_animated: bool,
    is_video: bool,
    stickers: Vec<StickerPayload<'a>>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StickerPayload<'a> {
    data: String,
    mime_type: &'static str,
    emojis: &'a [String],
}

impl<'a> StickerSetPayload<'a> {
    pub(crate) fn new(set: &'a StickerSet) -> Self {
        let stickers = set
            .stickers()
            .iter()
            .map(|sticker| StickerPayload {
                data: BASE64_STANDARD.encode(sticker.data().bytes()),
                mime_type: sticker.data().mime_type(),
                emojis: sticker.emojis(),
            })
            .collect();

        Self {
            software: set.software(),
            thumbnail: set.thumbnail().map(|data| BASE64_STANDARD.encode(data.bytes())),
            is_animated: set.kind() == StickerSetType::Animation,
            is_video: set.kind() == StickerSetType::Video,
            stickers,
        }
    }
}

//! Mappings of the objects that make up an importable sticker set, with
//! helper methods for assembling and validating them.
//!
//! Models enforce Telegram's sticker rules as they are built, so a
//! [`StickerSet`] that exists is also one Telegram would accept, short of the
//! checks only Telegram itself can perform.

pub mod error;

mod sticker;
mod sticker_set;

pub use self::error::Error as ModelError;
pub use self::sticker::{Sticker, StickerData};
pub use self::sticker_set::{StickerSet, StickerSetType};

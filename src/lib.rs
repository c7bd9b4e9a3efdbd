//! A Rust library for importing third-party sticker sets into Telegram.
//!
//! An importable set is assembled as a [`StickerSet`]: pick the [`StickerSetType`] shared by
//! all of its stickers, then add each payload as [`StickerData`] together with the emojis the
//! sticker stands for. Payloads are checked against Telegram's rules as they are added, so
//! mistakes surface at the call site rather than after the hand-off.
//!
//! Once assembled, [`StickerSet::import`] serializes the set and hands it to the Telegram
//! client through an [`ExchangeChannel`], the one platform hook the host application
//! implements on top of whatever exchange mechanism its platform provides.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::time::Duration;
//!
//! use telegram_stickers_import::{ExchangeChannel, StickerData, StickerSet, StickerSetType};
//!
//! struct Pasteboard;
//!
//! impl ExchangeChannel for Pasteboard {
//!     fn is_available(&self) -> bool {
//!         true
//!     }
//!
//!     fn deliver(&self, payload: Vec<u8>, data_type: &str, expiration: Duration) {
//!         // Publish the payload where the Telegram client picks it up.
//!     }
//! }
//!
//! fn main() -> Result<(), telegram_stickers_import::Error> {
//!     let mut set = StickerSet::new("My Exporter", StickerSetType::Image);
//!     set.add_sticker(StickerData::image_file("happy.png")?, ["😀"])?;
//!     set.add_sticker(StickerData::image_file("sad.png")?, ["😢"])?;
//!     set.import(&Pasteboard)?;
//!     Ok(())
//! }
//! ```
//!
//! # Installation
//!
//! Add the following to your `Cargo.toml` file:
//!
//! ```toml
//! [dependencies]
//! telegram-stickers-import = "0.1"
//! ```
#![doc(html_root_url = "https://docs.rs/telegram-stickers-import/*")]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(
    unused,
    rust_2018_idioms,
    clippy::unwrap_used,
    clippy::clone_on_ref_ptr,
    clippy::fallible_impl_from,
    clippy::let_underscore_must_use,
    clippy::format_push_string,
    clippy::pedantic
)]
#![allow(
    // Allowed as they are too pedantic
    clippy::module_name_repetitions,
    clippy::unreadable_literal,
    clippy::doc_markdown,
    clippy::missing_panics_doc
)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod constants;
pub mod ipc;
pub mod model;
pub mod utils;

mod error;
mod payload;

pub use crate::error::{Error, Result};
pub use crate::ipc::ExchangeChannel;
pub use crate::model::{ModelError, Sticker, StickerData, StickerSet, StickerSetType};

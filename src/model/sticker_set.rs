//! Models for a sticker set and the import hand-off to Telegram.

use tracing::debug;

use crate::constants::{PAYLOAD_EXPIRATION, STICKER_SET_DATA_TYPE, STICKER_SET_MAX_COUNT};
use crate::error::Result;
use crate::ipc::ExchangeChannel;
use crate::model::sticker::{Sticker, StickerData};
use crate::model::ModelError;
use crate::payload::StickerSetPayload;

/// The format shared by every sticker of a set.
///
/// Telegram does not allow mixing formats within one set, so the type is
/// fixed when the set is created and every payload added afterwards must
/// match it.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum StickerSetType {
    /// A set of static PNG stickers.
    Image,
    /// A set of animated TGS stickers.
    Animation,
    /// A set of video WEBM stickers.
    Video,
}

impl StickerSetType {
    /// Whether the given payload is of this set type.
    #[must_use]
    pub fn matches(self, data: &StickerData) -> bool {
        matches!(
            (self, data),
            (Self::Image, StickerData::Image(_))
                | (Self::Animation, StickerData::Animation(_))
                | (Self::Video, StickerData::Video(_))
        )
    }
}

/// An ordered collection of stickers to be imported into Telegram as one set.
///
/// A set is assembled incrementally with [`Self::add_sticker`] and
/// [`Self::set_thumbnail`], both of which validate their payload up front so
/// that a set can only ever hold stickers Telegram would accept. Once
/// assembled, [`Self::import`] serializes the set and hands it to Telegram.
///
/// # Examples
///
/// ```rust,no_run
/// use telegram_stickers_import::{StickerData, StickerSet, StickerSetType};
///
/// # fn main() -> Result<(), telegram_stickers_import::Error> {
/// let mut set = StickerSet::new("My Exporter", StickerSetType::Image);
/// set.add_sticker(StickerData::image_file("happy.png")?, ["😀"])?;
/// set.add_sticker(StickerData::image_file("sad.png")?, ["😢", "😿"])?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct StickerSet {
    software: String,
    kind: StickerSetType,
    thumbnail: Option<StickerData>,
    stickers: Vec<Sticker>,
}

impl StickerSet {
    /// Creates an empty sticker set.
    ///
    /// `software` names the application the set is exported from; Telegram
    /// displays it to the user during the import.
    #[must_use]
    pub fn new(software: impl Into<String>, kind: StickerSetType) -> Self {
        Self {
            software: software.into(),
            kind,
            thumbnail: None,
            stickers: Vec::new(),
        }
    }

    /// The name of the exporting application.
    #[must_use]
    pub fn software(&self) -> &str {
        &self.software
    }

    /// The format shared by every sticker of the set.
    #[must_use]
    pub fn kind(&self) -> StickerSetType {
        self.kind
    }

    /// The thumbnail payload, if one has been set.
    #[must_use]
    pub fn thumbnail(&self) -> Option<&StickerData> {
        self.thumbnail.as_ref()
    }

    /// The stickers of the set, in insertion order.
    #[must_use]
    pub fn stickers(&self) -> &[Sticker] {
        &self.stickers
    }

    /// The number of stickers in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stickers.len()
    }

    /// Whether the set holds no stickers yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stickers.is_empty()
    }

    /// Validates a payload and appends it to the set together with the emojis
    /// it stands for.
    ///
    /// On error the set is left exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::CountLimitExceeded`] if the set already holds
    /// 120 stickers, [`ModelError::DataTypeMismatch`] if the payload format
    /// differs from the set type, [`ModelError::EmojiListEmpty`] if no emojis
    /// are given, or a validation error from [`StickerData::validate`].
    pub fn add_sticker(
        &mut self,
        data: StickerData,
        emojis: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<()> {
        if self.stickers.len() >= STICKER_SET_MAX_COUNT {
            return Err(ModelError::CountLimitExceeded.into());
        }

        if !self.kind.matches(&data) {
            return Err(ModelError::DataTypeMismatch.into());
        }

        let emojis: Vec<String> = emojis.into_iter().map(Into::into).collect();
        if emojis.is_empty() {
            return Err(ModelError::EmojiListEmpty.into());
        }

        data.validate()?;

        self.stickers.push(Sticker::new(data, emojis));
        Ok(())
    }

    /// Validates a payload and installs it as the set thumbnail, replacing
    /// any previous one.
    ///
    /// On error the previous thumbnail is kept.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DataTypeMismatch`] if the payload format differs
    /// from the set type, or a validation error from
    /// [`StickerData::validate`].
    pub fn set_thumbnail(&mut self, data: StickerData) -> Result<()> {
        if !self.kind.matches(&data) {
            return Err(ModelError::DataTypeMismatch.into());
        }

        data.validate()?;

        self.thumbnail = Some(data);
        Ok(())
    }

    /// Serializes the set and hands it to Telegram over the given channel.
    ///
    /// The set itself is not consumed; it can be amended and imported again.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::TelegramNotInstalled`] if the channel reports no
    /// receiver, [`ModelError::SetIsEmpty`] if the set holds no stickers, or
    /// [`Error::Json`] if serialization fails. The channel is only invoked
    /// once all checks have passed.
    ///
    /// [`Error::Json`]: crate::Error::Json
    pub fn import(&self, channel: &impl ExchangeChannel) -> Result<()> {
        if !channel.is_available() {
            return Err(ModelError::TelegramNotInstalled.into());
        }

        if self.stickers.is_empty() {
            return Err(ModelError::SetIsEmpty.into());
        }

        let payload = serde_json::to_vec(&StickerSetPayload::new(self))?;

        debug!(
            stickers = self.stickers.len(),
            bytes = payload.len(),
            "handing sticker set over to Telegram"
        );

        channel.deliver(payload, STICKER_SET_DATA_TYPE, PAYLOAD_EXPIRATION);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use std::cell::RefCell;
    use std::time::Duration;

    use super::*;
    use crate::error::Error;

    struct RecordingChannel {
        available: bool,
        deliveries: RefCell<Vec<(Vec<u8>, String, Duration)>>,
    }

    impl RecordingChannel {
        fn new(available: bool) -> Self {
            Self {
                available,
                deliveries: RefCell::new(Vec::new()),
            }
        }
    }

    impl ExchangeChannel for RecordingChannel {
        fn is_available(&self) -> bool {
            self.available
        }

        fn deliver(&self, payload: Vec<u8>, data_type: &str, expiration: Duration) {
            self.deliveries.borrow_mut().push((payload, data_type.to_owned(), expiration));
        }
    }

    fn png(width: u32, height: u32) -> Vec<u8> {
        let image = image::RgbaImage::from_pixel(width, height, image::Rgba([0, 128, 255, 255]));
        let mut buf = std::io::Cursor::new(Vec::new());
        image.write_to(&mut buf, image::ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    fn model_error(result: Result<()>) -> ModelError {
        match result.unwrap_err() {
            Error::Model(err) => err,
            other => panic!("expected a model error, got {other:?}"),
        }
    }

    #[test]
    fn type_matches_payload_variants() {
        let image = StickerData::Image(vec![0]);
        let animation = StickerData::Animation(vec![0]);
        let video = StickerData::Video(vec![0]);

        assert!(StickerSetType::Image.matches(&image));
        assert!(!StickerSetType::Image.matches(&animation));
        assert!(!StickerSetType::Image.matches(&video));

        assert!(StickerSetType::Animation.matches(&animation));
        assert!(!StickerSetType::Animation.matches(&image));

        assert!(StickerSetType::Video.matches(&video));
        assert!(!StickerSetType::Video.matches(&animation));
    }

    #[test]
    fn new_set_is_empty() {
        let set = StickerSet::new("Exporter", StickerSetType::Image);
        assert_eq!(set.software(), "Exporter");
        assert_eq!(set.kind(), StickerSetType::Image);
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(set.thumbnail().is_none());
        assert!(set.stickers().is_empty());
    }

    #[test]
    fn add_sticker_keeps_insertion_order() {
        let mut set = StickerSet::new("Exporter", StickerSetType::Animation);
        set.add_sticker(StickerData::Animation(vec![1]), ["😀"]).unwrap();
        set.add_sticker(StickerData::Animation(vec![2]), ["😢", "😿"]).unwrap();
        set.add_sticker(StickerData::Animation(vec![3]), ["🎉"]).unwrap();

        assert_eq!(set.len(), 3);
        let bytes: Vec<&[u8]> = set.stickers().iter().map(|s| s.data().bytes()).collect();
        assert_eq!(bytes, [&[1][..], &[2][..], &[3][..]]);
        assert_eq!(set.stickers()[1].emojis(), ["😢", "😿"]);
    }

    #[test]
    fn add_sticker_rejects_mismatched_payloads() {
        let mut set = StickerSet::new("Exporter", StickerSetType::Image);
        let result = set.add_sticker(StickerData::Video(vec![0; 16]), ["😀"]);
        assert_eq!(model_error(result), ModelError::DataTypeMismatch);
        assert!(set.is_empty());
    }

    #[test]
    fn add_sticker_rejects_empty_emoji_lists() {
        let mut set = StickerSet::new("Exporter", StickerSetType::Image);
        let result = set.add_sticker(StickerData::Image(png(512, 512)), Vec::<String>::new());
        assert_eq!(model_error(result), ModelError::EmojiListEmpty);
        assert!(set.is_empty());
    }

    #[test]
    fn add_sticker_rejects_invalid_payloads_without_mutating() {
        let mut set = StickerSet::new("Exporter", StickerSetType::Image);
        set.add_sticker(StickerData::Image(png(512, 512)), ["😀"]).unwrap();

        let result = set.add_sticker(StickerData::Image(png(300, 300)), ["😢"]);
        assert_eq!(model_error(result), ModelError::InvalidDimensions(300, 300));
        assert_eq!(set.len(), 1);

        let result = set.add_sticker(StickerData::Image(Vec::new()), ["😢"]);
        assert_eq!(model_error(result), ModelError::EmptyFile);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn add_sticker_enforces_the_count_limit() {
        let mut set = StickerSet::new("Exporter", StickerSetType::Animation);
        for _ in 0..120 {
            set.add_sticker(StickerData::Animation(vec![0; 8]), ["😀"]).unwrap();
        }

        let result = set.add_sticker(StickerData::Animation(vec![0; 8]), ["😀"]);
        assert_eq!(model_error(result), ModelError::CountLimitExceeded);
        assert_eq!(set.len(), 120);
    }

    #[test]
    fn add_sticker_checks_count_before_payload_type() {
        let mut set = StickerSet::new("Exporter", StickerSetType::Animation);
        for _ in 0..120 {
            set.add_sticker(StickerData::Animation(vec![0; 8]), ["😀"]).unwrap();
        }

        // A full set wins over every later check, even for a payload that
        // would also be rejected on its own.
        let result = set.add_sticker(StickerData::Image(Vec::new()), Vec::<String>::new());
        assert_eq!(model_error(result), ModelError::CountLimitExceeded);
    }

    #[test]
    fn add_sticker_checks_payload_type_before_emojis() {
        let mut set = StickerSet::new("Exporter", StickerSetType::Image);
        let result = set.add_sticker(StickerData::Video(Vec::new()), Vec::<String>::new());
        assert_eq!(model_error(result), ModelError::DataTypeMismatch);
    }

    #[test]
    fn add_sticker_checks_emojis_before_payload_validation() {
        let mut set = StickerSet::new("Exporter", StickerSetType::Image);
        let result = set.add_sticker(StickerData::Image(Vec::new()), Vec::<String>::new());
        assert_eq!(model_error(result), ModelError::EmojiListEmpty);
    }

    #[test]
    fn thumbnail_is_validated_and_replaced() {
        let mut set = StickerSet::new("Exporter", StickerSetType::Image);

        set.set_thumbnail(StickerData::Image(png(512, 300))).unwrap();
        assert_eq!(set.thumbnail().unwrap().bytes(), png(512, 300));

        let result = set.set_thumbnail(StickerData::Animation(vec![0; 8]));
        assert_eq!(model_error(result), ModelError::DataTypeMismatch);

        let result = set.set_thumbnail(StickerData::Image(png(100, 100)));
        assert_eq!(model_error(result), ModelError::InvalidDimensions(100, 100));

        // Failed replacements keep the previous thumbnail.
        assert_eq!(set.thumbnail().unwrap().bytes(), png(512, 300));

        set.set_thumbnail(StickerData::Image(png(512, 512))).unwrap();
        assert_eq!(set.thumbnail().unwrap().bytes(), png(512, 512));
    }

    #[test]
    fn import_requires_a_receiver() {
        let mut set = StickerSet::new("Exporter", StickerSetType::Image);
        set.add_sticker(StickerData::Image(png(512, 512)), ["😀"]).unwrap();

        let channel = RecordingChannel::new(false);
        let result = set.import(&channel);
        assert_eq!(model_error(result), ModelError::TelegramNotInstalled);
        assert!(channel.deliveries.borrow().is_empty());
    }

    #[test]
    fn import_checks_the_receiver_before_emptiness() {
        let set = StickerSet::new("Exporter", StickerSetType::Image);
        let channel = RecordingChannel::new(false);
        let result = set.import(&channel);
        assert_eq!(model_error(result), ModelError::TelegramNotInstalled);
    }

    #[test]
    fn import_rejects_empty_sets() {
        let set = StickerSet::new("Exporter", StickerSetType::Image);
        let channel = RecordingChannel::new(true);
        let result = set.import(&channel);
        assert_eq!(model_error(result), ModelError::SetIsEmpty);
        assert!(channel.deliveries.borrow().is_empty());
    }

    #[test]
    fn import_delivers_the_serialized_set() {
        let mut set = StickerSet::new("Exporter", StickerSetType::Video);
        set.add_sticker(StickerData::Video(vec![0; 16]), ["😀"]).unwrap();

        let channel = RecordingChannel::new(true);
        set.import(&channel).unwrap();

        let deliveries = channel.deliveries.borrow();
        assert_eq!(deliveries.len(), 1);

        let (payload, data_type, expiration) = &deliveries[0];
        assert_eq!(data_type, "org.telegram.third-party.stickerset");
        assert_eq!(*expiration, Duration::from_secs(60));

        let json: serde_json::Value = serde_json::from_slice(payload).unwrap();
        assert_eq!(json["software"], "Exporter");
        assert_eq!(json["isVideo"], true);
    }

    #[test]
    fn import_does_not_consume_the_set() {
        let mut set = StickerSet::new("Exporter", StickerSetType::Image);
        set.add_sticker(StickerData::Image(png(512, 512)), ["😀"]).unwrap();

        let channel = RecordingChannel::new(true);
        set.import(&channel).unwrap();

        set.add_sticker(StickerData::Image(png(512, 300)), ["😢"]).unwrap();
        set.import(&channel).unwrap();

        let deliveries = channel.deliveries.borrow();
        assert_eq!(deliveries.len(), 2);

        let first: serde_json::Value = serde_json::from_slice(&deliveries[0].0).unwrap();
        let second: serde_json::Value = serde_json::from_slice(&deliveries[1].0).unwrap();
        assert_eq!(first["stickers"].as_array().unwrap().len(), 1);
        assert_eq!(second["stickers"].as_array().unwrap().len(), 2);
    }
}

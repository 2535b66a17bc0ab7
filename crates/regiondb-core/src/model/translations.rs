// crates/regiondb-core/src/model/translations.rs

//! The fixed 16-slot translation block shared by country and region records.

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Number of translation slots in every record.
pub const TRANSLATION_SLOTS: usize = 16;

/// Language tag of a translation slot, in on-disk slot order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    Japanese,
    English,
    French,
    German,
    Italian,
    Spanish,
    ChineseSimple,
    Korean,
    Dutch,
    Portuguese,
    Russian,
    ChineseTraditional,
    Unknown1,
    Unknown2,
    Unknown3,
    Unknown4,
}

impl Language {
    /// Every tag, in slot order.
    pub const ALL: [Language; TRANSLATION_SLOTS] = [
        Language::Japanese,
        Language::English,
        Language::French,
        Language::German,
        Language::Italian,
        Language::Spanish,
        Language::ChineseSimple,
        Language::Korean,
        Language::Dutch,
        Language::Portuguese,
        Language::Russian,
        Language::ChineseTraditional,
        Language::Unknown1,
        Language::Unknown2,
        Language::Unknown3,
        Language::Unknown4,
    ];

    /// Position of this language inside a record's translation block.
    #[inline]
    pub fn slot(self) -> usize {
        self as usize
    }

    /// The key used for this language in the exported JSON.
    pub fn key(self) -> &'static str {
        match self {
            Language::Japanese => "japanese",
            Language::English => "english",
            Language::French => "french",
            Language::German => "german",
            Language::Italian => "italian",
            Language::Spanish => "spanish",
            Language::ChineseSimple => "chinese_simple",
            Language::Korean => "korean",
            Language::Dutch => "dutch",
            Language::Portuguese => "portuguese",
            Language::Russian => "russian",
            Language::ChineseTraditional => "chinese_traditional",
            Language::Unknown1 => "unknown1",
            Language::Unknown2 => "unknown2",
            Language::Unknown3 => "unknown3",
            Language::Unknown4 => "unknown4",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.key() == key)
    }
}

/// One decoded string per [`Language`], always all sixteen of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationSet([String; TRANSLATION_SLOTS]);

impl TranslationSet {
    #[inline]
    pub fn get(&self, lang: Language) -> &str {
        &self.0[lang.slot()]
    }

    #[inline]
    pub fn set(&mut self, lang: Language, value: impl Into<String>) {
        self.0[lang.slot()] = value.into();
    }

    /// Shorthand for the English slot, which doubles as the display name.
    #[inline]
    pub fn english(&self) -> &str {
        self.get(Language::English)
    }

    /// `(language, text)` pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (Language, &str)> + '_ {
        Language::ALL
            .into_iter()
            .zip(self.0.iter().map(String::as_str))
    }
}

impl Serialize for TranslationSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(TRANSLATION_SLOTS))?;
        for (lang, text) in self.iter() {
            map.serialize_entry(lang.key(), text)?;
        }
        map.end()
    }
}

struct TranslationSetVisitor;

impl<'de> Visitor<'de> for TranslationSetVisitor {
    type Value = TranslationSet;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of language keys to strings")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut set = TranslationSet::default();
        while let Some(key) = access.next_key::<String>()? {
            let lang = Language::from_key(&key).ok_or_else(|| {
                de::Error::unknown_field(&key, &[] as &'static [&'static str])
            })?;
            set.set(lang, access.next_value::<String>()?);
        }
        Ok(set)
    }
}

impl<'de> Deserialize<'de> for TranslationSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(TranslationSetVisitor)
    }
}

//! Builders for synthetic title dumps.
#![allow(dead_code)]

use regiondb_core::decode::{COUNTRY_RECORD_SIZE, REGION_RECORD_SIZE, TRANSLATION_FIELD_SIZE};
use regiondb_core::Language;
use std::fs;
use std::path::{Path, PathBuf};

pub fn text_field(s: &str) -> Vec<u8> {
    let mut out: Vec<u8> = s.encode_utf16().flat_map(u16::to_be_bytes).collect();
    out.resize(TRANSLATION_FIELD_SIZE, 0);
    out
}

pub fn translation_block(names: &[(Language, &str)]) -> Vec<u8> {
    let mut out = Vec::with_capacity(16 * TRANSLATION_FIELD_SIZE);
    for lang in Language::ALL {
        let text = names
            .iter()
            .find(|(l, _)| *l == lang)
            .map_or("", |(_, s)| *s);
        out.extend(text_field(text));
    }
    out
}

pub fn country_record(id: u32, declared_regions: u32, names: &[(Language, &str)]) -> Vec<u8> {
    let mut rec = id.to_le_bytes().to_vec();
    rec.extend(declared_regions.to_be_bytes());
    rec.extend([0u8; 4]);
    rec.extend(translation_block(names));
    rec.extend([0u8; 0x30]);
    assert_eq!(rec.len(), COUNTRY_RECORD_SIZE);
    rec
}

pub fn region_record(id: u32, names: &[(Language, &str)], lat: u16, lon: u16) -> Vec<u8> {
    let mut rec = id.to_be_bytes().to_vec();
    rec.extend(translation_block(names));
    rec.extend([0u8; 0x10]);
    rec.extend(lat.to_be_bytes());
    rec.extend(lon.to_be_bytes());
    assert_eq!(rec.len(), REGION_RECORD_SIZE);
    rec
}

pub fn table(count: u32, records: &[Vec<u8>]) -> Vec<u8> {
    let mut buf = count.to_be_bytes().to_vec();
    for rec in records {
        buf.extend_from_slice(rec);
    }
    buf
}

/// A pair of title dumps laid out the way the console stores them.
pub struct DumpTree {
    pub regions_title: PathBuf,
    pub iso_title: PathBuf,
}

impl DumpTree {
    pub fn new(root: &Path, iso_list: &str) -> Self {
        let regions_title = root.join("0005001B-10052000");
        let iso_title = root.join("0005001B-1005C000");
        fs::create_dir_all(regions_title.join("content/00")).unwrap();
        fs::create_dir_all(iso_title.join("content")).unwrap();
        fs::write(iso_title.join("content/country.txt"), iso_list).unwrap();
        Self {
            regions_title,
            iso_title,
        }
    }

    pub fn folder(&self, name: &str) -> PathBuf {
        let dir = self.regions_title.join("content/00").join(name);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    pub fn write(&self, folder: &str, file: &str, bytes: &[u8]) {
        fs::write(self.folder(folder).join(file), bytes).unwrap();
    }
}

/// English + German names, the rest blank.
pub fn names<'a>(english: &'a str, german: &'a str) -> Vec<(Language, &'a str)> {
    vec![(Language::English, english), (Language::German, german)]
}

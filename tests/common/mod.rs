#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Once;

static INIT: Once = Once::new();

pub fn init_test_logger() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Contents of one fixture archive.
pub struct IpaFixture<'a> {
    pub item_name: Option<&'a str>,
    pub item_id: plist::Value,
    pub bundle: &'a str,
    pub display_name: Option<&'a str>,
    pub background_modes: Option<&'a [&'a str]>,
}

impl<'a> IpaFixture<'a> {
    pub fn new(item_name: &'a str, item_id: i64, bundle: &'a str) -> Self {
        Self {
            item_name: Some(item_name),
            item_id: plist::Value::Integer(item_id.into()),
            bundle,
            display_name: None,
            background_modes: None,
        }
    }

    fn metadata_bytes(&self) -> Vec<u8> {
        let mut dict = plist::Dictionary::new();
        if let Some(name) = self.item_name {
            dict.insert("itemName".to_string(), plist::Value::String(name.to_string()));
        }
        dict.insert("itemId".to_string(), self.item_id.clone());
        let mut buf = Vec::new();
        plist::Value::Dictionary(dict).to_writer_xml(&mut buf).unwrap();
        buf
    }

    fn info_bytes(&self) -> Vec<u8> {
        let mut dict = plist::Dictionary::new();
        dict.insert(
            "CFBundleExecutable".to_string(),
            plist::Value::String(self.bundle.to_string()),
        );
        if let Some(name) = self.display_name {
            dict.insert(
                "CFBundleDisplayName".to_string(),
                plist::Value::String(name.to_string()),
            );
        }
        if let Some(modes) = self.background_modes {
            dict.insert(
                "UIBackgroundModes".to_string(),
                plist::Value::Array(
                    modes
                        .iter()
                        .map(|m| plist::Value::String(m.to_string()))
                        .collect(),
                ),
            );
        }
        let mut buf = Vec::new();
        plist::Value::Dictionary(dict).to_writer_binary(&mut buf).unwrap();
        buf
    }

    /// Write the fixture as `<dir>/<name>`.
    pub fn write(&self, dir: &Path, name: &str) -> PathBuf {
        let metadata = self.metadata_bytes();
        let info = self.info_bytes();
        let info_entry = format!("Payload/{}.app/Info.plist", self.bundle);
        let exe_entry = format!("Payload/{}.app/{}", self.bundle, self.bundle);
        write_zip(
            dir,
            name,
            &[
                ("iTunesArtwork", b"\x89PNG".as_slice()),
                ("iTunesMetadata.plist", metadata.as_slice()),
                (info_entry.as_str(), info.as_slice()),
                (exe_entry.as_str(), b"\xCA\xFE\xBA\xBE".as_slice()),
            ],
        )
    }
}

/// Helper: write a ZIP with the given entries, deflated.
pub fn write_zip(dir: &Path, name: &str, files: &[(&str, &[u8])]) -> PathBuf {
    let zip_path = dir.join(name);
    let file = fs::File::create(&zip_path).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated);

    for (entry_name, content) in files {
        writer.start_file(entry_name.to_string(), options).unwrap();
        writer.write_all(content).unwrap();
    }
    writer.finish().unwrap();
    zip_path
}

/// Helper: overwrite the uncompressed size recorded for `entry_name` in both
/// the local and the central directory headers of an existing ZIP.
pub fn declare_entry_size(zip_path: &Path, entry_name: &str, size: u32) {
    const LOCAL_SIG: [u8; 4] = [0x50, 0x4b, 0x03, 0x04];
    const CENTRAL_SIG: [u8; 4] = [0x50, 0x4b, 0x01, 0x02];

    let mut bytes = fs::read(zip_path).unwrap();
    let name = entry_name.as_bytes();
    let mut patched = 0;

    for pos in 0..bytes.len().saturating_sub(46) {
        let header = &bytes[pos..pos + 4];
        let (name_at, size_at, len_at) = if header == LOCAL_SIG {
            (pos + 30, pos + 22, pos + 26)
        } else if header == CENTRAL_SIG {
            (pos + 46, pos + 24, pos + 28)
        } else {
            continue;
        };
        let name_len = u16::from_le_bytes([bytes[len_at], bytes[len_at + 1]]) as usize;
        if bytes.get(name_at..name_at + name_len) == Some(name) {
            bytes[size_at..size_at + 4].copy_from_slice(&size.to_le_bytes());
            patched += 1;
        }
    }

    assert_eq!(patched, 2, "expected a local and a central header for {entry_name}");
    fs::write(zip_path, bytes).unwrap();
}

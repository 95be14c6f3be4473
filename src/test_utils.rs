use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Once;

static INIT: Once = Once::new();

pub fn init_test_logger() {
    INIT.call_once(|| {
        // Initialize logger only once
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Build a plist dictionary value from key/value pairs.
pub fn plist_dict(pairs: Vec<(&str, plist::Value)>) -> plist::Value {
    let mut dict = plist::Dictionary::new();
    for (key, value) in pairs {
        dict.insert(key.to_string(), value);
    }
    plist::Value::Dictionary(dict)
}

pub fn plist_strings(items: &[&str]) -> plist::Value {
    plist::Value::Array(
        items
            .iter()
            .map(|s| plist::Value::String(s.to_string()))
            .collect(),
    )
}

pub fn to_xml_bytes(value: &plist::Value) -> Vec<u8> {
    let mut buf = Vec::new();
    value.to_writer_xml(&mut buf).unwrap();
    buf
}

pub fn to_binary_bytes(value: &plist::Value) -> Vec<u8> {
    let mut buf = Vec::new();
    value.to_writer_binary(&mut buf).unwrap();
    buf
}

/// `iTunesMetadata.plist` content with the given name and numeric id.
pub fn metadata_plist(item_name: &str, item_id: i64) -> Vec<u8> {
    to_xml_bytes(&plist_dict(vec![
        ("itemName", plist::Value::String(item_name.to_string())),
        ("itemId", plist::Value::Integer(item_id.into())),
    ]))
}

/// `Info.plist` content, optionally with a display name and background modes.
pub fn info_plist(display_name: Option<&str>, background_modes: Option<&[&str]>) -> Vec<u8> {
    let mut pairs = vec![(
        "CFBundleIdentifier",
        plist::Value::String("com.example.app".to_string()),
    )];
    if let Some(name) = display_name {
        pairs.push(("CFBundleDisplayName", plist::Value::String(name.to_string())));
    }
    if let Some(modes) = background_modes {
        pairs.push(("UIBackgroundModes", plist_strings(modes)));
    }
    to_binary_bytes(&plist_dict(pairs))
}

/// Helper: write a ZIP with the given entries, in order.
pub fn create_test_ipa(dir: &Path, name: &str, files: &[(&str, &[u8])]) -> PathBuf {
    let zip_path = dir.join(name);
    let file = fs::File::create(&zip_path).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    let options =
        zip::write::SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);

    for (entry_name, content) in files {
        writer.start_file(entry_name.to_string(), options).unwrap();
        writer.write_all(content).unwrap();
    }
    writer.finish().unwrap();
    zip_path
}

/// Helper: a well-formed `.ipa` with a single `Payload/<bundle>.app`.
pub fn create_simple_ipa(
    dir: &Path,
    name: &str,
    bundle: &str,
    item_name: &str,
    item_id: i64,
) -> PathBuf {
    let info_entry = format!("Payload/{bundle}.app/Info.plist");
    let binary_entry = format!("Payload/{bundle}.app/{bundle}");
    let metadata = metadata_plist(item_name, item_id);
    let info = info_plist(None, None);
    create_test_ipa(
        dir,
        name,
        &[
            ("iTunesMetadata.plist", metadata.as_slice()),
            (info_entry.as_str(), info.as_slice()),
            (binary_entry.as_str(), b"\xCA\xFE\xBA\xBE".as_slice()),
        ],
    )
}

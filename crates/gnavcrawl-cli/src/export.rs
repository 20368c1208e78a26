//! CSV output.
//!
//! The sheet is consumed in Excel by Japanese-locale users, so the file is
//! UTF-8 with a byte-order mark and the header row uses the original
//! Japanese column names.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use gnavcrawl_core::ListingRecord;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

const HEADER: [&str; 9] = [
    "店舗名",
    "電話番号",
    "メールアドレス",
    "都道府県",
    "市区町村",
    "番地",
    "建物名",
    "URL",
    "SSL",
];

/// Whether `path` is held open by another program.
///
/// A missing file is not locked; an existing file that cannot be opened for
/// append is.
#[must_use]
pub fn is_file_locked(path: &Path) -> bool {
    if !path.exists() {
        return false;
    }
    OpenOptions::new().append(true).open(path).is_err()
}

/// Writes all records to `path` as BOM-prefixed UTF-8 CSV, one row each,
/// in the fixed column order.
///
/// # Errors
///
/// Returns an error when the file cannot be created or a row cannot be
/// serialized.
pub fn write_csv(records: &[ListingRecord], path: &Path) -> anyhow::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(UTF8_BOM)?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    writer.write_record(HEADER)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> ListingRecord {
        ListingRecord {
            name: "すし処 松".to_string(),
            phone: "03-1234-5678".to_string(),
            email: String::new(),
            prefecture: "東京都".to_string(),
            city: "渋谷区".to_string(),
            street: "1-1-1".to_string(),
            building: String::new(),
            url: Some("https://example.co.jp/".to_string()),
            tls_available: true,
        }
    }

    #[test]
    fn writes_bom_header_and_rows() {
        let path = std::env::temp_dir().join("gnavcrawl-export-test.csv");
        write_csv(&[sample_record(), ListingRecord::default()], &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(UTF8_BOM));

        let text = String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "店舗名,電話番号,メールアドレス,都道府県,市区町村,番地,建物名,URL,SSL"
        );
        assert!(lines.next().unwrap().starts_with("すし処 松,03-1234-5678"));
        // A defaulted record still serializes to a full row.
        assert_eq!(lines.next().unwrap(), ",,,,,,,,false");

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_file_is_not_locked() {
        assert!(!is_file_locked(Path::new(
            "/nonexistent/gnavcrawl-output.csv"
        )));
    }
}

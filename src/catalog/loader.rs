//! Catalog source loading utilities
//!
//! Provides raw, unvalidated records from a JSON file or from the embedded catalog.
//! Validation happens in [`WordCatalog::new`](super::WordCatalog::new).

use super::{CatalogError, WORDS};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// A catalog entry exactly as read from its source
///
/// Missing fields deserialize as empty strings and are rejected during validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RawRecord {
    pub word: String,
    pub category: String,
    pub hint: String,
}

impl RawRecord {
    #[must_use]
    pub fn new(word: &str, category: &str, hint: &str) -> Self {
        Self {
            word: word.to_string(),
            category: category.to_string(),
            hint: hint.to_string(),
        }
    }
}

/// Entries stay untyped until each one is converted on its own
#[derive(Debug, Deserialize)]
struct CatalogFile {
    words: Vec<serde_json::Value>,
}

/// Parse raw records from JSON text
///
/// The expected shape is `{"words": [{"word": .., "category": .., "hint": ..}]}`. An
/// entry that is not an object of string fields is skipped with a warning.
///
/// # Errors
/// Returns `CatalogError::Parse` if the text is not JSON or has no `words` array.
///
/// # Examples
/// ```
/// use ahorcado::catalog::loader::load_from_str;
///
/// let records = load_from_str(r#"{"words": [{"word": "gato", "category": "ANIMALES", "hint": "Maulla"}]}"#).unwrap();
/// assert_eq!(records[0].word, "gato");
/// ```
pub fn load_from_str(text: &str) -> Result<Vec<RawRecord>, CatalogError> {
    let file: CatalogFile =
        serde_json::from_str(text).map_err(|source| CatalogError::Parse { source })?;
    Ok(file
        .words
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value::<RawRecord>(entry) {
            Ok(record) => Some(record),
            Err(reason) => {
                warn!(index, %reason, "skipping malformed catalog entry");
                None
            }
        })
        .collect())
}

/// Load raw records from a JSON file
///
/// # Errors
/// Returns `CatalogError::Read` if the file cannot be opened and `CatalogError::Parse`
/// if its contents are malformed.
///
/// # Examples
/// ```no_run
/// use ahorcado::catalog::loader::load_from_file;
///
/// let records = load_from_file("data/words.json").unwrap();
/// println!("Loaded {} records", records.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<RawRecord>, CatalogError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let records = load_from_str(&text)?;
    debug!(path = %path.display(), records = records.len(), "read word catalog");
    Ok(records)
}

/// Raw records of the catalog compiled into the binary
#[must_use]
pub fn embedded_records() -> Vec<RawRecord> {
    WORDS
        .iter()
        .map(|&(word, category, hint)| RawRecord::new(word, category, hint))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_catalog_json() {
        let text = r#"{
            "words": [
                {"word": "gato", "category": "ANIMALES", "hint": "Mascota felina"},
                {"word": "japon", "category": "PAISES", "hint": "Sol naciente"}
            ]
        }"#;
        let records = load_from_str(text).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0], RawRecord::new("gato", "ANIMALES", "Mascota felina"));
        assert_eq!(records[1].category, "PAISES");
    }

    #[test]
    fn missing_fields_become_empty() {
        let records = load_from_str(r#"{"words": [{"word": "gato"}]}"#).unwrap();
        assert_eq!(records[0], RawRecord::new("gato", "", ""));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            load_from_str("{\"words\": ["),
            Err(CatalogError::Parse { .. })
        ));
        assert!(matches!(
            load_from_str("{}"),
            Err(CatalogError::Parse { .. })
        ));
    }

    #[test]
    fn malformed_entries_are_skipped() {
        let text = r#"{"words": [
            {"word": "gato", "category": "ANIMALES", "hint": "Maulla"},
            {"word": null, "category": "ANIMALES", "hint": "x"},
            {"word": "perro", "category": 7, "hint": "Ladra"},
            "mesa",
            {"word": "sol", "category": "OBJETOS", "hint": "Brilla"}
        ]}"#;
        let records = load_from_str(text).unwrap();

        assert_eq!(
            records,
            vec![
                RawRecord::new("gato", "ANIMALES", "Maulla"),
                RawRecord::new("sol", "OBJETOS", "Brilla"),
            ]
        );
    }

    #[test]
    fn words_must_be_an_array() {
        assert!(matches!(
            load_from_str(r#"{"words": {"word": "gato"}}"#),
            Err(CatalogError::Parse { .. })
        ));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = load_from_file("no/such/words.json").unwrap_err();
        assert!(matches!(err, CatalogError::Read { .. }));
    }

    #[test]
    fn embedded_records_match_generated_list() {
        let records = embedded_records();
        assert_eq!(records.len(), WORDS.len());
        assert!(records.iter().any(|r| r.word == "GATO"));
    }

    #[test]
    fn bundled_json_catalog_loads() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/words.json");
        let records = load_from_file(path).unwrap();
        assert_eq!(records.len(), 6);
    }
}

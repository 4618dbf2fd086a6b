//! Word catalog
//!
//! Holds the validated set of word records and answers random-selection queries. The
//! random source is always supplied by the caller so selection can be made deterministic
//! in tests.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::RawRecord;

use crate::core::{Category, CategoryOracle, WordRecord};
use derive_more::{Display, Error};
use rand::Rng;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Fatal catalog loading error
#[derive(Debug, Display, Error)]
pub enum CatalogError {
    #[display("cannot read word catalog {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[display("word catalog is not valid JSON: {source}")]
    Parse { source: serde_json::Error },
    #[display("word catalog contains no valid words")]
    Empty,
}

/// An immutable, non-empty collection of word records
#[derive(Debug, Clone)]
pub struct WordCatalog {
    records: Vec<WordRecord>,
}

impl WordCatalog {
    /// Validate raw records and build a catalog from the survivors
    ///
    /// Records with an empty field or a category outside the allow-list are skipped with
    /// a warning.
    ///
    /// # Errors
    /// Returns `CatalogError::Empty` if no record survives validation.
    pub fn new<I, C>(raw: I, categories: &C) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = RawRecord>,
        C: CategoryOracle + ?Sized,
    {
        let mut skipped = 0_usize;
        let records: Vec<WordRecord> = raw
            .into_iter()
            .filter_map(|entry| {
                match WordRecord::new(&entry.word, &entry.category, &entry.hint, categories) {
                    Ok(record) => Some(record),
                    Err(reason) => {
                        skipped += 1;
                        warn!(%reason, "skipping word record");
                        None
                    }
                }
            })
            .collect();

        if records.is_empty() {
            return Err(CatalogError::Empty);
        }

        info!(words = records.len(), skipped, "word catalog ready");
        Ok(Self { records })
    }

    /// Build the catalog compiled into the binary
    ///
    /// # Errors
    /// Returns `CatalogError::Empty` if none of the embedded records is valid for
    /// `categories`.
    pub fn embedded<C: CategoryOracle + ?Sized>(categories: &C) -> Result<Self, CatalogError> {
        Self::new(loader::embedded_records(), categories)
    }

    /// Pick a record uniformly from the whole catalog
    pub fn select_random<R: Rng>(&self, rng: &mut R) -> &WordRecord {
        // Non-empty by construction
        &self.records[rng.random_range(0..self.records.len())]
    }

    /// Pick a record uniformly among those in `category`
    ///
    /// Falls back to [`select_random`](Self::select_random) over the whole catalog when
    /// no record belongs to `category`.
    pub fn select_random_in<R: Rng>(&self, category: &Category, rng: &mut R) -> &WordRecord {
        let matching: Vec<&WordRecord> = self
            .records
            .iter()
            .filter(|record| record.category() == category)
            .collect();

        if matching.is_empty() {
            debug!(%category, "no words in category, selecting from full catalog");
            return self.select_random(rng);
        }

        matching[rng.random_range(0..matching.len())]
    }

    /// Number of records (always at least one)
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn records(&self) -> &[WordRecord] {
        &self.records
    }

    /// Distinct categories that have at least one record, in first-seen order
    #[must_use]
    pub fn categories_in_use(&self) -> Vec<Category> {
        let mut seen: Vec<Category> = Vec::new();
        for record in &self.records {
            if !seen.contains(record.category()) {
                seen.push(record.category().clone());
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CategoryConfig;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rustc_hash::FxHashSet;

    fn raw(word: &str, category: &str, hint: &str) -> RawRecord {
        RawRecord::new(word, category, hint)
    }

    fn sample_catalog() -> WordCatalog {
        WordCatalog::new(
            vec![
                raw("gato", "ANIMALES", "Mascota felina"),
                raw("perro", "ANIMALES", "Ladra"),
                raw("japon", "PAISES", "Sol naciente"),
                raw("paella", "COMIDAS", "Arroz"),
            ],
            &CategoryConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn embedded_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_catalog_is_fully_valid() {
        let catalog = WordCatalog::embedded(&CategoryConfig::default()).unwrap();
        assert_eq!(catalog.len(), WORDS_COUNT);
    }

    #[test]
    fn invalid_records_are_skipped() {
        let catalog = WordCatalog::new(
            vec![
                raw("gato", "ANIMALES", "Mascota felina"),
                raw("", "ANIMALES", "Sin palabra"),
                raw("marte", "PLANETAS", "Planeta rojo"),
                raw("mesa", "OBJETOS", "   "),
                raw("mesa", "", "Mueble"),
            ],
            &CategoryConfig::default(),
        )
        .unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.records()[0].word(), "GATO");
    }

    #[test]
    fn all_invalid_is_fatal() {
        let result = WordCatalog::new(
            vec![raw("marte", "PLANETAS", "Planeta rojo")],
            &CategoryConfig::default(),
        );
        assert!(matches!(result, Err(CatalogError::Empty)));

        let result = WordCatalog::new(Vec::new(), &CategoryConfig::default());
        assert!(matches!(result, Err(CatalogError::Empty)));
    }

    #[test]
    fn select_random_covers_catalog() {
        let catalog = sample_catalog();
        let mut rng = StdRng::seed_from_u64(7);

        let seen: FxHashSet<&str> = (0..200)
            .map(|_| catalog.select_random(&mut rng).word())
            .collect();
        assert_eq!(seen.len(), catalog.len());
    }

    #[test]
    fn select_random_is_deterministic_for_seed() {
        let catalog = sample_catalog();
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);

        for _ in 0..20 {
            assert_eq!(
                catalog.select_random(&mut a).word(),
                catalog.select_random(&mut b).word()
            );
        }
    }

    #[test]
    fn select_random_in_filters_by_category() {
        let catalog = sample_catalog();
        let mut rng = StdRng::seed_from_u64(3);
        let animals = Category::new("animales");

        for _ in 0..50 {
            let record = catalog.select_random_in(&animals, &mut rng);
            assert_eq!(record.category(), &animals);
        }
    }

    #[test]
    fn select_random_in_empty_category_falls_back() {
        let catalog = sample_catalog();
        let mut rng = StdRng::seed_from_u64(11);
        let sports = Category::new("DEPORTES");

        let record = catalog.select_random_in(&sports, &mut rng);
        assert!(catalog.records().contains(record));
    }

    #[test]
    fn categories_in_use_keeps_first_seen_order() {
        let catalog = sample_catalog();
        assert_eq!(
            catalog.categories_in_use(),
            vec![
                Category::new("ANIMALES"),
                Category::new("PAISES"),
                Category::new("COMIDAS"),
            ]
        );
    }
}

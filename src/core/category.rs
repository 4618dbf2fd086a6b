//! Word categories and the configured allow-list
//!
//! Categories are plain identifiers compared on their trimmed, uppercased form. Which
//! identifiers are valid, and how they are labelled for display, is decided by a
//! [`CategoryOracle`], normally a [`CategoryConfig`] loaded at startup and passed down
//! explicitly.

use derive_more::{Display, Error};
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Categories used when no configuration is supplied
const DEFAULT_CATEGORIES: &[(&str, &str)] = &[
    ("ANIMALES", "Animales"),
    ("PAISES", "Paises"),
    ("DEPORTES", "Deportes"),
    ("OBJETOS", "Objetos"),
    ("COMIDAS", "Comidas"),
];

/// A normalized category identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Category(String);

impl Category {
    /// Create a category from a raw identifier, trimming and uppercasing it
    ///
    /// # Examples
    /// ```
    /// use ahorcado::core::Category;
    ///
    /// assert_eq!(Category::new(" animales "), Category::new("ANIMALES"));
    /// ```
    #[must_use]
    pub fn new(id: &str) -> Self {
        Self(id.trim().to_uppercase())
    }

    #[inline]
    #[must_use]
    pub fn id(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validation oracle for category identifiers
pub trait CategoryOracle {
    /// Whether `category` is part of the allow-list
    fn is_valid(&self, category: &Category) -> bool;

    /// Human-readable label for `category`
    ///
    /// Falls back to the identifier itself when no label is configured.
    fn display_name(&self, category: &Category) -> String;

    /// All valid categories in configured order
    fn categories(&self) -> Vec<Category>;
}

/// Error raised when a category configuration cannot be loaded
#[derive(Debug, Display, Error)]
pub enum CategoryConfigError {
    #[display("cannot read category configuration {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[display("invalid category configuration: {source}")]
    Parse { source: toml::de::Error },
}

/// On-disk shape of the category configuration
///
/// ```toml
/// categories = ["ANIMALES", "PAISES"]
///
/// [labels]
/// ANIMALES = "Animales"
/// ```
#[derive(Debug, Default, Deserialize)]
struct CategoryFile {
    #[serde(default)]
    categories: Vec<String>,
    #[serde(default)]
    labels: FxHashMap<String, String>,
}

/// The configured category allow-list with optional display labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryConfig {
    categories: Vec<Category>,
    labels: FxHashMap<Category, String>,
}

impl Default for CategoryConfig {
    fn default() -> Self {
        Self {
            categories: DEFAULT_CATEGORIES
                .iter()
                .map(|&(id, _)| Category::new(id))
                .collect(),
            labels: DEFAULT_CATEGORIES
                .iter()
                .map(|&(id, label)| (Category::new(id), label.to_string()))
                .collect(),
        }
    }
}

impl CategoryConfig {
    /// Build a configuration from identifiers and `(identifier, label)` pairs
    ///
    /// Blank and duplicate identifiers are dropped. An empty result falls back to the
    /// default categories.
    #[must_use]
    pub fn new<I, S>(ids: I, labels: impl IntoIterator<Item = (S, S)>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut categories: Vec<Category> = Vec::new();
        for id in ids {
            let category = Category::new(id.as_ref());
            if !category.id().is_empty() && !categories.contains(&category) {
                categories.push(category);
            }
        }

        if categories.is_empty() {
            warn!("no categories configured, using defaults");
            return Self::default();
        }

        let labels = labels
            .into_iter()
            .map(|(id, label)| (Category::new(id.as_ref()), label.as_ref().trim().to_string()))
            .filter(|(_, label)| !label.is_empty())
            .collect();

        Self { categories, labels }
    }

    /// Parse a configuration from TOML text
    ///
    /// # Errors
    /// Returns `CategoryConfigError::Parse` if the text is not valid TOML of the expected
    /// shape.
    pub fn from_toml_str(text: &str) -> Result<Self, CategoryConfigError> {
        let file: CategoryFile =
            toml::from_str(text).map_err(|source| CategoryConfigError::Parse { source })?;
        Ok(Self::new(file.categories, file.labels))
    }

    /// Load a configuration from a TOML file
    ///
    /// # Errors
    /// Returns `CategoryConfigError` if the file cannot be read or parsed.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, CategoryConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| CategoryConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        debug!(
            path = %path.display(),
            count = config.categories.len(),
            "loaded category configuration"
        );
        Ok(config)
    }
}

impl CategoryOracle for CategoryConfig {
    fn is_valid(&self, category: &Category) -> bool {
        self.categories.contains(category)
    }

    fn display_name(&self, category: &Category) -> String {
        self.labels
            .get(category)
            .cloned()
            .unwrap_or_else(|| category.id().to_string())
    }

    fn categories(&self) -> Vec<Category> {
        self.categories.clone()
    }
}

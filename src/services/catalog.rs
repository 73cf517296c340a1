use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::models::Product;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    products: Vec<Product>,
}

/// Immutable snapshot of the product catalog
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Loads the static product catalog from a JSON file
///
/// Loading never fails: a missing or malformed file yields an empty catalog.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    path: PathBuf,
}

impl CatalogStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Reads a fresh snapshot from disk
    pub fn load(&self) -> Catalog {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Catalog file unreadable, using empty catalog");
                return Catalog::default();
            }
        };

        match serde_json::from_str::<CatalogFile>(&raw) {
            Ok(file) => {
                tracing::info!(
                    path = %self.path.display(),
                    products = file.products.len(),
                    "Catalog loaded"
                );
                Catalog::from_products(file.products)
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Catalog file malformed, using empty catalog");
                Catalog::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "reabode-catalog-{}-{}.json",
            name,
            uuid::Uuid::new_v4()
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_valid_catalog() {
        let path = write_temp(
            "valid",
            r#"{"products": [
                {"id": "1", "name": "Sofa A", "price": 150.0, "style": ["modern"], "colors": ["white"], "category": "sofas"},
                {"id": "2", "name": "Lamp B", "price": 30.0, "category": "lighting"}
            ]}"#,
        );

        let catalog = CatalogStore::new(&path).load();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.products()[0].name, "Sofa A");
        assert_eq!(catalog.products()[1].category, "lighting");

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_missing_file_yields_empty_catalog() {
        let catalog = CatalogStore::new("/nonexistent/reabode/products.json").load();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_malformed_file_yields_empty_catalog() {
        let path = write_temp("malformed", "{ not json");
        let catalog = CatalogStore::new(&path).load();
        assert!(catalog.is_empty());
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_missing_products_key_yields_empty_catalog() {
        let path = write_temp("no-products", r#"{"version": 2}"#);
        let catalog = CatalogStore::new(&path).load();
        assert!(catalog.is_empty());
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_reload_creates_new_snapshot() {
        let path = write_temp("reload", r#"{"products": []}"#);
        let store = CatalogStore::new(&path);
        let first = store.load();
        assert!(first.is_empty());

        std::fs::write(
            &path,
            r#"{"products": [{"id": "9", "name": "Bed", "price": 400.0}]}"#,
        )
        .unwrap();
        let second = store.load();

        assert!(first.is_empty());
        assert_eq!(second.len(), 1);
        std::fs::remove_file(path).ok();
    }
}

//! Static tank configuration: the species image catalog.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeciesEntry {
    pub species:   String,
    pub image_url: String,
}

#[derive(Debug, Clone, Deserialize)]
struct CatalogFile {
    species:       Vec<SpeciesEntry>,
    default_image: String,
}

/// Maps a species tag to its display image, with a fallback for tags the
/// catalog has never heard of.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeciesCatalog {
    images:        HashMap<String, String>,
    default_image: String,
}

impl SpeciesCatalog {
    /// Load from the data/ directory.
    /// In tests, use SpeciesCatalog::default().
    pub fn load(data_dir: &str) -> anyhow::Result<Self> {
        let path = format!("{data_dir}/species/species_catalog.json");
        let content = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let file: CatalogFile = serde_json::from_str(&content)?;
        Ok(Self {
            images: file
                .species
                .into_iter()
                .map(|s| (s.species, s.image_url))
                .collect(),
            default_image: file.default_image,
        })
    }

    pub fn image_for(&self, species: &str) -> &str {
        self.images
            .get(species)
            .map(String::as_str)
            .unwrap_or(&self.default_image)
    }
}

impl Default for SpeciesCatalog {
    fn default() -> Self {
        let images = [
            ("Goldfish", "assets/fish/goldfish.webp"),
            ("Betta", "assets/fish/betta.webp"),
            ("Guppy", "assets/fish/guppy.webp"),
            ("Oscar", "assets/fish/oscar.webp"),
            ("Angelfish", "assets/fish/angelfish.webp"),
        ]
        .into_iter()
        .map(|(s, i)| (s.to_string(), i.to_string()))
        .collect();
        Self {
            images,
            default_image: "assets/fish/default.webp".to_string(),
        }
    }
}

//! Breed catalog — per-breed stat modifiers and display colors.
//!
//! Ships with a built-in set; hosts can replace it with a JSON catalog
//! (unlockable breeds live in the storefront, not here).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Index into a [`BreedCatalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BreedId(pub usize);

/// Stats and presentation for one playable breed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreedDescriptor {
    /// Human-readable name (e.g., "corgi").
    pub name: String,
    /// Raises world scroll speed.
    pub speed_stat: f32,
    /// Softens the jump impulse (heavier breeds jump lower).
    pub jump_stat: f32,
    /// Display color as linear RGB.
    pub color: [f32; 3],
}

/// The set of breeds available to the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreedCatalog {
    pub breeds: Vec<BreedDescriptor>,
}

/// Failure while loading a host-supplied catalog.
#[derive(Debug)]
pub enum CatalogError {
    Parse(serde_json::Error),
    Empty,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Parse(err) => write!(f, "invalid breed catalog: {err}"),
            CatalogError::Empty => write!(f, "breed catalog has no breeds"),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Parse(err) => Some(err),
            CatalogError::Empty => None,
        }
    }
}

impl BreedCatalog {
    /// The default catalog: three breeds with distinct speed/jump trade-offs.
    pub fn builtin() -> Self {
        Self {
            breeds: vec![
                BreedDescriptor {
                    name: "shiba".into(),
                    speed_stat: 1.0,
                    jump_stat: 1.0,
                    color: [0.91, 0.62, 0.27],
                },
                BreedDescriptor {
                    name: "corgi".into(),
                    speed_stat: 0.6,
                    jump_stat: 2.2,
                    color: [0.96, 0.78, 0.45],
                },
                BreedDescriptor {
                    name: "husky".into(),
                    speed_stat: 1.8,
                    jump_stat: 0.4,
                    color: [0.72, 0.78, 0.86],
                },
            ],
        }
    }

    /// Parse a catalog from a JSON string. Rejects empty catalogs.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: BreedCatalog =
            serde_json::from_str(json).map_err(CatalogError::Parse)?;
        if catalog.breeds.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(catalog)
    }

    pub fn get(&self, id: BreedId) -> Option<&BreedDescriptor> {
        self.breeds.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.breeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.breeds.is_empty()
    }
}

use serde::{Deserialize, Serialize};

use crate::model::CategoryId;
use crate::text::decode_entities;

/// A trivia category as listed by the content provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredCategory")]
pub struct Category {
    id: CategoryId,
    name: String,
}

#[derive(Deserialize)]
struct StoredCategory {
    id: CategoryId,
    name: String,
}

impl From<StoredCategory> for Category {
    fn from(stored: StoredCategory) -> Self {
        Category::new(stored.id, stored.name)
    }
}

impl Category {
    /// Builds a category; the name is entity-decoded on the way in.
    #[must_use]
    pub fn new(id: CategoryId, name: impl AsRef<str>) -> Self {
        Self {
            id,
            name: decode_entities(name.as_ref()),
        }
    }

    #[must_use]
    pub fn id(&self) -> CategoryId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

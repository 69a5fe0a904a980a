use serde::{Deserialize, Serialize};

/// Categories are read-only; they are seeded by migration and there is no
/// endpoint that writes them.
#[derive(Serialize, Debug, Deserialize, Clone)]
pub struct Category {
    pub id: CategoryId,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Serialize, Debug, Clone, Eq, Hash, Deserialize, PartialEq)]
pub struct CategoryId(pub i32);

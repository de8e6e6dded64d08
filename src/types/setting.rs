use serde::{Deserialize, Serialize};

/// A single persisted setting row.
///
/// A `None` value is the stored null marker: the name exists but carries no
/// value, and readers fall back to the compiled default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Setting {
    pub name: String,
    pub value: Option<String>,
}

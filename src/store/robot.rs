//! Robot record

use serde::{Deserialize, Deserializer, Serialize};

/// A robot record, keyed by `code`.
///
/// Missing and `null` fields deserialize to empty values so that validation,
/// not the JSON parser, reports them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Robot {
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub model: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tech: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
}

impl Robot {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        model: impl Into<String>,
        tech: &[&str],
        status: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            description: String::new(),
            model: model.into(),
            tech: tech.iter().map(|t| t.to_string()).collect(),
            status: status.into(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// True if every tech in `required` is present on this robot
    pub fn has_all_techs(&self, required: &[String]) -> bool {
        required.iter().all(|t| self.tech.contains(t))
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

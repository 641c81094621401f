use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Vector size used when none is configured; matches 1536-dimensional
/// OpenAI-style embeddings.
pub const DEFAULT_VECTOR_SIZE: u64 = 1536;

const MAX_COLLECTION_NAME_LEN: usize = 255;

/// A validated Qdrant collection name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CollectionName(String);

impl CollectionName {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(DomainError::invalid_input("Collection name must not be empty"));
        }
        if name.len() > MAX_COLLECTION_NAME_LEN {
            return Err(DomainError::invalid_input(format!(
                "Collection name is longer than {} bytes",
                MAX_COLLECTION_NAME_LEN
            )));
        }
        if name.contains('/') {
            return Err(DomainError::invalid_input(format!(
                "Collection name '{}' must not contain '/'",
                name
            )));
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CollectionName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CollectionName> for String {
    fn from(name: CollectionName) -> Self {
        name.0
    }
}

impl std::fmt::Display for CollectionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Distance function a collection uses to compare vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Distance {
    #[default]
    Cosine,
    Euclid,
    Dot,
    Manhattan,
}

impl Distance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Distance::Cosine => "Cosine",
            Distance::Euclid => "Euclid",
            Distance::Dot => "Dot",
            Distance::Manhattan => "Manhattan",
        }
    }
}

impl std::fmt::Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Dense vector configuration of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VectorParams {
    pub size: u64,
    pub distance: Distance,
}

impl VectorParams {
    pub fn new(size: u64, distance: Distance) -> Self {
        Self { size, distance }
    }
}

impl Default for VectorParams {
    fn default() -> Self {
        Self {
            size: DEFAULT_VECTOR_SIZE,
            distance: Distance::Cosine,
        }
    }
}

/// Health colour Qdrant reports for a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CollectionStatus {
    #[default]
    Green,
    Yellow,
    Grey,
    Red,
}

impl CollectionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionStatus::Green => "green",
            CollectionStatus::Yellow => "yellow",
            CollectionStatus::Grey => "grey",
            CollectionStatus::Red => "red",
        }
    }
}

/// Snapshot of a collection as reported by the vector store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionInfo {
    name: CollectionName,
    status: CollectionStatus,
    points_count: u64,
    /// `None` when the collection only has named vectors.
    vectors: Option<VectorParams>,
}

impl CollectionInfo {
    pub fn new(
        name: CollectionName,
        status: CollectionStatus,
        points_count: u64,
        vectors: Option<VectorParams>,
    ) -> Self {
        Self {
            name,
            status,
            points_count,
            vectors,
        }
    }

    pub fn name(&self) -> &CollectionName {
        &self.name
    }

    pub fn status(&self) -> CollectionStatus {
        self.status
    }

    pub fn points_count(&self) -> u64 {
        self.points_count
    }

    pub fn vectors(&self) -> Option<VectorParams> {
        self.vectors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_name_is_trimmed() {
        let name = CollectionName::parse("  docs  ").unwrap();
        assert_eq!(name.as_str(), "docs");
    }

    #[test]
    fn test_collection_name_rejects_blank() {
        let err = CollectionName::parse("   ").unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_collection_name_rejects_slash() {
        assert!(CollectionName::parse("a/b").is_err());
    }

    #[test]
    fn test_collection_name_rejects_overlong() {
        let raw = "x".repeat(256);
        assert!(CollectionName::parse(&raw).is_err());
        assert!(CollectionName::parse(&raw[..255]).is_ok());
    }

    #[test]
    fn test_vector_params_serialize_like_qdrant() {
        let json = serde_json::to_value(VectorParams::default()).unwrap();
        assert_eq!(json, serde_json::json!({"size": 1536, "distance": "Cosine"}));
    }

    #[test]
    fn test_collection_status_deserializes_lowercase() {
        let status: CollectionStatus = serde_json::from_str("\"yellow\"").unwrap();
        assert_eq!(status, CollectionStatus::Yellow);
    }
}

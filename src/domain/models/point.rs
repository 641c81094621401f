use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Point identifier; Qdrant accepts unsigned integers or UUID strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PointId {
    Num(u64),
    Uuid(String),
}

impl std::fmt::Display for PointId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PointId::Num(n) => write!(f, "{}", n),
            PointId::Uuid(u) => f.write_str(u),
        }
    }
}

/// How point ids are assigned to the chunks of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointIdStrategy {
    /// Chunk index as id. Re-indexing into the same collection overwrites.
    #[default]
    Sequential,
    /// Random v4 UUID per chunk. Re-indexing appends.
    Uuid,
}

impl PointIdStrategy {
    pub fn id_for(&self, index: usize) -> PointId {
        match self {
            PointIdStrategy::Sequential => PointId::Num(index as u64),
            PointIdStrategy::Uuid => PointId::Uuid(Uuid::new_v4().to_string()),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PointIdStrategy::Sequential => "sequential",
            PointIdStrategy::Uuid => "uuid",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub id: PointId,
    pub vector: Vec<f32>,
    pub payload: Map<String, Value>,
}

impl Point {
    pub fn new(id: PointId, vector: Vec<f32>) -> Self {
        Self {
            id,
            vector,
            payload: Map::new(),
        }
    }

    pub fn with_payload(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.payload.insert(key.into(), value.into());
        self
    }

    pub fn content(&self) -> Option<&str> {
        self.payload.get("content").and_then(|v| v.as_str())
    }
}

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// One label's score as returned by the model.
pub struct ScoreRecord {
    /// The label the model scored.
    pub word: String,
    /// Relevance in `[0, 1]` by convention; not validated.
    pub confidence_score: f64,
    /// Advisory identifier echoed by the model (string or number on the wire).
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: Option<String>,
}

impl ScoreRecord {
    /// Creates a record without an id.
    pub fn new(word: impl Into<String>, confidence_score: f64) -> Self {
        Self {
            word: word.into(),
            confidence_score,
            id: None,
        }
    }

    /// Sets the advisory id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Parsed records for one chunk, in the order the model returned them.
pub type ScoredChunkResult = Vec<ScoreRecord>;

fn deserialize_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(Option::<RawId>::deserialize(deserializer)?.map(|raw| match raw {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    }))
}

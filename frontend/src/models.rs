use serde::{Deserialize, Serialize};

/// A search hit joined with its statistics and its channel's subscriber count.
#[derive(Debug, Clone, PartialEq)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub channel_title: String,
    pub channel_id: String,
    pub published_at: String,
    pub view_count: u64,
    /// Never zero, see [`crate::search::ranking::normalize_subscribers`].
    pub subscriber_count: u64,
    pub performance_ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentIdea {
    pub title: String,
    pub angle: String,
    pub reasoning: String,
    pub target_audience: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub summary: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub keywords: Vec<String>,
    pub ideas: Vec<ContentIdea>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlineSection {
    pub heading: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptOutline {
    pub keyword: String,
    pub title: String,
    pub intro: String,
    pub sections: Vec<OutlineSection>,
    pub outro: String,
}

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

// one parsed `<entry>` of an arXiv atom feed.

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ArxivResult {
    /// Short identifier, e.g. `2101.00001v1` or `hep-th/9901001v1`.
    pub id: Option<String>,
    /// The `<id>` text as served, usually `http://arxiv.org/abs/<id>`.
    pub raw_id: String,
    pub title: String,
    pub summary: String,
    pub published: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
    pub authors: Vec<String>,
    pub link: Option<String>,
    pub pdf_url: Option<String>,
    pub categories: Vec<String>,
    pub primary_category: Option<String>,
    pub doi: Option<String>,
    pub comment: Option<String>,
    pub journal_ref: Option<String>,
}

use std::sync::LazyLock;
use chrono::{DateTime, Utc};
use quick_xml::de::from_str;
use regex::Regex;
use serde::Deserialize;

use crate::{error::Result, model::ArxivResult};

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Parse the atom XML returned by the arXiv API into records, in feed order.
///
/// A feed without `<entry>` elements yields an empty vector. Malformed XML
/// fails the whole call; no partial results are returned.
pub fn parse_feed(xml: &str) -> Result<Vec<ArxivResult>> {
    let document: ArxivDocument = from_str(xml)?;
    let results = document.entries.into_iter()
        .map(ArxivResult::from_entry)
        .collect::<Vec<_>>();
    tracing::debug!(entries = results.len(), "parsed arxiv feed");
    Ok(results)
}

impl ArxivResult {
    fn from_entry(entry: ArxivEntry) -> Self {
        let id = entry.id.rsplit_once("/abs/").map(|(_, id)| id.trim().to_string());

        let link = entry.links.iter()
            .find(|field| field.rel.as_deref() == Some("alternate")
                || matches!(field.link_type, Some(LinkType::Home)))
            .map(|field| field.href.clone());
        let pdf_url = entry.links.iter()
            .find(|field| matches!(field.link_type, Some(LinkType::Pdf))
                || field.title.as_deref().is_some_and(|t| t.eq_ignore_ascii_case("pdf")))
            .map(|field| field.href.clone());

        ArxivResult {
            id,
            title: normalize(&entry.title),
            summary: normalize(&entry.summary),
            published: entry.published.as_deref().and_then(parse_date),
            updated: entry.updated.as_deref().and_then(parse_date),
            authors: entry.authors.into_iter()
                .map(|a| a.name.trim().to_string())
                .filter(|name| !name.is_empty())
                .collect(),
            link,
            pdf_url,
            categories: entry.categories.into_iter()
                .map(|c| c.term)
                .filter(|term| !term.is_empty())
                .collect(),
            primary_category: entry.primary_category
                .map(|c| c.term)
                .filter(|term| !term.is_empty()),
            doi: entry.doi.map(|d| d.value.trim().to_string()),
            comment: entry.comment.map(|c| normalize(&c.value)),
            journal_ref: entry.journal_ref.map(|j| normalize(&j.value)),
            raw_id: entry.id,
        }
    }
}

// arXiv wraps titles and abstracts at fixed width.
fn normalize(text: &str) -> String {
    WHITESPACE.replace_all(text.trim(), " ").into_owned()
}

fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|err| tracing::warn!("failed to parse date {:?}: {}", raw, err))
        .ok()
}

// Arxiv Raw XML Model

#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
struct ArxivDocument {
    #[serde(rename = "entry")]
    entries: Vec<ArxivEntry>
}

#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
struct ArxivEntry {
    id: String,
    title: String,
    summary: String,
    published: Option<String>,
    updated: Option<String>,
    #[serde(rename = "author")]
    authors: Vec<AuthorField>,
    #[serde(rename = "link")]
    links: Vec<LinkField>,
    #[serde(rename = "category")]
    categories: Vec<CategoryField>,
    #[serde(alias = "arxiv:primary_category")]
    primary_category: Option<CategoryField>,
    #[serde(alias = "arxiv:doi")]
    doi: Option<TextField>,
    #[serde(alias = "arxiv:comment")]
    comment: Option<TextField>,
    #[serde(alias = "arxiv:journal_ref")]
    journal_ref: Option<TextField>,
}

// arXiv extension elements carry their own xmlns attribute.
#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
struct TextField {
    #[serde(rename = "$text")]
    value: String
}

#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
struct AuthorField {
    name: String
}

#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
struct CategoryField {
    #[serde(rename = "@term")]
    term: String
}

#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
struct LinkField {
    #[serde(rename = "@href")]
    href: String,
    #[serde(rename = "@rel")]
    rel: Option<String>,
    #[serde(rename = "@title")]
    title: Option<String>,
    #[serde(rename = "@type")]
    link_type: Option<LinkType>
}

#[derive(Debug, PartialEq, Deserialize)]
enum LinkType {
    #[serde(rename = "text/html")]
    Home,
    #[serde(rename = "application/pdf")]
    Pdf,
    #[serde(other)]
    Unknown,
}

// end Arxiv Raw XML Model

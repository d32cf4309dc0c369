use crate::{error::Result, model::ArxivResult};

pub struct Formatter;

impl Formatter {
    pub fn to_readme(data: &ArxivResult) -> String {
        let published = data.published
            .map(|p| p.format("%Y.%m.%d").to_string())
            .unwrap_or_else(|| String::from("n/a"));
        let link = data.link.as_deref().unwrap_or(data.raw_id.as_str());
        format!("### {}\n_{}_<br/>\n{}<br/>\n_Published: {}_, [{}]({})\n\n",
            data.title,
            data.authors.join(", "),
            data.summary,
            published,
            link, link
        )
    }

    pub fn to_jsonl(data: &ArxivResult) -> Result<String> {
        let mut line = serde_json::to_string(data)?;
        line.push('\n');
        Ok(line)
    }
}

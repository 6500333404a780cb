//! DuckDuckGo Instant Answer search.
//!
//! Free and keyless. The Instant Answer API returns an abstract for the
//! best match plus a list of related topics, which may be nested one level
//! in named groups. Both are flattened into ranked [`SearchHit`]s.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use pathwise_core::search::SearchProvider;
use pathwise_types::error::SearchError;
use pathwise_types::search::SearchHit;

const ENDPOINT: &str = "https://api.duckduckgo.com/";
const USER_AGENT: &str = concat!("pathwise/", env!("CARGO_PKG_VERSION"));

/// [`SearchProvider`] backed by the DuckDuckGo Instant Answer API.
pub struct DuckDuckGoSearch {
    client: Client,
}

impl DuckDuckGoSearch {
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .user_agent(USER_AGENT)
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }
}

impl SearchProvider for DuckDuckGoSearch {
    fn name(&self) -> &str {
        "duckduckgo"
    }

    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchHit>, SearchError> {
        let url = format!(
            "{ENDPOINT}?q={}&format=json&no_html=1&skip_disambig=1",
            urlencoding::encode(query)
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SearchError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Request(e.to_string()))?;
        parse_response(&body, max_results)
    }
}

/// Turn an Instant Answer JSON body into at most `max_results` hits.
pub fn parse_response(body: &str, max_results: usize) -> Result<Vec<SearchHit>, SearchError> {
    let data: Value = serde_json::from_str(body).map_err(|e| SearchError::Parse(e.to_string()))?;
    if !data.is_object() {
        return Err(SearchError::Parse("expected a JSON object".to_string()));
    }

    let mut hits = Vec::new();

    let abstract_text = str_field(&data, "Abstract");
    let abstract_url = str_field(&data, "AbstractURL");
    if !abstract_text.is_empty() && !abstract_url.is_empty() {
        let heading = str_field(&data, "Heading");
        hits.push(SearchHit {
            title: if heading.is_empty() { title_from_url(abstract_url) } else { heading.to_string() },
            snippet: abstract_text.to_string(),
            link: abstract_url.to_string(),
        });
    }

    if let Some(topics) = data["RelatedTopics"].as_array() {
        for topic in topics {
            match topic["Topics"].as_array() {
                Some(group) => hits.extend(group.iter().filter_map(topic_hit)),
                None => hits.extend(topic_hit(topic)),
            }
        }
    }

    hits.truncate(max_results);
    Ok(hits)
}

fn str_field<'a>(value: &'a Value, key: &str) -> &'a str {
    value[key].as_str().map(str::trim).unwrap_or("")
}

fn topic_hit(topic: &Value) -> Option<SearchHit> {
    let text = str_field(topic, "Text");
    let link = str_field(topic, "FirstURL");
    if text.is_empty() || link.is_empty() {
        return None;
    }
    Some(SearchHit {
        title: title_from_url(link),
        snippet: text.to_string(),
        link: link.to_string(),
    })
}

/// DuckDuckGo topic links end in the page name, e.g. `.../Data_engineering`.
fn title_from_url(link: &str) -> String {
    let slug = link.trim_end_matches('/').rsplit('/').next().unwrap_or(link);
    let decoded = urlencoding::decode(slug).map(|s| s.into_owned()).unwrap_or_else(|_| slug.to_string());
    decoded.replace('_', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "Heading": "Data engineering",
        "Abstract": "Data engineering refers to building systems for collecting data.",
        "AbstractURL": "https://en.wikipedia.org/wiki/Data_engineering",
        "Answer": "",
        "RelatedTopics": [
            {"Text": "Data warehouse - A system used for reporting.", "FirstURL": "https://duckduckgo.com/Data_warehouse"},
            {"Name": "Careers", "Topics": [
                {"Text": "Database administrator - A role managing databases.", "FirstURL": "https://duckduckgo.com/Database_administrator"},
                {"Text": "", "FirstURL": "https://duckduckgo.com/Empty"}
            ]},
            {"Text": "ETL - Extract, transform, load.", "FirstURL": "https://duckduckgo.com/Extract%2C_transform%2C_load"}
        ]
    }"#;

    #[test]
    fn test_parse_abstract_then_topics_in_order() {
        let hits = parse_response(SAMPLE, 10).unwrap();
        assert_eq!(hits.len(), 4);
        assert_eq!(hits[0].title, "Data engineering");
        assert_eq!(hits[0].link, "https://en.wikipedia.org/wiki/Data_engineering");
        assert_eq!(hits[1].title, "Data warehouse");
        assert_eq!(hits[2].title, "Database administrator");
        assert_eq!(hits[3].title, "Extract, transform, load");
    }

    #[test]
    fn test_parse_respects_max_results() {
        let hits = parse_response(SAMPLE, 2).unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[1].snippet, "Data warehouse - A system used for reporting.");
    }

    #[test]
    fn test_parse_empty_result_set() {
        let hits = parse_response(r#"{"Abstract": "", "RelatedTopics": []}"#, 5).unwrap();
        assert!(hits.is_empty());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(parse_response("<html>", 5), Err(SearchError::Parse(_))));
        assert!(matches!(parse_response("[]", 5), Err(SearchError::Parse(_))));
    }
}

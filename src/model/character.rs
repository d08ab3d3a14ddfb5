//! Wire types for the character catalog API

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

const MODIFIED_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";
const PLACEHOLDER_BASE: &str = "https://via.placeholder.com";

/// Response envelope shared by every endpoint
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub status: String,
    pub data: DataContainer,
}

/// One page of results
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct DataContainer {
    #[serde(default)]
    pub offset: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub results: Vec<Character>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Thumbnail {
    pub path: String,
    pub extension: String,
}

impl Thumbnail {
    pub fn url(&self) -> String {
        format!("{}.{}", self.path, self.extension)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct ResourceSummary {
    pub name: String,
    #[serde(default, rename = "resourceURI")]
    pub resource_uri: String,
}

/// Summary of a related collection (comics, series, stories, events)
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct ResourceList {
    #[serde(default)]
    pub available: u32,
    #[serde(default)]
    pub items: Vec<ResourceSummary>,
}

impl ResourceList {
    /// First `limit` item names plus how many items were left out
    pub fn preview(&self, limit: usize) -> (Vec<&str>, usize) {
        let names = self.items.iter().take(limit).map(|i| i.name.as_str()).collect();
        (names, self.items.len().saturating_sub(limit))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Url {
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
}

impl Url {
    pub fn label(&self) -> &str {
        if self.kind == "detail" {
            "Marvel.com"
        } else {
            &self.kind
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Character {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub modified: String,
    #[serde(default)]
    pub thumbnail: Thumbnail,
    #[serde(default)]
    pub comics: ResourceList,
    #[serde(default)]
    pub series: ResourceList,
    #[serde(default)]
    pub stories: ResourceList,
    #[serde(default)]
    pub events: ResourceList,
    #[serde(default)]
    pub urls: Vec<Url>,
}

impl Character {
    /// Parsed `modified` timestamp, `None` when the field is empty or malformed
    pub fn modified_at(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_str(&self.modified, MODIFIED_FORMAT)
            .or_else(|_| DateTime::parse_from_rfc3339(&self.modified))
            .ok()
    }

    pub fn modified_millis(&self) -> Option<i64> {
        self.modified_at().map(|dt| dt.timestamp_millis())
    }

    pub fn image_url(&self) -> String {
        self.thumbnail.url()
    }

    pub fn placeholder_image_url(&self, size: u32) -> String {
        let mut url = format!("{PLACEHOLDER_BASE}/{size}x{size}/667eea/ffffff");
        url.push_str("?text=");
        url.extend(url::form_urlencoded::byte_serialize(self.name.as_bytes()));
        url
    }

    pub fn display_description(&self) -> &str {
        if self.description.trim().is_empty() {
            "No description available."
        } else {
            &self.description
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn character(id: u64, name: &str) -> Character {
        Character {
            id,
            name: name.to_string(),
            modified: "2014-04-29T14:18:17-0400".to_string(),
            thumbnail: Thumbnail {
                path: format!("http://i.annihil.us/u/prod/marvel/i/mg/{id}"),
                extension: "jpg".to_string(),
            },
            ..Default::default()
        }
    }

    pub fn with_modified(mut c: Character, modified: &str) -> Character {
        c.modified = modified.to_string();
        c
    }

    pub fn with_counts(mut c: Character, comics: u32, series: u32, events: u32) -> Character {
        c.comics.available = comics;
        c.series.available = series;
        c.events.available = events;
        c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "code": 200,
        "status": "Ok",
        "data": {
            "offset": 0,
            "limit": 1,
            "total": 1,
            "count": 1,
            "results": [{
                "id": 1011334,
                "name": "3-D Man",
                "description": "",
                "modified": "2014-04-29T14:18:17-0400",
                "thumbnail": {
                    "path": "http://i.annihil.us/u/prod/marvel/i/mg/c/e0/535fecbbb9784",
                    "extension": "jpg"
                },
                "resourceURI": "http://gateway.marvel.com/v1/public/characters/1011334",
                "comics": {
                    "available": 12,
                    "collectionURI": "http://gateway.marvel.com/v1/public/characters/1011334/comics",
                    "items": [
                        {"resourceURI": "http://gateway.marvel.com/v1/public/comics/21366", "name": "Avengers: The Initiative (2007) #14"},
                        {"resourceURI": "http://gateway.marvel.com/v1/public/comics/24571", "name": "Avengers: The Initiative (2007) #14 (SPOTLIGHT VARIANT)"},
                        {"resourceURI": "http://gateway.marvel.com/v1/public/comics/21546", "name": "Avengers: The Initiative (2007) #15"},
                        {"resourceURI": "http://gateway.marvel.com/v1/public/comics/21741", "name": "Avengers: The Initiative (2007) #16"}
                    ],
                    "returned": 4
                },
                "series": {"available": 3, "items": []},
                "stories": {"available": 21, "items": []},
                "events": {"available": 1, "items": [{"resourceURI": "x", "name": "Secret Invasion"}]},
                "urls": [
                    {"type": "detail", "url": "http://marvel.com/characters/74/3-d_man"},
                    {"type": "wiki", "url": "http://marvel.com/universe/3-D_Man_(Chandler)"}
                ]
            }]
        }
    }"#;

    #[test]
    fn deserializes_api_payload() {
        let response: ApiResponse = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(response.data.total, 1);

        let c = &response.data.results[0];
        assert_eq!(c.id, 1011334);
        assert_eq!(c.comics.available, 12);
        assert_eq!(c.events.items[0].name, "Secret Invasion");
        assert_eq!(c.urls[0].label(), "Marvel.com");
        assert_eq!(c.urls[1].label(), "wiki");
        assert_eq!(
            c.image_url(),
            "http://i.annihil.us/u/prod/marvel/i/mg/c/e0/535fecbbb9784.jpg"
        );
    }

    #[test]
    fn preview_reports_remaining_items() {
        let response: ApiResponse = serde_json::from_str(SAMPLE).unwrap();
        let (names, more) = response.data.results[0].comics.preview(3);
        assert_eq!(names.len(), 3);
        assert_eq!(more, 1);

        let (names, more) = response.data.results[0].series.preview(3);
        assert!(names.is_empty());
        assert_eq!(more, 0);
    }

    #[test]
    fn parses_api_timestamp_format() {
        let c = fixtures::character(1, "A");
        let parsed = c.modified_at().unwrap();
        assert_eq!(parsed.timestamp(), 1398795497);
    }

    #[test]
    fn malformed_timestamp_is_none() {
        let c = fixtures::with_modified(fixtures::character(1, "A"), "not a date");
        assert!(c.modified_at().is_none());
        let c = fixtures::with_modified(fixtures::character(1, "A"), "");
        assert!(c.modified_millis().is_none());
    }

    #[test]
    fn placeholder_encodes_name() {
        let c = fixtures::character(1, "Spider-Man (Peter Parker)");
        assert_eq!(
            c.placeholder_image_url(120),
            "https://via.placeholder.com/120x120/667eea/ffffff?text=Spider-Man+%28Peter+Parker%29"
        );
    }

    #[test]
    fn empty_description_has_fallback_text() {
        let c = fixtures::character(1, "A");
        assert_eq!(c.display_description(), "No description available.");
    }
}

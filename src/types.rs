//! Core data types for classification and replies

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Classified purpose of a user utterance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    Greeting,
    HowAreYou,
    Farewell,
    Thanks,
    JokeRequest,
    CapabilityQuery,
    RecommendationRequest,
    Smalltalk,
    Fallback,
}

impl Intent {
    pub fn as_str(self) -> &'static str {
        match self {
            Intent::Greeting => "greeting",
            Intent::HowAreYou => "how_are_you",
            Intent::Farewell => "farewell",
            Intent::Thanks => "thanks",
            Intent::JokeRequest => "joke_request",
            Intent::CapabilityQuery => "capability_query",
            Intent::RecommendationRequest => "recommendation_request",
            Intent::Smalltalk => "smalltalk",
            Intent::Fallback => "fallback",
        }
    }

    /// Template category holding the canned replies for this intent.
    ///
    /// Recommendations are composed from several categories and have none of
    /// their own.
    pub fn template_category(self) -> Option<&'static str> {
        match self {
            Intent::Greeting => Some("greetings"),
            Intent::HowAreYou => Some("howareyou"),
            Intent::Farewell => Some("farewells"),
            Intent::Thanks => Some("thanks"),
            Intent::JokeRequest => Some("jokes"),
            Intent::CapabilityQuery => Some("capabilities"),
            Intent::RecommendationRequest => None,
            Intent::Smalltalk => Some("smalltalk"),
            Intent::Fallback => Some("fallback_questions"),
        }
    }
}

/// Kind of media a recommendation request asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Movie,
    Series,
    Book,
    #[default]
    Unknown,
}

impl MediaKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Series => "series",
            MediaKind::Book => "book",
            MediaKind::Unknown => "unknown",
        }
    }

    pub fn is_known(self) -> bool {
        self != MediaKind::Unknown
    }
}

/// Genre label taken from a fixed reference list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Genre(pub(crate) &'static str);

impl Genre {
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

/// Sub-classification of a recommendation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecommendationContext {
    pub kind: MediaKind,
    pub genre: Option<Genre>,
}

/// Outcome of intent resolution for one utterance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub intent: Intent,
    /// Present only for [`Intent::RecommendationRequest`]
    pub recommendation: Option<RecommendationContext>,
}

impl Resolution {
    pub fn new(intent: Intent) -> Self {
        Self {
            intent,
            recommendation: None,
        }
    }
}

/// Nested data record of a contextual item
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ItemData {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_year")]
    pub year: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_text_list")]
    pub genres: Vec<String>,
}

/// Externally supplied record (e.g. a search result) grounding a recommendation
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ContextualItem {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_data")]
    pub data: Option<ItemData>,
    #[serde(default, rename = "itemType", deserialize_with = "lenient_text")]
    pub item_type: Option<String>,
    #[serde(default, rename = "type", deserialize_with = "lenient_text")]
    pub type_tag: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
}

impl ContextualItem {
    /// Direct title, then the nested data title, then the name.
    pub fn display_title(&self) -> Option<&str> {
        non_empty(self.title.as_deref())
            .or_else(|| non_empty(self.data.as_ref().and_then(|d| d.title.as_deref())))
            .or_else(|| non_empty(self.name.as_deref()))
    }

    pub fn year(&self) -> Option<&str> {
        non_empty(self.data.as_ref().and_then(|d| d.year.as_deref()))
    }

    /// `itemType`, then `type`, else empty.
    pub fn kind_label(&self) -> &str {
        non_empty(self.item_type.as_deref())
            .or_else(|| non_empty(self.type_tag.as_deref()))
            .unwrap_or("")
    }
}

/// One entry of a message history
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Message {
    #[serde(default, deserialize_with = "lenient_text")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub content: Option<String>,
}

/// Input record of one invocation
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Payload {
    #[serde(default, deserialize_with = "lenient_list")]
    pub messages: Vec<Message>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub db_items: Vec<ContextualItem>,
}

impl Payload {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Parse a payload from JSON text.
    pub fn from_json(raw: &str) -> crate::error::Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// Most recent user message, falling back to the raw `text` field.
    pub fn utterance(&self) -> &str {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role.as_deref() == Some("user"))
            .and_then(|m| non_empty(m.content.as_deref()))
            .or_else(|| self.text.as_deref())
            .unwrap_or("")
    }
}

/// Output record of one invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplyEnvelope {
    pub reply: String,
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

fn value_to_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

// Wrongly typed fields degrade to absent instead of rejecting the payload.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_to_text(Value::deserialize(deserializer)?))
}

// Falsy years (0, false, "") count as missing.
fn lenient_year<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    })
}

fn lenient_text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(values) => values.into_iter().filter_map(value_to_text).collect(),
        other => value_to_text(other).into_iter().collect(),
    })
}

fn lenient_data<'de, D>(deserializer: D) -> Result<Option<ItemData>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => serde_json::from_value(value).ok(),
        _ => None,
    })
}

// Non-object entries keep their slot as an empty record.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned + Default,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(values) => values
            .into_iter()
            .map(|v| serde_json::from_value(v).unwrap_or_default())
            .collect(),
        _ => Vec::new(),
    })
}

use serde::{Deserialize, Serialize};

// Inbound proxy request format
// prompt defaults to "" so an absent field hits validation instead of a serde reject
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct ProxyRequest {
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

// Gemini generateContent request format
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct GeminiPayload {
    pub contents: Vec<Content>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Content {
    pub parts: Vec<Part>,
}

// A part is either text or inline base64 data, part order matters upstream
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
    },
    InlineData {
        inline_data: InlineData,
    },
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

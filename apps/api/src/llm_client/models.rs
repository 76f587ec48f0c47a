use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Hosted chat models the form offers. Serialized as the provider's model identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelId {
    #[default]
    #[serde(rename = "meta-llama/Llama-3-8b-chat-hf")]
    Llama3_8b,
    #[serde(rename = "meta-llama/Llama-3-70b-chat-hf")]
    Llama3_70b,
    #[serde(rename = "meta-llama/Llama-2-70b-chat-hf")]
    Llama2_70b,
    #[serde(rename = "meta-llama/Llama-2-13b-chat-hf")]
    Llama2_13b,
    #[serde(rename = "mistralai/Mixtral-8x7B-Instruct-v0.1")]
    Mixtral8x7b,
    #[serde(rename = "mistralai/Mistral-7B-Instruct-v0.1")]
    Mistral7b,
}

impl ModelId {
    pub const ALL: [ModelId; 6] = [
        ModelId::Llama3_8b,
        ModelId::Llama3_70b,
        ModelId::Llama2_70b,
        ModelId::Llama2_13b,
        ModelId::Mixtral8x7b,
        ModelId::Mistral7b,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelId::Llama3_8b => "meta-llama/Llama-3-8b-chat-hf",
            ModelId::Llama3_70b => "meta-llama/Llama-3-70b-chat-hf",
            ModelId::Llama2_70b => "meta-llama/Llama-2-70b-chat-hf",
            ModelId::Llama2_13b => "meta-llama/Llama-2-13b-chat-hf",
            ModelId::Mixtral8x7b => "mistralai/Mixtral-8x7B-Instruct-v0.1",
            ModelId::Mistral7b => "mistralai/Mistral-7B-Instruct-v0.1",
        }
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModelId::ALL
            .into_iter()
            .find(|m| m.as_str() == s.trim())
            .ok_or_else(|| format!("Unsupported model '{s}'"))
    }
}

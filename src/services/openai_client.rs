use anyhow::{anyhow, bail};
use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use serde::Deserialize;

use crate::{configuration::NerSettings, domain::RecognizedEntity};

const NER_INSTRUCTIONS: &str = r#"
    You are a named-entity recognition tagger for furniture shop websites.
    Tag organisations (ORG), persons (PER), locations (LOC), product names (PRODUCT)
    and other named things such as collections or series (MISC) in the user's text.
    Reply with a single JSON object and nothing else, in the form:
    {"entities": [{"word": "Kivik", "entity_group": "PRODUCT", "score": 0.93}]}
    The score is your confidence between 0 and 1. Copy each word exactly as it appears.
"#;

#[derive(Deserialize)]
struct EntityResponse {
    #[serde(default)]
    entities: Vec<RecognizedEntity>,
}

pub struct OpenaiClient {
    client: Client<OpenAIConfig>,
    model: String,
    max_tokens: u32,
}

impl OpenaiClient {
    pub fn new(api_key: String, settings: &NerSettings) -> Self {
        let mut config = OpenAIConfig::new().with_api_key(api_key);
        if let Some(ref api_base) = settings.api_base {
            config = config.with_api_base(api_base);
        }

        OpenaiClient {
            client: Client::with_config(config),
            model: settings.model.clone(),
            max_tokens: settings.max_tokens,
        }
    }

    pub async fn recognize_entities(&self, text: &str) -> anyhow::Result<Vec<RecognizedEntity>> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(self.model.as_str())
            .messages([
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(NER_INSTRUCTIONS)
                    .build()?
                    .into(),
                ChatCompletionRequestUserMessageArgs::default()
                    .content(text)
                    .build()?
                    .into(),
            ])
            .max_tokens(self.max_tokens)
            .temperature(0.0)
            .build()?;

        let response = self.client.chat().create(request).await?;

        let content = response
            .choices
            .first()
            .ok_or_else(|| anyhow!("No choices in Openai response"))?
            .message
            .content
            .clone()
            .ok_or_else(|| anyhow!("No content"))?;

        let entities = parse_entities(&content)?;
        log::info!("Openai recognized {} entities", entities.len());

        Ok(entities)
    }
}

fn parse_entities(content: &str) -> anyhow::Result<Vec<RecognizedEntity>> {
    match (content.find('{'), content.rfind('}')) {
        (Some(start), Some(end)) if start < end => {
            let response: EntityResponse = serde_json::from_str(&content[start..=end])?;
            Ok(response.entities)
        }
        _ => bail!("No JSON object in Openai response: {}", content),
    }
}

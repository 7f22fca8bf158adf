// Sentiment — ask a prompt model for a page's tone and parse its reply.
//
// Models wrap their JSON in prose often enough that parsing takes everything
// from the first '{' to the last '}' and ignores the rest. Missing fields get
// neutral defaults rather than failing the whole reply.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::capabilities::{LanguageModel, PromptOptions};

const SENTIMENT_QUESTION: &str =
    "What is the sentiment of this page? Answer in the JSON format given in the system prompt.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
    #[default]
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    #[serde(default)]
    pub sentiment: Polarity,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub emotions: Vec<String>,
    #[serde(default)]
    pub tone: Option<String>,
    #[serde(default)]
    pub intensity: Intensity,
}

/// System prompt embedding the text to analyze and the expected reply shape.
pub fn sentiment_prompt(text: &str) -> String {
    format!(
        "Analyze the sentiment of the following text. Determine if it is positive, negative, or neutral.\n\
         Also identify the main emotions expressed (like joy, anger, sadness, fear, surprise) and the overall tone.\n\n\
         Text to analyze:\n\"{text}\"\n\n\
         Format your response as a JSON object with the following structure:\n\
         {{\n  \"sentiment\": \"positive|negative|neutral\",\n  \"confidence\": <number between 0 and 1>,\n  \
         \"emotions\": [\"emotion1\", \"emotion2\"],\n  \"tone\": \"formal|informal|technical|casual\",\n  \
         \"intensity\": \"low|medium|high\"\n}}"
    )
}

/// Extract and parse the JSON object embedded in a model reply.
pub fn parse_sentiment(reply: &str) -> Result<Sentiment> {
    let start = reply.find('{').context("No JSON object in sentiment reply")?;
    let end = reply.rfind('}').context("No JSON object in sentiment reply")?;
    if end < start {
        anyhow::bail!("Malformed JSON object in sentiment reply");
    }

    let mut sentiment: Sentiment = serde_json::from_str(&reply[start..=end])
        .context("Failed to parse sentiment reply")?;
    sentiment.confidence = if sentiment.confidence.is_finite() {
        sentiment.confidence.clamp(0.0, 1.0)
    } else {
        0.0
    };
    Ok(sentiment)
}

/// Run sentiment analysis through a prompt model.
///
/// Returns `Ok(None)` when the model reports itself unavailable.
pub async fn analyze_sentiment(model: &dyn LanguageModel, text: &str) -> Result<Option<Sentiment>> {
    let availability = model.availability().await?;
    if !availability.is_usable() {
        info!("Language model unavailable, skipping sentiment");
        return Ok(None);
    }
    debug!(?availability, "Creating sentiment session");

    let options = PromptOptions {
        system_prompt: sentiment_prompt(text),
    };
    let session = model.create_session(&options).await?;
    let reply = session.prompt(SENTIMENT_QUESTION).await;
    session.destroy().await;

    let sentiment = parse_sentiment(&reply?)?;
    debug!(polarity = ?sentiment.sentiment, confidence = sentiment.confidence, "Sentiment parsed");
    Ok(Some(sentiment))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::{Availability, PromptSession, Unavailable};
    use async_trait::async_trait;

    /// Answers every prompt with `reply`.
    struct FixedReply(&'static str);

    #[async_trait]
    impl LanguageModel for FixedReply {
        async fn availability(&self) -> Result<Availability> {
            Ok(Availability::Available)
        }

        async fn create_session(&self, _options: &PromptOptions) -> Result<Box<dyn PromptSession>> {
            Ok(Box::new(FixedReply(self.0)))
        }
    }

    #[async_trait]
    impl PromptSession for FixedReply {
        async fn prompt(&self, _input: &str) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    #[test]
    fn test_parse_reply_wrapped_in_prose() {
        let reply = "Sure! Here is the analysis:\n```json\n{\"sentiment\": \"negative\", \"confidence\": 0.82, \
                     \"emotions\": [\"fear\", \"anger\"], \"tone\": \"formal\", \"intensity\": \"high\"}\n```";
        let sentiment = parse_sentiment(reply).unwrap();
        assert_eq!(sentiment.sentiment, Polarity::Negative);
        assert_eq!(sentiment.emotions, vec!["fear", "anger"]);
        assert_eq!(sentiment.intensity, Intensity::High);
        assert!((sentiment.confidence - 0.82).abs() < 1e-9);
    }

    #[test]
    fn test_parse_fills_missing_fields() {
        let sentiment = parse_sentiment(r#"{"sentiment": "positive"}"#).unwrap();
        assert_eq!(sentiment.sentiment, Polarity::Positive);
        assert!(sentiment.emotions.is_empty());
        assert_eq!(sentiment.tone, None);
        assert_eq!(sentiment.intensity, Intensity::Medium);
    }

    #[test]
    fn test_parse_clamps_confidence() {
        let sentiment = parse_sentiment(r#"{"confidence": 7}"#).unwrap();
        assert_eq!(sentiment.confidence, 1.0);
    }

    #[test]
    fn test_parse_rejects_reply_without_json() {
        assert!(parse_sentiment("I could not decide.").is_err());
        assert!(parse_sentiment("} backwards {").is_err());
    }

    #[test]
    fn test_prompt_embeds_text() {
        let prompt = sentiment_prompt("The match was thrilling");
        assert!(prompt.contains("\"The match was thrilling\""));
        assert!(prompt.contains("\"intensity\""));
    }

    #[tokio::test]
    async fn test_analyze_uses_model_reply() {
        let model = FixedReply(r#"{"sentiment": "neutral", "confidence": 0.5}"#);
        let sentiment = analyze_sentiment(&model, "text").await.unwrap().unwrap();
        assert_eq!(sentiment.sentiment, Polarity::Neutral);
    }

    #[tokio::test]
    async fn test_analyze_skips_unavailable_model() {
        assert!(analyze_sentiment(&Unavailable, "text").await.unwrap().is_none());
    }
}

use crate::analysis::gemini_models::{
    analysis_schema, outline_schema, GenerateContentRequest, GenerateContentResponse,
};
use crate::env_variable_utils::Endpoints;
use crate::error::{ApiError, Service};
use crate::http::HttpTransport;
use crate::models::{AnalysisResult, ScriptOutline};
use serde::de::DeserializeOwned;

pub const COMMENT_CHAR_LIMIT: usize = 3000;
const COMMENT_SEPARATOR: &str = "\n---\n";
const NO_COMMENTS_PLACEHOLDER: &str =
    "There are no viewer comments. Base the analysis on the title and description only.";
const GEMINI_FAILURE: &str = "Gemini API request failed.";

/// Comments joined for the prompt, cut to the first [`COMMENT_CHAR_LIMIT`]
/// characters.
pub fn comment_digest(comments: &[String]) -> String {
    let joined = if comments.is_empty() {
        NO_COMMENTS_PLACEHOLDER.to_string()
    } else {
        comments.join(COMMENT_SEPARATOR)
    };
    joined.chars().take(COMMENT_CHAR_LIMIT).collect()
}

pub fn analysis_prompt(title: &str, description: &str, comments: &[String]) -> String {
    format!(
        r#"You are a YouTube audience analyst. Analyze the video data and viewer comments below.
Title: {title}
Description: {description}
Comments: {comments}

Respond in JSON with:
1. summary: overall audience reaction in one sentence
2. pros: 3 things that made the video work
3. cons: 3 weak spots or open questions viewers raised
4. keywords: 5 keywords viewers got excited about or kept mentioning, usable as next video topics
5. ideas: 3 content plans, each with title, angle, reasoning and targetAudience"#,
        comments = comment_digest(comments),
    )
}

pub fn outline_prompt(keyword: &str, context: &str) -> String {
    format!(
        r#"Chosen keyword: "{keyword}"
Reference context: {context}

Write a YouTube video script outline on the keyword above, structured to hold viewer interest.
Respond in JSON with:
- keyword: "{keyword}"
- title: a compelling, click-worthy title
- intro: opening lines and the hook
- sections: 3 to 5 main sections, each with heading and content
- outro: closing lines with a call to subscribe"#
    )
}

/// Summarizes audience reaction to a video and proposes follow-up content.
pub async fn analyze_video<T: HttpTransport + ?Sized>(
    transport: &T,
    endpoints: &Endpoints,
    key: &str,
    title: &str,
    description: &str,
    comments: &[String],
) -> Result<AnalysisResult, ApiError> {
    if key.trim().is_empty() {
        return Err(ApiError::MissingCredential(Service::Gemini));
    }

    let request = GenerateContentRequest::structured(
        analysis_prompt(title, description, comments),
        analysis_schema(),
    );
    generate(transport, endpoints, key, &request).await
}

/// Drafts a script outline for `keyword`. The number of sections is whatever
/// the model returns.
pub async fn generate_outline<T: HttpTransport + ?Sized>(
    transport: &T,
    endpoints: &Endpoints,
    key: &str,
    keyword: &str,
    context: &str,
) -> Result<ScriptOutline, ApiError> {
    if key.trim().is_empty() {
        return Err(ApiError::MissingCredential(Service::Gemini));
    }

    let request =
        GenerateContentRequest::structured(outline_prompt(keyword, context), outline_schema());
    generate(transport, endpoints, key, &request).await
}

async fn generate<T, R>(
    transport: &T,
    endpoints: &Endpoints,
    key: &str,
    request: &GenerateContentRequest,
) -> Result<R, ApiError>
where
    T: HttpTransport + ?Sized,
    R: DeserializeOwned,
{
    let url = format!(
        "{}/v1beta/models/{}:generateContent?key={}",
        endpoints.gemini_api_url,
        endpoints.gemini_model,
        urlencoding::encode(key),
    );
    let body = serde_json::to_value(request).map_err(|e| ApiError::malformed(Service::Gemini, e))?;

    let response: GenerateContentResponse = transport
        .post_json(&url, &body)
        .await
        .map_err(|e| e.into_api_error(Service::Gemini))?
        .into_result(Service::Gemini, GEMINI_FAILURE)?;

    let text = response
        .text()
        .ok_or_else(|| ApiError::malformed(Service::Gemini, "response contained no text"))?;

    serde_json::from_str(&text).map_err(|e| {
        log::error!("Gemini returned JSON that does not match the schema: {e}");
        ApiError::malformed(Service::Gemini, e)
    })
}

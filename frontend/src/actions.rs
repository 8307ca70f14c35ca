//! User actions as plain async functions over a transport, so the order and
//! preconditions of the network calls can be checked without a browser.
use crate::analysis::api::{analyze_video, generate_outline};
use crate::env_variable_utils::Endpoints;
use crate::error::{ApiError, Service};
use crate::http::HttpTransport;
use crate::key_store::ApiKeys;
use crate::models::{AnalysisResult, ScriptOutline, Video};
use crate::search::api::{fetch_comments, search_videos};
use crate::search::ranking::sort_by_ratio_desc;
use crate::search::search_options::SearchFilter;

/// Runs a search and ranks the hits by performance ratio, best first.
pub async fn run_search<T: HttpTransport + ?Sized>(
    transport: &T,
    endpoints: &Endpoints,
    keys: &ApiKeys,
    filter: &SearchFilter,
) -> Result<Vec<Video>, ApiError> {
    let mut videos = search_videos(
        transport,
        endpoints,
        &keys.youtube,
        filter.keyword.trim(),
        filter.video_type,
    )
    .await?;
    sort_by_ratio_desc(&mut videos);
    Ok(videos)
}

/// Fetches comments, then analyzes the video with them. Nothing is requested
/// when the Gemini key is missing.
pub async fn run_analysis<T: HttpTransport + ?Sized>(
    transport: &T,
    endpoints: &Endpoints,
    keys: &ApiKeys,
    video: &Video,
) -> Result<AnalysisResult, ApiError> {
    if !keys.has_gemini() {
        return Err(ApiError::MissingCredential(Service::Gemini));
    }

    let comments = fetch_comments(transport, endpoints, &keys.youtube, &video.id).await;
    log::debug!("Analyzing {} with {} comments", video.id, comments.len());

    analyze_video(
        transport,
        endpoints,
        &keys.gemini,
        &video.title,
        &video.description,
        &comments,
    )
    .await
}

/// Context handed to the outline prompt: the video title and the summary of
/// the analysis it came from.
pub fn outline_context(video: &Video, analysis: &AnalysisResult) -> String {
    format!("{} {}", video.title, analysis.summary)
}

pub async fn run_outline<T: HttpTransport + ?Sized>(
    transport: &T,
    endpoints: &Endpoints,
    keys: &ApiKeys,
    keyword: &str,
    video: &Video,
    analysis: &AnalysisResult,
) -> Result<ScriptOutline, ApiError> {
    generate_outline(
        transport,
        endpoints,
        &keys.gemini,
        keyword,
        &outline_context(video, analysis),
    )
    .await
}

use crate::env_variable_utils::Endpoints;
use crate::error::{ApiError, Service};
use crate::http::HttpTransport;
use crate::models::Video;
use crate::search::ranking::{normalize_subscribers, parse_view_count, performance_ratio};
use crate::search::search_options::VideoType;
use crate::search::youtube_models::{
    ChannelListResponse, CommentThreadListResponse, SearchListResponse, VideoListResponse,
};
use std::collections::{HashMap, HashSet};

const SEARCH_MAX_RESULTS: u32 = 20;
const COMMENT_MAX_RESULTS: u32 = 50;
const YOUTUBE_FAILURE: &str = "YouTube API request failed.";

/// Searches by keyword and joins each hit with its view count and its
/// channel's subscriber count.
///
/// Three requests are made in order: search, videos, channels. A search that
/// yields no usable video ids returns an empty list without further calls.
pub async fn search_videos<T: HttpTransport + ?Sized>(
    transport: &T,
    endpoints: &Endpoints,
    key: &str,
    keyword: &str,
    video_type: VideoType,
) -> Result<Vec<Video>, ApiError> {
    if key.trim().is_empty() {
        return Err(ApiError::MissingCredential(Service::YouTube));
    }

    let base = &endpoints.youtube_api_url;
    let key = urlencoding::encode(key);

    let duration = video_type
        .duration_param()
        .map(|d| format!("&videoDuration={d}"))
        .unwrap_or_default();
    let search_url = format!(
        "{base}/search?part=snippet&maxResults={SEARCH_MAX_RESULTS}&q={}&type=video{duration}&key={key}",
        urlencoding::encode(keyword),
    );
    let search: SearchListResponse = get_json(transport, &search_url).await?;

    let video_ids: Vec<&str> = search.items.iter().filter_map(|item| item.video_id()).collect();
    if video_ids.is_empty() {
        log::info!("Search for \"{keyword}\" returned no playable videos");
        return Ok(Vec::new());
    }

    let videos_url = format!(
        "{base}/videos?part=statistics,snippet&id={}&key={key}",
        video_ids.join(",")
    );
    let videos: VideoListResponse = get_json(transport, &videos_url).await?;

    let mut seen = HashSet::new();
    let channel_ids: Vec<&str> = videos
        .items
        .iter()
        .map(|item| item.snippet.channel_id.as_str())
        .filter(|id| !id.is_empty() && seen.insert(*id))
        .collect();

    let subscribers: HashMap<String, u64> = if channel_ids.is_empty() {
        HashMap::new()
    } else {
        let channels_url = format!(
            "{base}/channels?part=statistics&id={}&key={key}",
            channel_ids.join(",")
        );
        let channels: ChannelListResponse = get_json(transport, &channels_url).await?;
        channels
            .items
            .into_iter()
            .map(|channel| {
                let count = normalize_subscribers(channel.statistics.subscriber_count.as_deref());
                (channel.id, count)
            })
            .collect()
    };

    let results: Vec<Video> = videos
        .items
        .into_iter()
        .map(|item| {
            let subscriber_count = subscribers
                .get(&item.snippet.channel_id)
                .copied()
                .unwrap_or(1);
            let view_count = parse_view_count(item.statistics.view_count.as_deref());
            Video {
                thumbnail: item.snippet.thumbnails.best_url(),
                id: item.id,
                title: item.snippet.title,
                description: item.snippet.description,
                channel_title: item.snippet.channel_title,
                channel_id: item.snippet.channel_id,
                published_at: item.snippet.published_at,
                view_count,
                subscriber_count,
                performance_ratio: performance_ratio(view_count, subscriber_count),
            }
        })
        .collect();

    log::debug!("Search for \"{keyword}\" resolved {} videos", results.len());
    Ok(results)
}

async fn get_json<T, R>(transport: &T, url: &str) -> Result<R, ApiError>
where
    T: HttpTransport + ?Sized,
    R: serde::de::DeserializeOwned,
{
    transport
        .get(url)
        .await
        .map_err(|e| e.into_api_error(Service::YouTube))?
        .into_result(Service::YouTube, YOUTUBE_FAILURE)
}

/// Outcome of a best-effort comment fetch. Degradation is reported here and
/// never escalates into an [`ApiError`].
#[derive(Debug, Clone, PartialEq)]
pub enum CommentFetch {
    Fetched(Vec<String>),
    /// No YouTube key, so nothing was requested.
    Skipped,
    Degraded(String),
}

impl CommentFetch {
    pub fn into_comments(self) -> Vec<String> {
        match self {
            CommentFetch::Fetched(comments) => comments,
            CommentFetch::Skipped | CommentFetch::Degraded(_) => Vec::new(),
        }
    }
}

pub async fn try_fetch_comments<T: HttpTransport + ?Sized>(
    transport: &T,
    endpoints: &Endpoints,
    key: &str,
    video_id: &str,
) -> CommentFetch {
    if key.trim().is_empty() {
        return CommentFetch::Skipped;
    }

    let url = format!(
        "{}/commentThreads?part=snippet&maxResults={COMMENT_MAX_RESULTS}&videoId={}&key={}",
        endpoints.youtube_api_url,
        urlencoding::encode(video_id),
        urlencoding::encode(key),
    );

    let reply = match transport.get(&url).await {
        Ok(reply) => reply,
        Err(e) => return CommentFetch::Degraded(e.to_string()),
    };
    if !reply.ok() {
        // Comments disabled on the video ends up here as a 403.
        return CommentFetch::Degraded(format!("HTTP {}", reply.status));
    }

    match reply.json::<CommentThreadListResponse>(Service::YouTube) {
        Ok(threads) => CommentFetch::Fetched(
            threads
                .items
                .into_iter()
                .map(|thread| thread.snippet.top_level_comment.snippet.text_display)
                .collect(),
        ),
        Err(e) => CommentFetch::Degraded(e.to_string()),
    }
}

/// Up to 50 top-level comment texts, or an empty list on any failure.
pub async fn fetch_comments<T: HttpTransport + ?Sized>(
    transport: &T,
    endpoints: &Endpoints,
    key: &str,
    video_id: &str,
) -> Vec<String> {
    let outcome = try_fetch_comments(transport, endpoints, key, video_id).await;
    if let CommentFetch::Degraded(reason) = &outcome {
        log::warn!("Continuing without comments for {video_id}: {reason}");
    }
    outcome.into_comments()
}

use crate::models::Video;
use std::cmp::Ordering;

/// Subscriber count to divide by. Missing, non-numeric and zero counts
/// become 1 so a ratio can always be computed.
pub fn normalize_subscribers(raw: Option<&str>) -> u64 {
    raw.and_then(|s| s.trim().parse::<u64>().ok())
        .filter(|&count| count > 0)
        .unwrap_or(1)
}

pub fn parse_view_count(raw: Option<&str>) -> u64 {
    raw.and_then(|s| s.trim().parse::<u64>().ok()).unwrap_or(0)
}

/// `views / subscribers` rounded to two decimals.
pub fn performance_ratio(views: u64, subscribers: u64) -> f64 {
    let subscribers = subscribers.max(1);
    let ratio = views as f64 / subscribers as f64;
    (ratio * 100.0).round() / 100.0
}

pub fn sort_by_ratio_desc(videos: &mut [Video]) {
    videos.sort_by(|a, b| {
        b.performance_ratio
            .partial_cmp(&a.performance_ratio)
            .unwrap_or(Ordering::Equal)
    });
}

/// Videos at or above `min_ratio`, in their current order.
pub fn filter_by_min_ratio(videos: &[Video], min_ratio: f64) -> Vec<Video> {
    videos
        .iter()
        .filter(|v| v.performance_ratio >= min_ratio)
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatioTier {
    Viral,
    Strong,
    Normal,
}

impl RatioTier {
    pub fn of(ratio: f64) -> Self {
        if ratio >= 5.0 {
            RatioTier::Viral
        } else if ratio >= 1.5 {
            RatioTier::Strong
        } else {
            RatioTier::Normal
        }
    }

    pub fn badge_classes(&self) -> &'static str {
        match self {
            RatioTier::Viral => "text-green-600 bg-green-50 border-green-200",
            RatioTier::Strong => "text-blue-600 bg-blue-50 border-blue-200",
            RatioTier::Normal => "text-gray-600 bg-gray-50 border-gray-200",
        }
    }
}

#[cfg(test)]
pub(crate) fn video_with_ratio(id: &str, ratio: f64) -> Video {
    Video {
        id: id.to_string(),
        title: format!("Video {id}"),
        description: String::new(),
        thumbnail: String::new(),
        channel_title: "Channel".to_string(),
        channel_id: "UC1".to_string(),
        published_at: "2024-01-01T00:00:00Z".to_string(),
        view_count: 0,
        subscriber_count: 1,
        performance_ratio: ratio,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratios(videos: &[Video]) -> Vec<f64> {
        videos.iter().map(|v| v.performance_ratio).collect()
    }

    #[test]
    fn ratio_is_rounded_to_two_decimals() {
        assert_eq!(performance_ratio(1000, 300), 3.33);
        assert_eq!(performance_ratio(2, 3), 0.67);
        assert_eq!(performance_ratio(150_000, 10_000), 15.0);
        assert_eq!(performance_ratio(0, 42), 0.0);
    }

    #[test]
    fn zero_subscribers_divide_by_one() {
        assert_eq!(performance_ratio(1234, 0), 1234.0);
    }

    #[test]
    fn subscriber_floor_applies_to_gaps_in_the_data() {
        assert_eq!(normalize_subscribers(None), 1);
        assert_eq!(normalize_subscribers(Some("")), 1);
        assert_eq!(normalize_subscribers(Some("n/a")), 1);
        assert_eq!(normalize_subscribers(Some("0")), 1);
        assert_eq!(normalize_subscribers(Some("-5")), 1);
        assert_eq!(normalize_subscribers(Some("2500")), 2500);
    }

    #[test]
    fn unparseable_views_count_as_zero() {
        assert_eq!(parse_view_count(None), 0);
        assert_eq!(parse_view_count(Some("lots")), 0);
        assert_eq!(parse_view_count(Some("987")), 987);
    }

    #[test]
    fn sorts_highest_ratio_first() {
        let mut videos = vec![
            video_with_ratio("a", 0.5),
            video_with_ratio("b", 5.0),
            video_with_ratio("c", 1.5),
        ];
        sort_by_ratio_desc(&mut videos);
        assert_eq!(ratios(&videos), vec![5.0, 1.5, 0.5]);
    }

    #[test]
    fn threshold_keeps_matching_videos_in_order() {
        let videos = vec![
            video_with_ratio("a", 0.5),
            video_with_ratio("b", 1.5),
            video_with_ratio("c", 3.0),
            video_with_ratio("d", 5.0),
        ];
        let visible = filter_by_min_ratio(&videos, 3.0);
        assert_eq!(ratios(&visible), vec![3.0, 5.0]);
        assert_eq!(filter_by_min_ratio(&videos, 0.0).len(), 4);
    }

    #[test]
    fn tiers_follow_badge_breakpoints() {
        assert_eq!(RatioTier::of(5.0), RatioTier::Viral);
        assert_eq!(RatioTier::of(4.99), RatioTier::Strong);
        assert_eq!(RatioTier::of(1.5), RatioTier::Strong);
        assert_eq!(RatioTier::of(1.49), RatioTier::Normal);
    }
}

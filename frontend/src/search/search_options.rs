use yew::{classes, function_component, html, Callback, Html, Properties};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum VideoType {
    #[default]
    All,
    Short,
    Long,
}

impl VideoType {
    pub fn display_name(&self) -> &'static str {
        match self {
            VideoType::All => "All",
            VideoType::Short => "Shorts",
            VideoType::Long => "Long-form",
        }
    }

    pub fn all_variants() -> Vec<Self> {
        vec![VideoType::All, VideoType::Short, VideoType::Long]
    }

    /// The `videoDuration` bucket sent to the search endpoint. `Long` maps to
    /// "medium", which covers 4 to 20 minutes.
    pub fn duration_param(&self) -> Option<&'static str> {
        match self {
            VideoType::All => None,
            VideoType::Short => Some("short"),
            VideoType::Long => Some("medium"),
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            VideoType::All => "all",
            VideoType::Short => "short",
            VideoType::Long => "long",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "all" => Some(VideoType::All),
            "short" => Some(VideoType::Short),
            "long" => Some(VideoType::Long),
            _ => None,
        }
    }
}

/// Minimum performance ratio a video needs to stay visible.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum RatioThreshold {
    #[default]
    Any,
    AtLeast1_5,
    AtLeast3,
    AtLeast5,
}

impl RatioThreshold {
    pub fn value(&self) -> f64 {
        match self {
            RatioThreshold::Any => 0.0,
            RatioThreshold::AtLeast1_5 => 1.5,
            RatioThreshold::AtLeast3 => 3.0,
            RatioThreshold::AtLeast5 => 5.0,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RatioThreshold::Any => "All",
            RatioThreshold::AtLeast1_5 => "1.5x+",
            RatioThreshold::AtLeast3 => "3x+",
            RatioThreshold::AtLeast5 => "5x+",
        }
    }

    pub fn all_variants() -> Vec<Self> {
        vec![
            RatioThreshold::Any,
            RatioThreshold::AtLeast1_5,
            RatioThreshold::AtLeast3,
            RatioThreshold::AtLeast5,
        ]
    }

    pub fn key(&self) -> &'static str {
        match self {
            RatioThreshold::Any => "0",
            RatioThreshold::AtLeast1_5 => "1.5",
            RatioThreshold::AtLeast3 => "3",
            RatioThreshold::AtLeast5 => "5",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::all_variants().into_iter().find(|t| t.key() == key)
    }
}

/// Everything that decides which videos are fetched and which are shown.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilter {
    pub keyword: String,
    pub video_type: VideoType,
    pub min_ratio: RatioThreshold,
}

#[derive(Properties, PartialEq)]
pub struct SearchOptionsProps {
    pub video_type: VideoType,
    pub min_ratio: RatioThreshold,
    pub on_video_type_change: Callback<VideoType>,
    pub on_min_ratio_change: Callback<RatioThreshold>,
}

#[function_component(SearchOptions)]
pub fn search_options(props: &SearchOptionsProps) -> Html {
    html! {
        <div class="flex flex-wrap items-center gap-4 mt-3">
            <div class="flex bg-gray-100 p-0.5 rounded-lg border border-gray-200">
                {
                    for VideoType::all_variants().into_iter().map(|vt| {
                        let on_change = props.on_video_type_change.clone();
                        let active = vt == props.video_type;
                        html! {
                            <button
                                type="button"
                                class={classes!(
                                    "px-3", "py-1", "rounded-md", "text-xs", "font-bold",
                                    if active { "bg-white text-red-600 shadow-sm" } else { "text-gray-500" }
                                )}
                                onclick={move |_| on_change.emit(vt)}
                            >
                                { vt.display_name() }
                            </button>
                        }
                    })
                }
            </div>
            <div class="flex items-center gap-1.5">
                <span class="text-xs font-bold text-gray-400">{"Viral ratio:"}</span>
                {
                    for RatioThreshold::all_variants().into_iter().map(|threshold| {
                        let on_change = props.on_min_ratio_change.clone();
                        let active = threshold == props.min_ratio;
                        html! {
                            <button
                                type="button"
                                class={classes!(
                                    "px-2", "py-0.5", "rounded", "border", "text-xs", "font-bold",
                                    if active { "bg-red-50 text-red-600 border-red-200" } else { "bg-white text-gray-400 border-gray-100" }
                                )}
                                onclick={move |_| on_change.emit(threshold)}
                            >
                                { threshold.display_name() }
                            </button>
                        }
                    })
                }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_videos_use_the_medium_duration_bucket() {
        assert_eq!(VideoType::All.duration_param(), None);
        assert_eq!(VideoType::Short.duration_param(), Some("short"));
        assert_eq!(VideoType::Long.duration_param(), Some("medium"));
    }

    #[test]
    fn url_keys_map_back_to_variants() {
        for vt in VideoType::all_variants() {
            assert_eq!(VideoType::from_key(vt.key()), Some(vt));
        }
        for threshold in RatioThreshold::all_variants() {
            assert_eq!(RatioThreshold::from_key(threshold.key()), Some(threshold));
        }
        assert_eq!(VideoType::from_key("medium"), None);
        assert_eq!(RatioThreshold::from_key("2"), None);
    }

    #[test]
    fn threshold_breakpoints() {
        let values: Vec<f64> = RatioThreshold::all_variants()
            .iter()
            .map(RatioThreshold::value)
            .collect();
        assert_eq!(values, vec![0.0, 1.5, 3.0, 5.0]);
    }
}

use crate::models::{AnalysisResult, ScriptOutline, Video};
use crate::search::ranking::filter_by_min_ratio;
use crate::search::search_options::SearchFilter;
use std::rc::Rc;
use yew::Reducible;

/// Identifies one started request. A completion whose token is no longer the
/// pending one for its kind of request is stale and gets dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

#[derive(Debug, Default)]
pub struct RequestCounter(u64);

impl RequestCounter {
    pub fn next_token(&mut self) -> RequestToken {
        self.0 += 1;
        RequestToken(self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum OutlineState {
    None,
    Generating { keyword: String, token: RequestToken },
    Ready(ScriptOutline),
}

impl OutlineState {
    pub fn selected_keyword(&self) -> Option<&str> {
        match self {
            OutlineState::None => None,
            OutlineState::Generating { keyword, .. } => Some(keyword),
            OutlineState::Ready(outline) => Some(&outline.keyword),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Idle,
    /// A search is running and nothing is selected.
    Searching,
    Results,
    Analyzing { video: Video, token: RequestToken },
    Analyzed {
        video: Video,
        analysis: AnalysisResult,
        outline: OutlineState,
    },
}

/// Overlay shown above whatever the phase is.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    NoResults,
    Error(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub phase: Phase,
    pub filter: SearchFilter,
    /// Last fetched result set, sorted by ratio.
    pub videos: Vec<Video>,
    pub notice: Option<Notice>,
    /// Pending search, tracked apart from `phase` so that selecting a video
    /// while a search runs does not orphan the search.
    pub search_token: Option<RequestToken>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            filter: SearchFilter::default(),
            videos: Vec::new(),
            notice: None,
            search_token: None,
        }
    }
}

pub enum AppAction {
    FilterChanged(SearchFilter),
    SearchStarted(RequestToken),
    SearchFinished {
        token: RequestToken,
        result: Result<Vec<Video>, String>,
    },
    AnalysisStarted {
        video: Video,
        token: RequestToken,
    },
    AnalysisFinished {
        token: RequestToken,
        result: Result<AnalysisResult, String>,
    },
    OutlineStarted {
        keyword: String,
        token: RequestToken,
    },
    OutlineFinished {
        token: RequestToken,
        result: Result<ScriptOutline, String>,
    },
    CloseAnalysis,
    Failed(String),
    DismissNotice,
}

impl AppState {
    pub fn visible_videos(&self) -> Vec<Video> {
        filter_by_min_ratio(&self.videos, self.filter.min_ratio.value())
    }

    pub fn is_searching(&self) -> bool {
        self.search_token.is_some()
    }

    pub fn selected_video(&self) -> Option<&Video> {
        match &self.phase {
            Phase::Analyzing { video, .. } | Phase::Analyzed { video, .. } => Some(video),
            _ => None,
        }
    }

    fn resting_phase(&self) -> Phase {
        if self.videos.is_empty() {
            Phase::Idle
        } else {
            Phase::Results
        }
    }

    /// Applies one action and returns the next state.
    pub fn apply(&self, action: AppAction) -> AppState {
        let mut next = self.clone();
        match action {
            AppAction::FilterChanged(filter) => {
                next.filter = filter;
            }
            AppAction::SearchStarted(token) => {
                next.phase = Phase::Searching;
                next.search_token = Some(token);
                next.notice = None;
            }
            AppAction::SearchFinished { token, result } => {
                if self.search_token != Some(token) {
                    log::debug!("Dropping superseded search response {token:?}");
                    return next;
                }
                next.search_token = None;
                match result {
                    Ok(videos) if videos.is_empty() => {
                        next.videos = Vec::new();
                        next.notice = Some(Notice::NoResults);
                    }
                    Ok(videos) => {
                        next.videos = videos;
                    }
                    Err(message) => {
                        next.notice = Some(Notice::Error(message));
                    }
                }
                // A video picked while the search ran stays selected
                if next.selected_video().is_none() {
                    next.phase = next.resting_phase();
                }
            }
            AppAction::AnalysisStarted { video, token } => {
                next.phase = Phase::Analyzing { video, token };
                next.notice = None;
            }
            AppAction::AnalysisFinished { token, result } => {
                let Phase::Analyzing { video, token: current } = &self.phase else {
                    log::debug!("Dropping analysis response {token:?}, no analysis running");
                    return next;
                };
                if *current != token {
                    log::debug!("Dropping superseded analysis response {token:?}");
                    return next;
                }
                match result {
                    Ok(analysis) => {
                        next.phase = Phase::Analyzed {
                            video: video.clone(),
                            analysis,
                            outline: OutlineState::None,
                        };
                    }
                    Err(message) => {
                        next.phase = next.resting_phase();
                        next.notice = Some(Notice::Error(message));
                    }
                }
            }
            AppAction::OutlineStarted { keyword, token } => {
                if let Phase::Analyzed { outline, .. } = &mut next.phase {
                    *outline = OutlineState::Generating { keyword, token };
                    next.notice = None;
                }
            }
            AppAction::OutlineFinished { token, result } => {
                let Phase::Analyzed { outline, .. } = &mut next.phase else {
                    log::debug!("Dropping outline response {token:?}, analysis closed");
                    return next;
                };
                if !matches!(outline, OutlineState::Generating { token: current, .. } if *current == token)
                {
                    log::debug!("Dropping superseded outline response {token:?}");
                    return next;
                }
                match result {
                    Ok(script) => *outline = OutlineState::Ready(script),
                    Err(message) => {
                        *outline = OutlineState::None;
                        next.notice = Some(Notice::Error(message));
                    }
                }
            }
            AppAction::CloseAnalysis => {
                if self.selected_video().is_some() {
                    next.phase = next.resting_phase();
                }
            }
            AppAction::Failed(message) => {
                next.notice = Some(Notice::Error(message));
            }
            AppAction::DismissNotice => {
                next.notice = None;
            }
        }
        next
    }
}

impl Reducible for AppState {
    type Action = AppAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OutlineSection;
    use crate::search::ranking::video_with_ratio;
    use crate::search::search_options::RatioThreshold;

    fn analysis() -> AnalysisResult {
        AnalysisResult {
            summary: "Loved it".to_string(),
            pros: vec![],
            cons: vec![],
            keywords: vec!["a".to_string(), "b".to_string()],
            ideas: vec![],
        }
    }

    fn outline(keyword: &str) -> ScriptOutline {
        ScriptOutline {
            keyword: keyword.to_string(),
            title: "Title".to_string(),
            intro: "Intro".to_string(),
            sections: vec![OutlineSection {
                heading: "H".to_string(),
                content: "C".to_string(),
            }],
            outro: "Outro".to_string(),
        }
    }

    fn with_results(counter: &mut RequestCounter) -> AppState {
        let token = counter.next_token();
        AppState::default()
            .apply(AppAction::SearchStarted(token))
            .apply(AppAction::SearchFinished {
                token,
                result: Ok(vec![video_with_ratio("a", 5.0), video_with_ratio("b", 0.5)]),
            })
    }

    fn analyzed(counter: &mut RequestCounter) -> AppState {
        let state = with_results(counter);
        let token = counter.next_token();
        state
            .apply(AppAction::AnalysisStarted {
                video: video_with_ratio("a", 5.0),
                token,
            })
            .apply(AppAction::AnalysisFinished {
                token,
                result: Ok(analysis()),
            })
    }

    #[test]
    fn tokens_increase() {
        let mut counter = RequestCounter::default();
        let first = counter.next_token();
        assert!(counter.next_token() > first);
    }

    #[test]
    fn successful_search_shows_results() {
        let state = with_results(&mut RequestCounter::default());
        assert_eq!(state.phase, Phase::Results);
        assert_eq!(state.videos.len(), 2);
        assert_eq!(state.notice, None);
    }

    #[test]
    fn empty_search_is_a_notice_not_an_error() {
        let mut counter = RequestCounter::default();
        let token = counter.next_token();
        let state = AppState::default()
            .apply(AppAction::SearchStarted(token))
            .apply(AppAction::SearchFinished {
                token,
                result: Ok(vec![]),
            });

        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.notice, Some(Notice::NoResults));
    }

    #[test]
    fn failed_search_keeps_previous_results() {
        let mut counter = RequestCounter::default();
        let state = with_results(&mut counter);
        let token = counter.next_token();
        let state = state
            .apply(AppAction::SearchStarted(token))
            .apply(AppAction::SearchFinished {
                token,
                result: Err("quota exceeded".to_string()),
            });

        assert_eq!(state.phase, Phase::Results);
        assert_eq!(state.videos.len(), 2);
        assert_eq!(state.notice, Some(Notice::Error("quota exceeded".to_string())));
    }

    #[test]
    fn new_search_clears_the_selection() {
        let mut counter = RequestCounter::default();
        let state = analyzed(&mut counter);
        let state = state.apply(AppAction::SearchStarted(counter.next_token()));

        assert!(state.is_searching());
        assert!(state.selected_video().is_none());
    }

    #[test]
    fn stale_search_response_is_ignored() {
        let mut counter = RequestCounter::default();
        let old = counter.next_token();
        let new = counter.next_token();
        let state = AppState::default()
            .apply(AppAction::SearchStarted(old))
            .apply(AppAction::SearchStarted(new))
            .apply(AppAction::SearchFinished {
                token: old,
                result: Ok(vec![video_with_ratio("old", 1.0)]),
            });

        assert_eq!(state.phase, Phase::Searching);
        assert_eq!(state.search_token, Some(new));
        assert!(state.videos.is_empty());
    }

    #[test]
    fn search_completes_after_selecting_a_video_meanwhile() {
        let mut counter = RequestCounter::default();
        let state = with_results(&mut counter);
        let search = counter.next_token();
        let analysis_token = counter.next_token();
        let state = state
            .apply(AppAction::SearchStarted(search))
            .apply(AppAction::AnalysisStarted {
                video: video_with_ratio("a", 5.0),
                token: analysis_token,
            })
            .apply(AppAction::SearchFinished {
                token: search,
                result: Ok(vec![video_with_ratio("new", 2.0)]),
            });

        let ids: Vec<&str> = state.videos.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["new"]);
        assert!(!state.is_searching());
        assert_eq!(state.selected_video().map(|v| v.id.as_str()), Some("a"));

        let state = state.apply(AppAction::AnalysisFinished {
            token: analysis_token,
            result: Ok(analysis()),
        });
        assert!(matches!(state.phase, Phase::Analyzed { .. }));
    }

    #[test]
    fn stale_analysis_does_not_replace_newer_selection() {
        let mut counter = RequestCounter::default();
        let state = with_results(&mut counter);
        let first = counter.next_token();
        let second = counter.next_token();
        let state = state
            .apply(AppAction::AnalysisStarted {
                video: video_with_ratio("a", 5.0),
                token: first,
            })
            .apply(AppAction::AnalysisStarted {
                video: video_with_ratio("b", 0.5),
                token: second,
            })
            .apply(AppAction::AnalysisFinished {
                token: first,
                result: Ok(analysis()),
            });

        assert_eq!(
            state.phase,
            Phase::Analyzing {
                video: video_with_ratio("b", 0.5),
                token: second
            }
        );
    }

    #[test]
    fn analysis_response_after_close_is_ignored() {
        let mut counter = RequestCounter::default();
        let state = with_results(&mut counter);
        let token = counter.next_token();
        let state = state
            .apply(AppAction::AnalysisStarted {
                video: video_with_ratio("a", 5.0),
                token,
            })
            .apply(AppAction::CloseAnalysis)
            .apply(AppAction::AnalysisFinished {
                token,
                result: Ok(analysis()),
            });

        assert_eq!(state.phase, Phase::Results);
    }

    #[test]
    fn failed_analysis_returns_to_results_with_error() {
        let mut counter = RequestCounter::default();
        let state = with_results(&mut counter);
        let token = counter.next_token();
        let state = state
            .apply(AppAction::AnalysisStarted {
                video: video_with_ratio("a", 5.0),
                token,
            })
            .apply(AppAction::AnalysisFinished {
                token,
                result: Err("bad json".to_string()),
            });

        assert_eq!(state.phase, Phase::Results);
        assert_eq!(state.videos.len(), 2);
        assert_eq!(state.notice, Some(Notice::Error("bad json".to_string())));
    }

    #[test]
    fn outline_replaces_previous_outline() {
        let mut counter = RequestCounter::default();
        let mut state = analyzed(&mut counter);
        for keyword in ["a", "b"] {
            let token = counter.next_token();
            state = state
                .apply(AppAction::OutlineStarted {
                    keyword: keyword.to_string(),
                    token,
                })
                .apply(AppAction::OutlineFinished {
                    token,
                    result: Ok(outline(keyword)),
                });
        }

        match &state.phase {
            Phase::Analyzed { outline, .. } => {
                assert_eq!(outline.selected_keyword(), Some("b"));
                assert!(matches!(outline, OutlineState::Ready(_)));
            }
            other => panic!("expected analyzed phase, got {other:?}"),
        }
    }

    #[test]
    fn stale_outline_is_ignored() {
        let mut counter = RequestCounter::default();
        let state = analyzed(&mut counter);
        let first = counter.next_token();
        let second = counter.next_token();
        let state = state
            .apply(AppAction::OutlineStarted {
                keyword: "a".to_string(),
                token: first,
            })
            .apply(AppAction::OutlineStarted {
                keyword: "b".to_string(),
                token: second,
            })
            .apply(AppAction::OutlineFinished {
                token: first,
                result: Ok(outline("a")),
            });

        match &state.phase {
            Phase::Analyzed { outline, .. } => {
                assert_eq!(
                    outline,
                    &OutlineState::Generating {
                        keyword: "b".to_string(),
                        token: second
                    }
                );
            }
            other => panic!("expected analyzed phase, got {other:?}"),
        }
    }

    #[test]
    fn closing_analysis_discards_analysis_and_outline() {
        let mut counter = RequestCounter::default();
        let token = counter.next_token();
        let state = analyzed(&mut counter)
            .apply(AppAction::OutlineStarted {
                keyword: "a".to_string(),
                token,
            })
            .apply(AppAction::CloseAnalysis);

        assert_eq!(state.phase, Phase::Results);
        assert_eq!(state.videos.len(), 2);
    }

    #[test]
    fn error_overlay_keeps_results_and_phase() {
        let mut counter = RequestCounter::default();
        let state = analyzed(&mut counter);
        let failed = state.apply(AppAction::Failed("Please enter your key".to_string()));

        assert_eq!(failed.phase, state.phase);
        assert_eq!(failed.videos, state.videos);
        assert_eq!(failed.apply(AppAction::DismissNotice).notice, None);
    }

    #[test]
    fn visible_videos_follow_threshold_without_refetch() {
        let state = with_results(&mut RequestCounter::default());
        let filter = SearchFilter {
            min_ratio: RatioThreshold::AtLeast3,
            ..state.filter.clone()
        };
        let state = state.apply(AppAction::FilterChanged(filter));

        let visible: Vec<String> = state.visible_videos().into_iter().map(|v| v.id).collect();
        assert_eq!(visible, vec!["a"]);
        assert_eq!(state.videos.len(), 2);
    }
}

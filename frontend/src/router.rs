use crate::actions::{run_analysis, run_outline, run_search};
use crate::analysis::components::AnalysisView;
use crate::app_state::{AppAction, AppState, Phase, RequestCounter};
use crate::components::{ApiKeyBar, LoadingPanel, NoticeBanner};
use crate::env_variable_utils::{get_app_name, ENDPOINTS};
use crate::error::{ApiError, Service};
use crate::http::GlooTransport;
use crate::key_store::{load_api_keys, store_api_keys, ApiKeys, LocalKeyStore};
use crate::models::Video;
use crate::search::components::{ResultsGrid, SearchBar};
use crate::search::search_options::{RatioThreshold, SearchFilter, SearchOptions, VideoType};
use crate::utils::scroll_to_top;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <TrendApp /> },
        Route::NotFound => html! {
            <div class="min-h-screen flex items-center justify-center bg-slate-50">
                <div class="bg-white p-8 rounded-lg shadow-lg text-center">
                    <h1 class="text-2xl font-bold text-gray-800 mb-4">{"404 - Page Not Found"}</h1>
                    <Link<Route> to={Route::Home} classes="text-red-600 hover:underline">
                        {"Go back to search"}
                    </Link<Route>>
                </div>
            </div>
        },
    }
}

fn update_url_params(filter: &SearchFilter) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(href) = window.location().href() else {
        return;
    };
    let Ok(url) = web_sys::Url::new(&href) else {
        return;
    };

    let search_params = url.search_params();
    search_params.set("q", &filter.keyword);
    search_params.set("type", filter.video_type.key());
    search_params.set("ratio", filter.min_ratio.key());

    // Update the URL without reloading the page
    if let Ok(history) = window.history() {
        if history
            .push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&url.href()))
            .is_err()
        {
            log::warn!("Could not update the page URL");
        }
    }
}

// Filter restored from `?q=..&type=..&ratio=..`
fn get_filter_from_url() -> SearchFilter {
    let params = web_sys::window()
        .and_then(|window| window.location().href().ok())
        .and_then(|href| web_sys::Url::new(&href).ok())
        .map(|url| url.search_params());

    let Some(params) = params else {
        return SearchFilter::default();
    };

    SearchFilter {
        keyword: params.get("q").unwrap_or_default(),
        video_type: params
            .get("type")
            .and_then(|key| VideoType::from_key(&key))
            .unwrap_or_default(),
        min_ratio: params
            .get("ratio")
            .and_then(|key| RatioThreshold::from_key(&key))
            .unwrap_or_default(),
    }
}

#[function_component(TrendApp)]
pub fn trend_app() -> Html {
    let state = use_reducer(|| AppState {
        filter: get_filter_from_url(),
        ..AppState::default()
    });
    let api_keys = use_state(|| load_api_keys(&LocalKeyStore));
    let request_counter = use_mut_ref(RequestCounter::default);

    let on_keys_change = {
        let api_keys = api_keys.clone();
        Callback::from(move |keys: ApiKeys| {
            store_api_keys(&LocalKeyStore, &keys);
            api_keys.set(keys);
        })
    };

    let on_dismiss_notice = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(AppAction::DismissNotice))
    };

    // Starts a search for `filter` with the keys of this render.
    let execute_search = {
        let dispatcher = state.dispatcher();
        let keys = (*api_keys).clone();
        let request_counter = request_counter.clone();

        move |filter: SearchFilter| {
            if !keys.has_youtube() {
                dispatcher.dispatch(AppAction::Failed(
                    ApiError::MissingCredential(Service::YouTube).to_string(),
                ));
                return;
            }
            if filter.keyword.trim().is_empty() {
                return;
            }

            let token = request_counter.borrow_mut().next_token();
            update_url_params(&filter);
            dispatcher.dispatch(AppAction::FilterChanged(filter.clone()));
            dispatcher.dispatch(AppAction::SearchStarted(token));

            let dispatcher = dispatcher.clone();
            let keys = keys.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = run_search(&GlooTransport, &ENDPOINTS, &keys, &filter)
                    .await
                    .map_err(|e| {
                        log::error!("Search for \"{}\" failed: {e}", filter.keyword);
                        e.to_string()
                    });
                dispatcher.dispatch(AppAction::SearchFinished { token, result });
            });
        }
    };

    // Run the search restored from the URL once on load
    {
        let initial_filter = state.filter.clone();
        let has_key = api_keys.has_youtube();
        let execute_search = execute_search.clone();
        use_effect_with((), move |_| {
            if has_key && !initial_filter.keyword.trim().is_empty() {
                execute_search(initial_filter);
            }
            || ()
        });
    }

    let on_search = {
        let filter = state.filter.clone();
        let execute_search = execute_search.clone();
        Callback::from(move |keyword: String| {
            execute_search(SearchFilter {
                keyword,
                ..filter.clone()
            });
        })
    };

    // Changing the duration bucket takes effect on the next search
    let on_video_type_change = {
        let dispatcher = state.dispatcher();
        let filter = state.filter.clone();
        Callback::from(move |video_type: VideoType| {
            dispatcher.dispatch(AppAction::FilterChanged(SearchFilter {
                video_type,
                ..filter.clone()
            }));
        })
    };

    let on_min_ratio_change = {
        let dispatcher = state.dispatcher();
        let filter = state.filter.clone();
        Callback::from(move |min_ratio: RatioThreshold| {
            let filter = SearchFilter {
                min_ratio,
                ..filter.clone()
            };
            if !filter.keyword.is_empty() {
                update_url_params(&filter);
            }
            dispatcher.dispatch(AppAction::FilterChanged(filter));
        })
    };

    let on_select_video = {
        let dispatcher = state.dispatcher();
        let keys = (*api_keys).clone();
        let request_counter = request_counter.clone();
        Callback::from(move |video: Video| {
            if !keys.has_gemini() {
                dispatcher.dispatch(AppAction::Failed(
                    ApiError::MissingCredential(Service::Gemini).to_string(),
                ));
                scroll_to_top();
                return;
            }

            let token = request_counter.borrow_mut().next_token();
            dispatcher.dispatch(AppAction::AnalysisStarted {
                video: video.clone(),
                token,
            });

            let dispatcher = dispatcher.clone();
            let keys = keys.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = run_analysis(&GlooTransport, &ENDPOINTS, &keys, &video)
                    .await
                    .map_err(|e| {
                        log::error!("Analysis of {} failed: {e}", video.id);
                        e.to_string()
                    });
                dispatcher.dispatch(AppAction::AnalysisFinished { token, result });
            });
        })
    };

    let on_keyword_select = {
        let dispatcher = state.dispatcher();
        let keys = (*api_keys).clone();
        let request_counter = request_counter.clone();
        let phase = state.phase.clone();
        Callback::from(move |keyword: String| {
            let Phase::Analyzed { video, analysis, .. } = &phase else {
                return;
            };
            if !keys.has_gemini() {
                dispatcher.dispatch(AppAction::Failed(
                    ApiError::MissingCredential(Service::Gemini).to_string(),
                ));
                return;
            }

            let token = request_counter.borrow_mut().next_token();
            dispatcher.dispatch(AppAction::OutlineStarted {
                keyword: keyword.clone(),
                token,
            });

            let dispatcher = dispatcher.clone();
            let keys = keys.clone();
            let video = video.clone();
            let analysis = analysis.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result =
                    run_outline(&GlooTransport, &ENDPOINTS, &keys, &keyword, &video, &analysis)
                        .await
                        .map_err(|e| {
                            log::error!("Outline for \"{keyword}\" failed: {e}");
                            e.to_string()
                        });
                dispatcher.dispatch(AppAction::OutlineFinished { token, result });
            });
        })
    };

    let on_close_analysis = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(AppAction::CloseAnalysis))
    };

    let visible_videos = state.visible_videos();
    let selected_id = state.selected_video().map(|video| video.id.clone());

    let analysis_panel = match &state.phase {
        Phase::Analyzing { .. } => html! {
            <LoadingPanel
                title="AI analysis in progress"
                detail={AttrValue::from("Reading comments and viewing patterns to draft content plans.")}
            />
        },
        Phase::Analyzed {
            video,
            analysis,
            outline,
        } => html! {
            <AnalysisView
                video={video.clone()}
                analysis={analysis.clone()}
                outline={outline.clone()}
                on_keyword_select={on_keyword_select}
                on_close={on_close_analysis}
            />
        },
        Phase::Idle | Phase::Searching | Phase::Results => html! {},
    };

    html! {
        <div class="min-h-screen bg-slate-50 pb-20 font-sans">
            <ApiKeyBar keys={(*api_keys).clone()} on_change={on_keys_change} />

            <header class="sticky top-0 z-30 bg-white border-b border-gray-200 shadow-sm">
                <div class="max-w-6xl mx-auto px-4 py-5 sm:px-6">
                    <div class="flex flex-col lg:flex-row items-center justify-between gap-6">
                        <div>
                            <h1 class="text-xl font-black text-gray-900 tracking-tight">{ get_app_name() }</h1>
                            <p class="text-xs font-bold text-gray-400 uppercase tracking-widest">{"Viral Script Planner"}</p>
                        </div>
                        <div class="flex-1 max-w-2xl w-full">
                            <SearchBar
                                query={state.filter.keyword.clone()}
                                loading={state.is_searching()}
                                on_search={on_search}
                            />
                            <SearchOptions
                                video_type={state.filter.video_type}
                                min_ratio={state.filter.min_ratio}
                                on_video_type_change={on_video_type_change}
                                on_min_ratio_change={on_min_ratio_change}
                            />
                        </div>
                    </div>
                </div>
            </header>

            <main class="max-w-6xl mx-auto px-4 sm:px-6 pt-8">
                <NoticeBanner notice={state.notice.clone()} on_dismiss={on_dismiss_notice} />

                <div class="grid grid-cols-1 lg:grid-cols-12 gap-8">
                    <div class={if selected_id.is_some() { "lg:col-span-5" } else { "lg:col-span-12" }}>
                        <ResultsGrid
                            videos={visible_videos}
                            selected_id={selected_id.clone()}
                            loading={state.is_searching()}
                            has_results={!state.videos.is_empty()}
                            on_select={on_select_video}
                        />
                    </div>
                    {
                        if selected_id.is_some() {
                            html! { <div class="lg:col-span-7 sticky top-28 h-fit">{ analysis_panel }</div> }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </main>
        </div>
    }
}

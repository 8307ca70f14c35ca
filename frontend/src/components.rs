use crate::app_state::Notice;
use crate::key_store::ApiKeys;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ApiKeyBarProps {
    pub keys: ApiKeys,
    pub on_change: Callback<ApiKeys>,
}

/// Password inputs for both API keys. Every edit is emitted right away so the
/// caller can persist it.
#[function_component(ApiKeyBar)]
pub fn api_key_bar(props: &ApiKeyBarProps) -> Html {
    let on_youtube_input = {
        let keys = props.keys.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let youtube = e.target_unchecked_into::<HtmlInputElement>().value();
            on_change.emit(ApiKeys {
                youtube,
                ..keys.clone()
            });
        })
    };

    let on_gemini_input = {
        let keys = props.keys.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let gemini = e.target_unchecked_into::<HtmlInputElement>().value();
            on_change.emit(ApiKeys {
                gemini,
                ..keys.clone()
            });
        })
    };

    let ready = props.keys.has_youtube() && props.keys.has_gemini();

    html! {
        <div class="bg-gray-900 text-white py-2 px-4 text-xs">
            <div class="max-w-6xl mx-auto flex flex-col sm:flex-row justify-between items-center gap-2">
                <div class="flex flex-wrap items-center justify-center gap-3 sm:gap-6">
                    <label class="flex items-center gap-2">
                        <span class="text-gray-400">{"YouTube Key:"}</span>
                        <input
                            type="password"
                            class="bg-gray-800 rounded px-2 py-1 text-white w-40 outline-none focus:ring-1 focus:ring-red-500"
                            placeholder="YouTube API Key"
                            value={props.keys.youtube.clone()}
                            oninput={on_youtube_input}
                        />
                    </label>
                    <label class="flex items-center gap-2">
                        <span class="text-gray-400">{"Gemini Key:"}</span>
                        <input
                            type="password"
                            class="bg-gray-800 rounded px-2 py-1 text-white w-40 outline-none focus:ring-1 focus:ring-blue-500"
                            placeholder="Gemini API Key"
                            value={props.keys.gemini.clone()}
                            oninput={on_gemini_input}
                        />
                    </label>
                </div>
                <span class="hidden md:block text-gray-500">
                    { if ready { "System ready." } else { "Enter both API keys to get started." } }
                </span>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct NoticeBannerProps {
    pub notice: Option<Notice>,
    pub on_dismiss: Callback<MouseEvent>,
}

#[function_component(NoticeBanner)]
pub fn notice_banner(props: &NoticeBannerProps) -> Html {
    let (class, text) = match &props.notice {
        Some(Notice::Error(msg)) => (
            "bg-red-50 border-red-100 text-red-700",
            msg.clone(),
        ),
        Some(Notice::NoResults) => (
            "bg-yellow-50 border-yellow-100 text-yellow-800",
            "No results found. Try another keyword or filter.".to_string(),
        ),
        None => return html! {},
    };

    html! {
        <div class={classes!("mb-6", "p-4", "border", "rounded-xl", "text-sm", "font-medium", "flex", "justify-between", "items-center", class)}>
            <span>{ text }</span>
            <button onclick={props.on_dismiss.clone()} class="ml-4 opacity-60 hover:opacity-100">{"✕"}</button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingPanelProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub detail: Option<AttrValue>,
}

#[function_component(LoadingPanel)]
pub fn loading_panel(props: &LoadingPanelProps) -> Html {
    html! {
        <div class="py-12 flex flex-col items-center justify-center bg-white rounded-2xl border border-dashed border-gray-300">
            <div class="w-10 h-10 border-4 border-red-100 border-t-red-600 rounded-full animate-spin mb-4"></div>
            <p class="text-gray-700 font-bold">{ props.title.clone() }</p>
            {
                if let Some(detail) = &props.detail {
                    html! { <p class="text-gray-500 text-sm mt-2">{ detail.clone() }</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

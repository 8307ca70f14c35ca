use crate::models::Video;
use crate::search::ranking::RatioTier;
use crate::utils::{format_iso8601_date, format_number, format_ratio};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    pub query: String,
    pub loading: bool,
    pub on_search: Callback<String>,
}

#[derive(Properties, PartialEq)]
pub struct VideoCardProps {
    pub video: Video,
    pub selected: bool,
    pub on_select: Callback<Video>,
}

#[derive(Properties, PartialEq)]
pub struct ResultsGridProps {
    pub videos: Vec<Video>,
    pub selected_id: Option<String>,
    pub loading: bool,
    pub has_results: bool,
    pub on_select: Callback<Video>,
}

#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let current_input = use_state(|| props.query.clone());

    {
        // Keep the field in sync when the query is restored from the URL.
        let current_input = current_input.clone();
        use_effect_with(props.query.clone(), move |query| {
            current_input.set(query.clone());
            || ()
        });
    }

    let on_input = {
        let current_input = current_input.clone();
        Callback::from(move |e: InputEvent| {
            let input_value = e.target_unchecked_into::<HtmlInputElement>().value();
            current_input.set(input_value);
        })
    };

    let on_submit = {
        let on_search = props.on_search.clone();
        let current_input = current_input.clone();
        Callback::from(move |e: web_sys::SubmitEvent| {
            e.prevent_default();
            on_search.emit((*current_input).clone());
        })
    };

    html! {
        <form onsubmit={on_submit} class="flex gap-2">
            <input
                type="text"
                class="flex-1 px-4 py-2.5 bg-gray-50 border border-gray-200 rounded-xl outline-none focus:ring-2 focus:ring-red-100 focus:border-red-500"
                placeholder="Search a topic to analyze..."
                value={(*current_input).clone()}
                oninput={on_input}
            />
            <button
                type="submit"
                class="bg-red-600 text-white px-6 py-2.5 rounded-xl font-bold hover:bg-red-700 disabled:opacity-50"
                disabled={props.loading}
            >
                { if props.loading { "Searching..." } else { "Find videos" } }
            </button>
        </form>
    }
}

#[function_component(VideoCard)]
pub fn video_card(props: &VideoCardProps) -> Html {
    let video = &props.video;
    let onclick = {
        let on_select = props.on_select.clone();
        let video = video.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(video.clone()))
    };

    html! {
        <div
            {onclick}
            class={classes!(
                "cursor-pointer", "bg-white", "rounded-xl", "overflow-hidden", "border", "hover:shadow-lg",
                if props.selected { "border-red-500 ring-2 ring-red-100 shadow-md" } else { "border-gray-200 hover:border-red-300" }
            )}
        >
            <div class="relative aspect-video overflow-hidden">
                <img src={video.thumbnail.clone()} alt={video.title.clone()} class="w-full h-full object-cover" />
                <span class={classes!(
                    "absolute", "top-2", "right-2", "px-2", "py-1", "rounded", "text-xs", "font-bold", "border",
                    RatioTier::of(video.performance_ratio).badge_classes()
                )}>
                    { format!("Ratio: {}", format_ratio(video.performance_ratio)) }
                </span>
            </div>
            <div class="p-4">
                <h3 class="font-bold text-gray-900 line-clamp-2 text-sm h-10 mb-2 leading-tight">
                    { &video.title }
                </h3>
                <div class="flex flex-col gap-1 text-xs text-gray-500">
                    <div class="flex justify-between">
                        <span>{"Channel"}</span>
                        <span class="font-medium text-gray-700">{ &video.channel_title }</span>
                    </div>
                    <div class="flex justify-between">
                        <span>{"Subscribers"}</span>
                        <span class="font-medium text-gray-700">{ format_number(video.subscriber_count) }</span>
                    </div>
                    <div class="flex justify-between">
                        <span>{"Views"}</span>
                        <span class="font-medium text-gray-700">{ format_number(video.view_count) }</span>
                    </div>
                    <div class="flex justify-between">
                        <span>{"Published"}</span>
                        <span class="font-medium text-gray-700">{ format_iso8601_date(&video.published_at) }</span>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[function_component(ResultsGrid)]
pub fn results_grid(props: &ResultsGridProps) -> Html {
    if props.videos.is_empty() && !props.loading {
        let message = if props.has_results {
            "No videos reach this ratio. Lower the viral ratio filter."
        } else {
            "Enter a keyword to find viral topics."
        };
        return html! {
            <div class="text-center py-20 bg-white rounded-3xl border border-dashed border-gray-200">
                <p class="text-gray-400 text-sm font-medium">{ message }</p>
            </div>
        };
    }

    let columns = if props.selected_id.is_some() {
        "sm:grid-cols-1"
    } else {
        "sm:grid-cols-2 lg:grid-cols-4"
    };

    html! {
        <div class="space-y-6">
            {
                if !props.videos.is_empty() {
                    html! {
                        <h2 class="text-lg font-bold text-gray-900">
                            { format!("Results ({})", props.videos.len()) }
                        </h2>
                    }
                } else {
                    html! {}
                }
            }
            <div class={classes!("grid", "grid-cols-1", "gap-4", columns)}>
                { for props.videos.iter().map(|video| html! {
                    <VideoCard
                        key={video.id.clone()}
                        video={video.clone()}
                        selected={props.selected_id.as_deref() == Some(video.id.as_str())}
                        on_select={props.on_select.clone()}
                    />
                })}
            </div>
            {
                if props.loading {
                    html! {
                        <div class="text-center py-12">
                            <div class="w-8 h-8 border-4 border-red-100 border-t-red-600 rounded-full animate-spin mx-auto"></div>
                            <p class="text-gray-400 text-xs mt-3 font-medium">{"Exploring content..."}</p>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

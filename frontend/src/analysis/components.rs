use crate::app_state::OutlineState;
use crate::components::LoadingPanel;
use crate::models::{AnalysisResult, ContentIdea, ScriptOutline, Video};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AnalysisViewProps {
    pub video: Video,
    pub analysis: AnalysisResult,
    pub outline: OutlineState,
    pub on_keyword_select: Callback<String>,
    pub on_close: Callback<MouseEvent>,
}

#[derive(Properties, PartialEq)]
pub struct KeywordChipsProps {
    pub keywords: Vec<String>,
    pub selected: Option<String>,
    pub on_select: Callback<String>,
}

#[derive(Properties, PartialEq)]
pub struct OutlineViewProps {
    pub outline: ScriptOutline,
}

#[derive(Properties, PartialEq)]
struct PointListProps {
    title: AttrValue,
    points: Vec<String>,
    marker: AttrValue,
}

#[function_component(PointList)]
fn point_list(props: &PointListProps) -> Html {
    html! {
        <div class="bg-white p-5 rounded-xl border border-gray-100 shadow-sm">
            <h3 class="text-sm font-bold text-gray-400 uppercase tracking-wider mb-3">{ props.title.clone() }</h3>
            <ul class="space-y-2">
                { for props.points.iter().map(|point| html! {
                    <li class="text-sm text-gray-700 flex gap-2">
                        <span>{ props.marker.clone() }</span>
                        <span>{ point }</span>
                    </li>
                })}
            </ul>
        </div>
    }
}

#[function_component(KeywordChips)]
pub fn keyword_chips(props: &KeywordChipsProps) -> Html {
    html! {
        <div class="flex flex-wrap gap-2">
            { for props.keywords.iter().map(|keyword| {
                let active = props.selected.as_deref() == Some(keyword.as_str());
                let onclick = {
                    let on_select = props.on_select.clone();
                    let keyword = keyword.clone();
                    Callback::from(move |_: MouseEvent| on_select.emit(keyword.clone()))
                };
                html! {
                    <button
                        {onclick}
                        class={classes!(
                            "px-4", "py-2.5", "rounded-xl", "font-bold", "text-sm", "border",
                            if active {
                                "bg-red-600 text-white border-red-600 shadow-lg"
                            } else {
                                "bg-white text-gray-700 border-gray-200 hover:border-red-300 hover:bg-red-50"
                            }
                        )}
                    >
                        { format!("#{keyword}") }
                    </button>
                }
            })}
        </div>
    }
}

fn idea_card(idea: &ContentIdea) -> Html {
    html! {
        <div class="bg-white p-4 rounded-xl border border-gray-100 shadow-sm">
            <h4 class="font-bold text-gray-900 mb-1">{ &idea.title }</h4>
            <p class="text-xs text-red-600 font-bold mb-2">{ &idea.angle }</p>
            <p class="text-sm text-gray-600 mb-2">{ &idea.reasoning }</p>
            <p class="text-xs text-gray-400">{ format!("Audience: {}", idea.target_audience) }</p>
        </div>
    }
}

#[function_component(OutlineView)]
pub fn outline_view(props: &OutlineViewProps) -> Html {
    let outline = &props.outline;
    let last = outline.sections.len().saturating_sub(1);

    html! {
        <section class="bg-white border-2 border-red-100 rounded-2xl overflow-hidden shadow-lg">
            <div class="bg-red-50 px-6 py-4 border-b border-red-100">
                <h4 class="font-bold text-red-700">{ format!("Content guide: {}", outline.keyword) }</h4>
            </div>
            <div class="p-6 space-y-6">
                <div>
                    <p class="text-xs font-bold text-gray-400 mb-1">{"Suggested title"}</p>
                    <h5 class="text-xl font-extrabold text-gray-900">{ format!("\"{}\"", outline.title) }</h5>
                </div>
                <div>
                    <p class="text-xs font-bold text-gray-400 mb-2">{"Intro"}</p>
                    <p class="text-sm text-gray-700 bg-gray-50 p-4 rounded-lg italic leading-relaxed">{ &outline.intro }</p>
                </div>
                <div class="space-y-4">
                    <p class="text-xs font-bold text-gray-400">{"Outline"}</p>
                    { for outline.sections.iter().enumerate().map(|(i, section)| html! {
                        <div class="flex gap-4">
                            <div class="flex flex-col items-center">
                                <div class="w-6 h-6 bg-red-100 text-red-600 rounded-full flex items-center justify-center text-xs font-bold">
                                    { (i + 1).to_string() }
                                </div>
                                { if i < last { html! { <div class="w-0.5 flex-1 bg-red-50 my-1"></div> } } else { html! {} } }
                            </div>
                            <div class="pb-4">
                                <h6 class="font-bold text-gray-900 mb-1">{ &section.heading }</h6>
                                <p class="text-sm text-gray-600 leading-relaxed">{ &section.content }</p>
                            </div>
                        </div>
                    })}
                </div>
                <div class="pt-4 border-t border-gray-100">
                    <p class="text-xs font-bold text-gray-400 mb-2">{"Outro"}</p>
                    <p class="text-sm text-gray-700 leading-relaxed">{ &outline.outro }</p>
                </div>
            </div>
        </section>
    }
}

#[function_component(AnalysisView)]
pub fn analysis_view(props: &AnalysisViewProps) -> Html {
    let analysis = &props.analysis;

    let outline_html = match &props.outline {
        OutlineState::None => html! {},
        OutlineState::Generating { keyword, .. } => html! {
            <LoadingPanel
                title="Drafting the script outline"
                detail={AttrValue::from(format!("Building an outline around \"{keyword}\"..."))}
            />
        },
        OutlineState::Ready(outline) => html! { <OutlineView outline={outline.clone()} /> },
    };

    html! {
        <div class="bg-white rounded-2xl border border-gray-200 overflow-hidden shadow-2xl">
            <div class="p-6 border-b border-gray-100 flex justify-between items-center bg-gray-50">
                <div>
                    <h2 class="text-xl font-bold text-gray-900">{"AI analysis & planning"}</h2>
                    <p class="text-sm text-gray-500 mt-1">{ format!("\"{}\"", props.video.title) }</p>
                </div>
                <button onclick={props.on_close.clone()} class="p-2 hover:bg-gray-200 rounded-full text-gray-500">
                    {"✕"}
                </button>
            </div>

            <div class="p-6 space-y-8 max-h-[75vh] overflow-y-auto">
                <section class="bg-white p-5 rounded-xl border border-gray-100 shadow-sm">
                    <h3 class="text-sm font-bold text-gray-400 uppercase tracking-wider mb-3">{"Audience reaction"}</h3>
                    <p class="text-gray-800 leading-relaxed font-medium">{ format!("\"{}\"", analysis.summary) }</p>
                </section>

                <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                    <PointList title="What worked" points={analysis.pros.clone()} marker="+" />
                    <PointList title="Gaps & questions" points={analysis.cons.clone()} marker="?" />
                </div>

                <section>
                    <div class="flex items-center gap-2 mb-4">
                        <h3 class="text-lg font-bold text-gray-900">{"Recommended keywords"}</h3>
                        <span class="text-xs font-medium px-2 py-0.5 bg-red-50 text-red-600 rounded-full border border-red-100">
                            {"Click to plan"}
                        </span>
                    </div>
                    <KeywordChips
                        keywords={analysis.keywords.clone()}
                        selected={props.outline.selected_keyword().map(str::to_string)}
                        on_select={props.on_keyword_select.clone()}
                    />
                </section>

                { outline_html }

                <section class="space-y-3">
                    <h3 class="text-lg font-bold text-gray-900">{"Content ideas"}</h3>
                    { for analysis.ideas.iter().map(idea_card) }
                </section>
            </div>
        </div>
    }
}

use shared::models::{Priority, Recommendation, RecommendationStatus};
use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct RecommendationCardProps {
    pub recommendation: Recommendation,
    /// True while an apply/dismiss call for this card is in flight.
    pub busy: bool,
    pub on_apply: Callback<String>,
    pub on_dismiss: Callback<String>,
}

#[function_component(RecommendationCard)]
pub fn recommendation_card(props: &RecommendationCardProps) -> Html {
    let recommendation = &props.recommendation;

    let priority_class = match recommendation.priority {
        Priority::High => "badge-error",
        Priority::Medium => "badge-warning",
        Priority::Low => "badge-ghost",
    };

    let actions = match recommendation.status {
        RecommendationStatus::Active => {
            let apply = {
                let on_apply = props.on_apply.clone();
                let id = recommendation.id.clone();
                Callback::from(move |_: MouseEvent| on_apply.emit(id.clone()))
            };
            let dismiss = {
                let on_dismiss = props.on_dismiss.clone();
                let id = recommendation.id.clone();
                Callback::from(move |_: MouseEvent| on_dismiss.emit(id.clone()))
            };
            html! {
                <div class="card-actions justify-end">
                    <button class="btn btn-ghost btn-sm" onclick={dismiss} disabled={props.busy}>
                        {"Dismiss"}
                    </button>
                    <button class="btn btn-primary btn-sm" onclick={apply} disabled={props.busy}>
                        if props.busy {
                            <span class="loading loading-spinner loading-xs"></span>
                        }
                        {"Apply"}
                    </button>
                </div>
            }
        }
        RecommendationStatus::Applied => html! {
            <div class="card-actions justify-end">
                <span class="badge badge-success gap-1">
                    <Icon icon_id={IconId::HeroiconsOutlineCheckCircle} class="w-4 h-4" />
                    {"Applied"}
                </span>
            </div>
        },
        RecommendationStatus::Dismissed => html! {
            <div class="card-actions justify-end">
                <span class="badge badge-ghost">{"Dismissed"}</span>
            </div>
        },
    };

    let muted = recommendation.status == RecommendationStatus::Dismissed;

    html! {
        <div class={classes!("card", "bg-base-200", "shadow-xl", muted.then_some("opacity-60"))}>
            <div class="card-body">
                <div class="flex items-center gap-2">
                    <span class="badge badge-outline">{ recommendation.category.label() }</span>
                    <span class={classes!("badge", priority_class)}>{ recommendation.priority.label() }</span>
                    <span class="ml-auto text-xs text-base-content/60">
                        { recommendation.created_at.format("%b %d, %Y").to_string() }
                    </span>
                </div>
                <h2 class="card-title text-base">{ recommendation.title.clone() }</h2>
                <p class="text-sm text-base-content/80">{ recommendation.description.clone() }</p>
                { actions }
            </div>
        </div>
    }
}

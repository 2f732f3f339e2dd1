use crate::{
    api::{ApiClient, ApiError},
    auth_flow,
    components::{FetchError, Loading, RecommendationCard, ToastLevel, Toasts, push_toast},
    models::{AppState, FetchState},
};
use shared::models::Recommendation;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::hooks::use_navigator;
use yewdux::prelude::{Dispatch, use_store};

/// AI-generated study suggestions.
///
/// The list is fetched fresh on every visit. "Generate" asks the backend for
/// a new batch and re-fetches; Apply and Dismiss act on a single card and
/// swap in the updated card from the response, leaving the rest of the list
/// untouched. Card-level failures surface as toasts so the list stays
/// usable.
#[function_component(RecommendationsPage)]
pub fn recommendations_page() -> Html {
    let state = use_state(|| FetchState::<Vec<Recommendation>>::Loading);
    let attempt = use_state(|| 0u32);
    let busy_card = use_state(|| None::<String>);
    let is_generating = use_state(|| false);
    let navigator = use_navigator();
    let (_, dispatch) = use_store::<AppState>();
    let (_, toast_dispatch) = use_store::<Toasts>();

    {
        let state = state.clone();
        let navigator = navigator.clone();
        let dispatch = dispatch.clone();
        use_effect_with(*attempt, move |_| {
            state.set(FetchState::Loading);
            spawn_local(async move {
                let client = ApiClient::shared();
                match client.recommendations().await {
                    Ok(response) => state.set(FetchState::Ready(response.recommendations)),
                    Err(err) if err.is_unauthorized() => {
                        auth_flow::expire_to_login(&dispatch, navigator.as_ref());
                    }
                    Err(err) => state.set(FetchState::Failed(err)),
                }
            });
            || ()
        });
    }

    let on_generate = {
        let attempt = attempt.clone();
        let is_generating = is_generating.clone();
        let toast_dispatch = toast_dispatch.clone();
        let dispatch = dispatch.clone();
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            is_generating.set(true);
            let attempt = attempt.clone();
            let is_generating = is_generating.clone();
            let toast_dispatch = toast_dispatch.clone();
            let dispatch = dispatch.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let client = ApiClient::shared();
                match client.generate_recommendations().await {
                    Ok(response) => {
                        push_toast(
                            &toast_dispatch,
                            ToastLevel::Success,
                            format!("{} new recommendations", response.generated),
                        );
                        // Re-fetch so the list shows the new batch.
                        attempt.set(*attempt + 1);
                    }
                    Err(err) if err.is_unauthorized() => {
                        auth_flow::expire_to_login(&dispatch, navigator.as_ref());
                    }
                    Err(err) => {
                        push_toast(&toast_dispatch, ToastLevel::Error, err.to_string());
                    }
                }
                is_generating.set(false);
            });
        })
    };

    let card_action = |apply: bool| {
        let state = state.clone();
        let busy_card = busy_card.clone();
        let toast_dispatch = toast_dispatch.clone();
        let dispatch = dispatch.clone();
        let navigator = navigator.clone();
        Callback::from(move |id: String| {
            busy_card.set(Some(id.clone()));
            let state = state.clone();
            let busy_card = busy_card.clone();
            let toast_dispatch = toast_dispatch.clone();
            let dispatch = dispatch.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let client = ApiClient::shared();
                let outcome = if apply {
                    client.apply_recommendation(&id).await
                } else {
                    client.dismiss_recommendation(&id).await
                };
                match outcome {
                    Err(err) if err.is_unauthorized() => {
                        auth_flow::expire_to_login(&dispatch, navigator.as_ref());
                    }
                    outcome => handle_card_outcome(
                        &state,
                        &toast_dispatch,
                        outcome.map(|response| response.recommendation),
                    ),
                }
                busy_card.set(None);
            });
        })
    };

    let on_apply = card_action(true);
    let on_dismiss = card_action(false);

    let on_retry = {
        let attempt = attempt.clone();
        Callback::from(move |()| attempt.set(*attempt + 1))
    };

    let body = match &*state {
        FetchState::Loading => html! { <Loading /> },
        FetchState::Failed(err) => html! {
            <FetchError message={err.to_string()} on_retry={on_retry} />
        },
        FetchState::Ready(recommendations) if recommendations.is_empty() => html! {
            <div class="card bg-base-200 shadow-xl">
                <div class="card-body items-center text-center">
                    <Icon icon_id={IconId::HeroiconsOutlineLightBulb} class="w-10 h-10 text-primary" />
                    <p>{"No recommendations yet. Generate a batch to get started."}</p>
                </div>
            </div>
        },
        FetchState::Ready(recommendations) => html! {
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                { for recommendations.iter().map(|recommendation| html! {
                    <RecommendationCard
                        key={recommendation.id.clone()}
                        recommendation={recommendation.clone()}
                        busy={busy_card.as_ref() == Some(&recommendation.id)}
                        on_apply={on_apply.clone()}
                        on_dismiss={on_dismiss.clone()}
                    />
                }) }
            </div>
        },
    };

    html! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold">{"Recommendations"}</h1>
                <button class="btn btn-primary btn-sm" onclick={on_generate} disabled={*is_generating}>
                    if *is_generating {
                        <span class="loading loading-spinner loading-xs"></span>
                    }
                    {"Generate"}
                </button>
            </div>
            { body }
        </div>
    }
}

/// Swap the updated card into the list, or toast the failure.
fn handle_card_outcome(
    state: &UseStateHandle<FetchState<Vec<Recommendation>>>,
    toast_dispatch: &Dispatch<Toasts>,
    outcome: Result<Recommendation, ApiError>,
) {
    match outcome {
        Ok(updated) => {
            if let FetchState::Ready(recommendations) = &**state {
                let next = recommendations
                    .iter()
                    .map(|card| {
                        if card.id == updated.id {
                            updated.clone()
                        } else {
                            card.clone()
                        }
                    })
                    .collect();
                state.set(FetchState::Ready(next));
            }
        }
        Err(err) => {
            push_toast(toast_dispatch, ToastLevel::Error, err.to_string());
        }
    }
}

use crate::components::loading::Loading;
use crate::models::app_state::AppState;
use crate::routes::MainRoute;
use crate::session::SessionStore;
use yew::{Html, function_component, html, use_effect_with, use_state};
use yew_router::prelude::*;
use yewdux::prelude::use_store;

/// Application root: hydrates the in-memory session from storage, then
/// mounts the router.
///
/// Hydration happens before the first route renders so the guards in
/// `routes.rs` see the persisted session rather than the default signed-out
/// state. The session store is read once here; afterwards only the auth
/// pages write it.
#[function_component(App)]
pub fn app() -> Html {
    let (_state, dispatch) = use_store::<AppState>();
    let hydrated = use_state(|| false);

    {
        let hydrated = hydrated.clone();
        let dispatch = dispatch.clone();
        use_effect_with((), move |()| {
            if let Some(session) = SessionStore::get() {
                dispatch.set(AppState::authenticated(session));
            }
            hydrated.set(true);
            || ()
        });
    }

    if !*hydrated {
        return html! { <Loading /> };
    }

    html! {
        <BrowserRouter>
            <Switch<MainRoute> render={crate::routes::switch} />
        </BrowserRouter>
    }
}

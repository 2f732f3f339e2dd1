use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::hooks::use_navigator;
use yew_router::prelude::Link;
use yewdux::prelude::use_store;

use crate::{auth_flow, models::app_state::AppState, routes::MainRoute};

#[function_component(UserDropdown)]
pub fn user_dropdown() -> Html {
    let navigator = use_navigator();
    let (state, dispatch) = use_store::<AppState>();
    let Some(session) = state.session.clone() else {
        return html! {};
    };

    // The session may hold only a token right after email verification; the
    // profile shows up once the profile page has been visited.
    let (name, email) = session
        .user
        .map_or_else(
            || ("Account".to_string(), String::new()),
            |user| (user.name, user.email),
        );
    let initial = name.chars().next().unwrap_or('?').to_uppercase().to_string();

    let logout_button = {
        let onclick = Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            auth_flow::sign_out(&dispatch, navigator.as_ref());
        });
        html! {
            <li>
                <a {onclick}>
                    <Icon icon_id={IconId::HeroiconsOutlineArrowRightOnRectangle} class="w-4 h-4" />
                    {"Sign out"}
                </a>
            </li>
        }
    };

    html! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-ghost btn-circle avatar placeholder mb-1">
                <div class="bg-primary text-primary-content rounded-full w-9">
                    <span>{ initial }</span>
                </div>
            </div>
            <ul tabindex="0" class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-52">
                <li class="px-2 py-1 text-left">
                    <div class="text-sm font-semibold text-base-content">{ name.clone() }</div>
                    <div class="text-xs text-base-content/70">{ email }</div>
                </li>
                <div class="divider my-0"></div>
                <li>
                    <Link<MainRoute> to={MainRoute::Profile}>
                        <Icon icon_id={IconId::HeroiconsOutlineUserCircle} class="w-4 h-4" />
                        {"Profile"}
                    </Link<MainRoute>>
                </li>
                <div class="divider my-0"></div>
                {logout_button}
            </ul>
        </div>
    }
}

use crate::{
    components::{header_nav_item::HeaderNavItem, user_dropdown::UserDropdown},
    models::app_state::AppState,
    routes::MainRoute,
};
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub current_route: MainRoute,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let is_authenticated = *use_selector(|state: &AppState| state.is_authenticated());

    let render_routes = || -> Html {
        html! {
            { for MainRoute::nav_items().into_iter().map(|route| html! {
                <HeaderNavItem route={route} current_route={props.current_route.clone()} />
            }) }
        }
    };

    html! {
        <nav class="navbar justify-between bg-base-300">
            <Link<MainRoute> to={MainRoute::Dashboard} classes="btn btn-ghost text-lg">
                <span class="text-primary font-bold">{"Task"}</span>
                <span class="font-bold -ml-1">{"Flow"}</span>
            </Link<MainRoute>>
            <div class="dropdown dropdown-end sm:hidden">
                <button class="btn btn-soft">{"☰"}</button>
                <ul
                    tabindex="0"
                    class="dropdown-content menu z-[1] bg-base-200 p-6 rounded-box shadow w-56 gap-2"
                >
                    { render_routes() }
                </ul>
            </div>
            <ul class="hidden menu sm:menu-horizontal">
                { render_routes() }
            </ul>
            <div class="flex items-center gap-2">
                {
                    if is_authenticated {
                        html! { <UserDropdown /> }
                    } else {
                        html! {
                            <Link<MainRoute> to={MainRoute::Login} classes="btn btn-primary btn-sm">
                                {"Sign in"}
                            </Link<MainRoute>>
                        }
                    }
                }
            </div>
        </nav>
    }
}

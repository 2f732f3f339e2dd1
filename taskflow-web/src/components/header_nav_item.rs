use yew::{Html, Properties, classes, function_component, html};
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;

use crate::routes::MainRoute;

#[derive(Properties, PartialEq)]
pub struct HeaderNavItemProps {
    pub route: MainRoute,
    pub current_route: MainRoute,
}

#[function_component(HeaderNavItem)]
pub fn header_nav_item(props: &HeaderNavItemProps) -> Html {
    let active_route_class = if props.current_route == props.route {
        "btn-soft"
    } else {
        ""
    };

    html! {
        <li>
            <Link<MainRoute>
                to={props.route.clone()}
                classes={classes!("btn", "btn-ghost", "gap-2", active_route_class)}
            >
                <Icon icon_id={icon_for(&props.route)} class="w-4 h-4" />
                { props.route.label() }
            </Link<MainRoute>>
        </li>
    }
}

fn icon_for(route: &MainRoute) -> IconId {
    match route {
        MainRoute::Dashboard => IconId::HeroiconsOutlineHome,
        MainRoute::Analytics => IconId::HeroiconsOutlineChartBar,
        MainRoute::Recommendations => IconId::HeroiconsOutlineLightBulb,
        MainRoute::Profile => IconId::HeroiconsOutlineUserCircle,
        _ => IconId::HeroiconsOutlineDocument,
    }
}

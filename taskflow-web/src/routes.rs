use crate::{containers::layout::Layout, models::app_state::AppState, pages::*};
use strum::{EnumIter, IntoEnumIterator};
use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// The main routes
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Dashboard,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/verify-otp")]
    VerifyOtp,
    #[at("/analytics")]
    Analytics,
    #[at("/recommendations")]
    Recommendations,
    #[at("/profile")]
    Profile,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl MainRoute {
    /// Whether this route may only render with a session present.
    ///
    /// The routes that fetch data require one; the three auth routes require
    /// its absence and redirect to the dashboard otherwise.
    pub fn requires_session(&self) -> bool {
        !matches!(self, Self::Login | Self::Register | Self::VerifyOtp)
    }

    /// Routes shown in the header navigation, in display order.
    pub fn nav_items() -> Vec<Self> {
        Self::iter()
            .filter(|route| {
                matches!(
                    route,
                    Self::Dashboard | Self::Analytics | Self::Recommendations | Self::Profile
                )
            })
            .collect()
    }

    /// Human label for navigation and titles.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Login => "Sign in",
            Self::Register => "Create account",
            Self::VerifyOtp => "Verify email",
            Self::Analytics => "Analytics",
            Self::Recommendations => "Recommendations",
            Self::Profile => "Profile",
            Self::NotFound => "Page not found",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct MainRouteViewProps {
    pub route: MainRoute,
}

#[function_component(MainRouteView)]
fn main_route_view(props: &MainRouteViewProps) -> Html {
    let is_authenticated = *use_selector(|state: &AppState| state.is_authenticated());
    let route = props.route.clone();

    // Guard before any page mounts: protected pages never render (and so
    // never fetch) without a session, and the auth pages bounce a signed-in
    // visitor back to the dashboard.
    if route.requires_session() && !is_authenticated {
        return html! { <Redirect<MainRoute> to={MainRoute::Login} /> };
    }
    if !route.requires_session() && is_authenticated {
        return html! { <Redirect<MainRoute> to={MainRoute::Dashboard} /> };
    }

    match route {
        MainRoute::Login => html! { <LoginPage /> },
        MainRoute::Register => html! { <RegisterPage /> },
        MainRoute::VerifyOtp => html! { <VerifyOtpPage /> },
        MainRoute::Dashboard => in_layout(MainRoute::Dashboard, html! { <DashboardPage /> }),
        MainRoute::Analytics => in_layout(MainRoute::Analytics, html! { <AnalyticsPage /> }),
        MainRoute::Recommendations => {
            in_layout(MainRoute::Recommendations, html! { <RecommendationsPage /> })
        }
        MainRoute::Profile => in_layout(MainRoute::Profile, html! { <ProfilePage /> }),
        MainRoute::NotFound => in_layout(MainRoute::NotFound, html! { <ErrorPage /> }),
    }
}

fn in_layout(route: MainRoute, page: Html) -> Html {
    html! { <Layout current_route={route}>{page}</Layout> }
}

/// Switch function for the main routes.
pub fn switch(route: MainRoute) -> Html {
    log(std::format!("Switching to route: {:?}", route).as_str());
    html! { <MainRouteView {route} /> }
}

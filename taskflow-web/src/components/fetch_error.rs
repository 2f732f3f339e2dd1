use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct FetchErrorProps {
    pub message: AttrValue,
    pub on_retry: Callback<()>,
}

/// Error panel shown when a view's load failed, with a retry button that
/// re-runs the whole fetch.
#[function_component(FetchError)]
pub fn fetch_error(props: &FetchErrorProps) -> Html {
    let on_retry = props.on_retry.clone();
    let onclick = Callback::from(move |_: MouseEvent| on_retry.emit(()));

    html! {
        <div class="alert alert-error shadow-lg">
            <Icon icon_id={IconId::HeroiconsOutlineExclamationTriangle} class="w-6 h-6" />
            <span>{ props.message.clone() }</span>
            <button class="btn btn-sm" {onclick}>{"Try again"}</button>
        </div>
    }
}

use gloo_timers::callback::Timeout;
use uuid::Uuid;
use yew::prelude::*;
use yewdux::prelude::*;

const DISMISS_AFTER_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

impl ToastLevel {
    fn class(self) -> &'static str {
        match self {
            Self::Success => "alert-success",
            Self::Error => "alert-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub level: ToastLevel,
    pub message: String,
}

/// Transient notifications, newest last. Lives in its own store so pushing a
/// toast never re-renders session-dependent components.
#[derive(Default, Clone, PartialEq, Eq, Store)]
pub struct Toasts {
    pub entries: Vec<Toast>,
}

/// Show a message and schedule its removal.
pub fn push_toast(dispatch: &Dispatch<Toasts>, level: ToastLevel, message: impl Into<String>) {
    let id = Uuid::new_v4();
    let message = message.into();
    dispatch.reduce_mut(|toasts| toasts.entries.push(Toast { id, level, message }));

    let dispatch = dispatch.clone();
    Timeout::new(DISMISS_AFTER_MS, move || {
        dispatch.reduce_mut(|toasts| toasts.entries.retain(|entry| entry.id != id));
    })
    .forget();
}

#[function_component(ToastHost)]
pub fn toast_host() -> Html {
    let (toasts, _) = use_store::<Toasts>();
    if toasts.entries.is_empty() {
        return html! {};
    }
    html! {
        <div class="toast toast-end z-50">
            { for toasts.entries.iter().map(|toast| html! {
                <div key={toast.id.to_string()} class={classes!("alert", toast.level.class())}>
                    <span>{ toast.message.clone() }</span>
                </div>
            }) }
        </div>
    }
}

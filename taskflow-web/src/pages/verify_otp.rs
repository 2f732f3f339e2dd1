use crate::{
    api::ApiClient,
    auth_flow,
    models::app_state::AppState,
    pages::auth_validation::{ValidationError, validate_otp},
    routes::MainRoute,
    session::SessionStore,
};
use serde::{Deserialize, Serialize};
use shared::models::{ResendOtpRequest, VerifyOtpRequest};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::{use_location, use_navigator};
use yew_router::prelude::Link;
use yewdux::prelude::use_store;

/// Query string of the verification page: the unverified account's
/// identifier as handed out by registration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OtpQuery {
    #[serde(rename = "userId")]
    pub user_id: String,
}

/// Email verification form for a freshly registered account.
///
/// The six-digit code is gated on its length only; everything else is the
/// server's call. Resending a code is possible at any time, the button is
/// merely disabled while its own request is in flight.
#[function_component(VerifyOtpPage)]
pub fn verify_otp_page() -> Html {
    let code = use_state(String::new);
    let error = use_state(|| None::<String>);
    let notice = use_state(|| None::<String>);
    let is_verifying = use_state(|| false);
    let is_resending = use_state(|| false);

    let navigator = use_navigator();
    let location = use_location();
    let (_, dispatch) = use_store::<AppState>();

    let user_id = location
        .as_ref()
        .and_then(|location| location.query::<OtpQuery>().ok())
        .map(|query| query.user_id);

    // Registration remembered which address the code went to.
    let pending_email = SessionStore::pending().map(|pending| pending.email);

    let Some(user_id) = user_id else {
        // Arrived without an identifier, e.g. a stale bookmark. There is
        // nothing to verify against, so point back at registration.
        return html! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="card w-full max-w-md shadow-lg bg-base-100">
                    <div class="card-body items-center text-center">
                        <h2 class="card-title text-2xl">{"Verification link is incomplete"}</h2>
                        <p class="text-sm text-base-content/70">
                            {"This page needs the account reference from the registration step."}
                        </p>
                        <Link<MainRoute> to={MainRoute::Register} classes="btn btn-primary mt-4">
                            {"Back to registration"}
                        </Link<MainRoute>>
                    </div>
                </div>
            </div>
        };
    };

    let onsubmit = {
        let code = code.clone();
        let error = error.clone();
        let is_verifying = is_verifying.clone();
        let dispatch = dispatch.clone();
        let navigator = navigator.clone();
        let user_id = user_id.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let code_value = (*code).clone();

            // Exact length is checked here; a short or long code never
            // reaches the network.
            if let Err(ValidationError::CodeLength) = validate_otp(&code_value) {
                error.set(Some(ValidationError::CodeLength.message().to_string()));
                return;
            }

            is_verifying.set(true);
            error.set(None);
            let request = VerifyOtpRequest {
                user_id: user_id.clone(),
                otp: code_value,
            };
            let error = error.clone();
            let is_verifying = is_verifying.clone();
            let dispatch = dispatch.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let client = ApiClient::shared();
                match client.verify_otp(&request).await {
                    Ok(response) => {
                        let transition = auth_flow::after_verify(response);
                        auth_flow::apply(&transition, &dispatch);
                        if let Some(navigator) = navigator {
                            navigator.push(&transition.next.route());
                        }
                    }
                    Err(err) => {
                        error.set(Some(err.to_string()));
                    }
                }
                is_verifying.set(false);
            });
        })
    };

    let on_resend = {
        let notice = notice.clone();
        let error = error.clone();
        let is_resending = is_resending.clone();
        let user_id = user_id.clone();
        Callback::from(move |_: MouseEvent| {
            is_resending.set(true);
            let request = ResendOtpRequest {
                user_id: user_id.clone(),
            };
            let notice = notice.clone();
            let error = error.clone();
            let is_resending = is_resending.clone();
            spawn_local(async move {
                let client = ApiClient::shared();
                match client.resend_otp(&request).await {
                    Ok(ack) => {
                        notice.set(Some(
                            ack.message
                                .unwrap_or_else(|| "A new code is on its way".to_string()),
                        ));
                        error.set(None);
                    }
                    Err(err) => {
                        error.set(Some(err.to_string()));
                    }
                }
                is_resending.set(false);
            });
        })
    };

    let on_code_change = {
        let code = code.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                code.set(input.value());
            }
        })
    };

    let is_busy = *is_verifying;

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit}>
                    <h2 class="card-title text-2xl">{"Check your inbox"}</h2>
                    <p class="text-sm text-base-content/70">
                        {
                            match &pending_email {
                                Some(email) => format!("We sent a 6-digit code to {email}."),
                                None => "We sent a 6-digit code to your email address.".to_string(),
                            }
                        }
                    </p>
                    if let Some(message) = &*error {
                        <div class="alert alert-error">
                            <span>{message.clone()}</span>
                        </div>
                    }
                    if let Some(message) = &*notice {
                        <div class="alert alert-success">
                            <span>{message.clone()}</span>
                        </div>
                    }
                    <div class="form-control">
                        <label class="label" for="otp">
                            <span class="label-text">{"Verification code"}</span>
                        </label>
                        <input
                            id="otp"
                            class="input input-bordered text-center text-xl tracking-[0.5em]"
                            type="text"
                            inputmode="numeric"
                            maxlength="6"
                            value={(*code).clone()}
                            oninput={on_code_change}
                        />
                    </div>
                    <div class="form-control mt-4">
                        <button class="btn btn-primary" type="submit" disabled={is_busy}>
                            {if is_busy { "Verifying..." } else { "Verify" }}
                        </button>
                    </div>
                    <p class="text-sm text-center mt-2">
                        {"Didn't get it? "}
                        <button
                            type="button"
                            class="link link-primary"
                            onclick={on_resend}
                            disabled={*is_resending}
                        >
                            {if *is_resending { "Sending..." } else { "Resend code" }}
                        </button>
                    </p>
                </form>
            </div>
        </div>
    }
}

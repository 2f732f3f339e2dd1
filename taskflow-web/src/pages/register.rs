use crate::{
    api::ApiClient,
    auth_flow::{self, AuthStage},
    models::app_state::AppState,
    pages::auth_validation::{
        validate_confirm_password, validate_email, validate_name, validate_password,
        validate_terms,
    },
    pages::verify_otp::OtpQuery,
    routes::MainRoute,
};
use shared::models::RegisterRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yew_router::prelude::Link;
use yewdux::prelude::use_store;

/// Account creation form.
///
/// Every field is validated on blur and again on submit; nothing reaches the
/// network until all checks pass. The confirmation and terms checkbox stay
/// client-side. Depending on the backend, a successful submission either
/// opens a session directly or moves on to the email verification page.
#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let confirm_password = use_state(String::new);
    let terms_accepted = use_state(|| false);

    let name_error = use_state(|| None::<AttrValue>);
    let email_error = use_state(|| None::<AttrValue>);
    let password_error = use_state(|| None::<AttrValue>);
    let confirm_error = use_state(|| None::<AttrValue>);
    let terms_error = use_state(|| None::<AttrValue>);

    let form_error = use_state(|| None::<String>);
    let is_submitting = use_state(|| false);

    let navigator = use_navigator();
    let (_, dispatch) = use_store::<AppState>();

    let on_name_blur = {
        let name = name.clone();
        let name_error = name_error.clone();
        Callback::from(move |_: FocusEvent| {
            name_error.set(
                validate_name(&name)
                    .err()
                    .map(|error| AttrValue::from(error.message())),
            );
        })
    };

    let on_email_blur = {
        let email = email.clone();
        let email_error = email_error.clone();
        Callback::from(move |_: FocusEvent| {
            email_error.set(
                validate_email(&email)
                    .err()
                    .map(|error| AttrValue::from(error.message())),
            );
        })
    };

    let on_password_blur = {
        let password = password.clone();
        let password_error = password_error.clone();
        Callback::from(move |_: FocusEvent| {
            password_error.set(
                validate_password(&password)
                    .err()
                    .map(|error| AttrValue::from(error.message())),
            );
        })
    };

    let on_confirm_blur = {
        let password = password.clone();
        let confirm_password = confirm_password.clone();
        let confirm_error = confirm_error.clone();
        Callback::from(move |_: FocusEvent| {
            confirm_error.set(
                validate_confirm_password(&confirm_password, &password)
                    .err()
                    .map(|error| AttrValue::from(error.message())),
            );
        })
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let password = password.clone();
        let confirm_password = confirm_password.clone();
        let terms_accepted = terms_accepted.clone();
        let name_error = name_error.clone();
        let email_error = email_error.clone();
        let password_error = password_error.clone();
        let confirm_error = confirm_error.clone();
        let terms_error = terms_error.clone();
        let form_error = form_error.clone();
        let is_submitting = is_submitting.clone();
        let dispatch = dispatch.clone();
        let navigator = navigator;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let checks = [
                (
                    &name_error,
                    validate_name(&name).err(),
                ),
                (
                    &email_error,
                    validate_email(&email).err(),
                ),
                (
                    &password_error,
                    validate_password(&password).err(),
                ),
                (
                    &confirm_error,
                    validate_confirm_password(&confirm_password, &password).err(),
                ),
                (
                    &terms_error,
                    validate_terms(*terms_accepted).err(),
                ),
            ];
            let mut valid = true;
            for (handle, outcome) in checks {
                valid &= outcome.is_none();
                handle.set(outcome.map(|error| AttrValue::from(error.message())));
            }
            if !valid {
                return;
            }

            is_submitting.set(true);
            form_error.set(None);
            let email_value = (*email).clone();
            let request = RegisterRequest {
                name: (*name).clone(),
                email: email_value.clone(),
                password: (*password).clone(),
            };
            let form_error = form_error.clone();
            let is_submitting = is_submitting.clone();
            let dispatch = dispatch.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let client = ApiClient::shared();
                match client.register(&request).await {
                    Ok(response) => {
                        let transition = auth_flow::after_register(&email_value, response);
                        auth_flow::apply(&transition, &dispatch);
                        if let Some(navigator) = navigator {
                            match &transition.next {
                                AuthStage::PendingOtp { user_id } => {
                                    let query = OtpQuery {
                                        user_id: user_id.clone(),
                                    };
                                    if let Err(err) = navigator
                                        .push_with_query(&transition.next.route(), &query)
                                    {
                                        web_sys::console::error_1(
                                            &format!("navigation failed: {err:?}").into(),
                                        );
                                    }
                                }
                                AuthStage::Authenticated => {
                                    navigator.push(&transition.next.route());
                                }
                            }
                        }
                    }
                    Err(err) => {
                        form_error.set(Some(err.to_string()));
                    }
                }
                is_submitting.set(false);
            });
        })
    };

    let text_input = |value: &UseStateHandle<String>| {
        let value = value.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                value.set(input.value());
            }
        })
    };

    let on_terms_change = {
        let terms_accepted = terms_accepted.clone();
        let terms_error = terms_error.clone();
        Callback::from(move |event: Event| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                terms_accepted.set(input.checked());
                if input.checked() {
                    terms_error.set(None);
                }
            }
        })
    };

    let field_error = |error: &Option<AttrValue>| {
        error.as_ref().map_or_else(
            || html! {},
            |message| {
                html! {
                    <span class="label-text-alt text-error">{ message.clone() }</span>
                }
            },
        )
    };

    let is_busy = *is_submitting;

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200 py-8">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit}>
                    <h2 class="card-title text-2xl">{"Create your account"}</h2>
                    if let Some(message) = &*form_error {
                        <div class="alert alert-error">
                            <span>{message.clone()}</span>
                        </div>
                    }
                    <div class="form-control">
                        <label class="label" for="name">
                            <span class="label-text">{"Name"}</span>
                        </label>
                        <input
                            id="name"
                            class={classes!("input", "input-bordered", name_error.is_some().then_some("input-error"))}
                            type="text"
                            value={(*name).clone()}
                            oninput={text_input(&name)}
                            onblur={on_name_blur}
                        />
                        <label class="label">{ field_error(&name_error) }</label>
                    </div>
                    <div class="form-control">
                        <label class="label" for="email">
                            <span class="label-text">{"Email"}</span>
                        </label>
                        <input
                            id="email"
                            class={classes!("input", "input-bordered", email_error.is_some().then_some("input-error"))}
                            type="email"
                            value={(*email).clone()}
                            oninput={text_input(&email)}
                            onblur={on_email_blur}
                        />
                        <label class="label">{ field_error(&email_error) }</label>
                    </div>
                    <div class="form-control">
                        <label class="label" for="password">
                            <span class="label-text">{"Password"}</span>
                        </label>
                        <input
                            id="password"
                            class={classes!("input", "input-bordered", password_error.is_some().then_some("input-error"))}
                            type="password"
                            value={(*password).clone()}
                            oninput={text_input(&password)}
                            onblur={on_password_blur}
                        />
                        <label class="label">{ field_error(&password_error) }</label>
                    </div>
                    <div class="form-control">
                        <label class="label" for="confirm-password">
                            <span class="label-text">{"Confirm password"}</span>
                        </label>
                        <input
                            id="confirm-password"
                            class={classes!("input", "input-bordered", confirm_error.is_some().then_some("input-error"))}
                            type="password"
                            value={(*confirm_password).clone()}
                            oninput={text_input(&confirm_password)}
                            onblur={on_confirm_blur}
                        />
                        <label class="label">{ field_error(&confirm_error) }</label>
                    </div>
                    <div class="form-control">
                        <label class="label cursor-pointer justify-start gap-3">
                            <input
                                type="checkbox"
                                class="checkbox checkbox-primary"
                                checked={*terms_accepted}
                                onchange={on_terms_change}
                            />
                            <span class="label-text">{"I accept the terms of service"}</span>
                        </label>
                        <label class="label">{ field_error(&terms_error) }</label>
                    </div>
                    <div class="form-control mt-4">
                        <button class="btn btn-primary" type="submit" disabled={is_busy}>
                            {if is_busy { "Creating account..." } else { "Create account" }}
                        </button>
                    </div>
                    <p class="text-sm text-center mt-2">
                        {"Already have an account? "}
                        <Link<MainRoute> to={MainRoute::Login} classes="link link-primary">
                            {"Sign in"}
                        </Link<MainRoute>>
                    </p>
                </form>
            </div>
        </div>
    }
}

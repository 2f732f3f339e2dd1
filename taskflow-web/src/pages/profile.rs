use crate::{
    api::ApiClient,
    auth_flow,
    components::{FetchError, Loading, StatCard, ToastLevel, Toasts, push_toast},
    config::FrontendConfig,
    models::{AppState, FetchState},
    pages::auth_validation::validate_password,
    session::SessionStore,
    stats,
};
use shared::models::{
    ChangePasswordRequest, ProfileResponse, UpdateProfileRequest, UserProfile, UserStats,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_icons::IconId;
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_store;

/// Account page: profile details, account stats, password change and
/// account deletion.
///
/// Profile edits go through the PUT endpoint and the confirmed result is
/// written back into the session store, keeping the cached `user` blob in
/// step with the server. Deleting the account asks once for confirmation
/// and then signs out locally regardless of what was cached.
#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let state = use_state(|| FetchState::<ProfileResponse>::Loading);
    let attempt = use_state(|| 0u32);
    let navigator = use_navigator();
    let (_, dispatch) = use_store::<AppState>();

    {
        let state = state.clone();
        let navigator = navigator.clone();
        let dispatch = dispatch.clone();
        use_effect_with(*attempt, move |_| {
            state.set(FetchState::Loading);
            spawn_local(async move {
                let client = ApiClient::shared();
                match client.profile().await {
                    Ok(response) => state.set(FetchState::Ready(response)),
                    Err(err) if err.is_unauthorized() => {
                        auth_flow::expire_to_login(&dispatch, navigator.as_ref());
                    }
                    Err(err) => state.set(FetchState::Failed(err)),
                }
            });
            || ()
        });
    }

    let on_retry = {
        let attempt = attempt.clone();
        Callback::from(move |()| attempt.set(*attempt + 1))
    };

    match &*state {
        FetchState::Loading => html! { <Loading /> },
        FetchState::Failed(err) => html! {
            <FetchError message={err.to_string()} on_retry={on_retry} />
        },
        FetchState::Ready(response) => html! {
            <div class="space-y-6">
                <h1 class="text-2xl font-bold">{"Profile"}</h1>
                { render_stats(&response.stats) }
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                    <ProfileForm user={response.user.clone()} />
                    <div class="space-y-6">
                        <ChangePasswordForm />
                        <DeleteAccountCard />
                    </div>
                </div>
            </div>
        },
    }
}

fn render_stats(user_stats: &UserStats) -> Html {
    html! {
        <div class="stats shadow w-full">
            <StatCard
                title="Tasks created"
                value={user_stats.tasks_created.to_string()}
                icon={IconId::HeroiconsOutlinePencilSquare}
            />
            <StatCard
                title="Tasks completed"
                value={user_stats.tasks_completed.to_string()}
                icon={IconId::HeroiconsOutlineCheckCircle}
                accent="text-success"
            />
            <StatCard
                title="Study time"
                value={stats::minutes_label(user_stats.study_minutes)}
                icon={IconId::HeroiconsOutlineAcademicCap}
                accent="text-info"
            />
            <StatCard
                title="Member since"
                value={user_stats.member_since.format("%b %Y").to_string()}
                icon={IconId::HeroiconsOutlineCalendarDays}
                accent="text-secondary"
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ProfileFormProps {
    user: UserProfile,
}

#[function_component(ProfileForm)]
fn profile_form(props: &ProfileFormProps) -> Html {
    let name = use_state(|| props.user.name.clone());
    let university = use_state(|| props.user.university.clone().unwrap_or_default());
    let major = use_state(|| props.user.major.clone().unwrap_or_default());
    let year_of_study = use_state(|| props.user.year_of_study);
    let bio = use_state(|| props.user.bio.clone().unwrap_or_default());
    let is_saving = use_state(|| false);
    let (_, dispatch) = use_store::<AppState>();
    let (_, toast_dispatch) = use_store::<Toasts>();

    let onsubmit = {
        let name = name.clone();
        let university = university.clone();
        let major = major.clone();
        let year_of_study = year_of_study.clone();
        let bio = bio.clone();
        let is_saving = is_saving.clone();
        let dispatch = dispatch.clone();
        let toast_dispatch = toast_dispatch.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if name.trim().is_empty() {
                push_toast(&toast_dispatch, ToastLevel::Error, "Name cannot be empty");
                return;
            }

            is_saving.set(true);
            let optional = |value: &str| {
                let trimmed = value.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            };
            let request = UpdateProfileRequest {
                name: Some((*name).clone()),
                university: optional(&university),
                major: optional(&major),
                year_of_study: *year_of_study,
                bio: optional(&bio),
            };
            let is_saving = is_saving.clone();
            let dispatch = dispatch.clone();
            let toast_dispatch = toast_dispatch.clone();
            spawn_local(async move {
                let client = ApiClient::shared();
                match client.update_profile(&request).await {
                    Ok(response) => {
                        // The server's copy wins; mirror it into storage and
                        // the shared state so the header updates too.
                        SessionStore::update_user(&response.user);
                        dispatch.reduce_mut(|app_state| {
                            if let Some(session) = &mut app_state.session {
                                session.user = Some(response.user.clone());
                            }
                        });
                        push_toast(&toast_dispatch, ToastLevel::Success, "Profile saved");
                    }
                    Err(err) => {
                        push_toast(&toast_dispatch, ToastLevel::Error, err.to_string());
                    }
                }
                is_saving.set(false);
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

    let on_year_change = {
        let year_of_study = year_of_study.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                year_of_study.set(input.value().parse::<u8>().ok());
            }
        })
    };

    let on_bio_change = {
        let bio = bio.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlTextAreaElement>() {
                bio.set(input.value());
            }
        })
    };

    html! {
        <div class="card bg-base-200 shadow-xl">
            <form class="card-body" onsubmit={onsubmit}>
                <h2 class="card-title">{"Details"}</h2>
                <div class="form-control">
                    <label class="label" for="profile-name">
                        <span class="label-text">{"Name"}</span>
                    </label>
                    <input
                        id="profile-name"
                        class="input input-bordered"
                        type="text"
                        value={(*name).clone()}
                        oninput={text_input(&name)}
                    />
                </div>
                <div class="form-control">
                    <label class="label" for="profile-email">
                        <span class="label-text">{"Email"}</span>
                    </label>
                    <input
                        id="profile-email"
                        class="input input-bordered"
                        type="email"
                        value={props.user.email.clone()}
                        disabled=true
                    />
                </div>
                <div class="form-control">
                    <label class="label" for="profile-university">
                        <span class="label-text">{"University"}</span>
                    </label>
                    <input
                        id="profile-university"
                        class="input input-bordered"
                        type="text"
                        value={(*university).clone()}
                        oninput={text_input(&university)}
                    />
                </div>
                <div class="grid grid-cols-2 gap-4">
                    <div class="form-control">
                        <label class="label" for="profile-major">
                            <span class="label-text">{"Major"}</span>
                        </label>
                        <input
                            id="profile-major"
                            class="input input-bordered"
                            type="text"
                            value={(*major).clone()}
                            oninput={text_input(&major)}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="profile-year">
                            <span class="label-text">{"Year of study"}</span>
                        </label>
                        <input
                            id="profile-year"
                            class="input input-bordered"
                            type="number"
                            min="1"
                            max="10"
                            value={year_of_study.map(|year| year.to_string()).unwrap_or_default()}
                            oninput={on_year_change}
                        />
                    </div>
                </div>
                <div class="form-control">
                    <label class="label" for="profile-bio">
                        <span class="label-text">{"Bio"}</span>
                    </label>
                    <textarea
                        id="profile-bio"
                        class="textarea textarea-bordered"
                        rows="3"
                        value={(*bio).clone()}
                        oninput={on_bio_change}
                    />
                </div>
                <div class="card-actions justify-end mt-2">
                    <button class="btn btn-primary" type="submit" disabled={*is_saving}>
                        {if *is_saving { "Saving..." } else { "Save changes" }}
                    </button>
                </div>
            </form>
        </div>
    }
}

#[function_component(ChangePasswordForm)]
fn change_password_form() -> Html {
    let current_password = use_state(String::new);
    let new_password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let is_saving = use_state(|| false);
    let (_, toast_dispatch) = use_store::<Toasts>();

    let onsubmit = {
        let current_password = current_password.clone();
        let new_password = new_password.clone();
        let error = error.clone();
        let is_saving = is_saving.clone();
        let toast_dispatch = toast_dispatch.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if current_password.is_empty() {
                error.set(Some("Enter your current password".to_string()));
                return;
            }
            if let Err(validation) = validate_password(&new_password) {
                error.set(Some(validation.message().to_string()));
                return;
            }

            is_saving.set(true);
            error.set(None);
            let request = ChangePasswordRequest {
                current_password: (*current_password).clone(),
                new_password: (*new_password).clone(),
            };
            let current_password = current_password.clone();
            let new_password = new_password.clone();
            let error = error.clone();
            let is_saving = is_saving.clone();
            let toast_dispatch = toast_dispatch.clone();
            spawn_local(async move {
                let client = ApiClient::shared();
                match client.change_password(&request).await {
                    Ok(_) => {
                        current_password.set(String::new());
                        new_password.set(String::new());
                        push_toast(&toast_dispatch, ToastLevel::Success, "Password changed");
                    }
                    Err(err) => {
                        error.set(Some(err.to_string()));
                    }
                }
                is_saving.set(false);
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

    html! {
        <div class="card bg-base-200 shadow-xl">
            <form class="card-body" onsubmit={onsubmit}>
                <h2 class="card-title">{"Change password"}</h2>
                if let Some(message) = &*error {
                    <div class="alert alert-error">
                        <span>{message.clone()}</span>
                    </div>
                }
                <div class="form-control">
                    <label class="label" for="current-password">
                        <span class="label-text">{"Current password"}</span>
                    </label>
                    <input
                        id="current-password"
                        class="input input-bordered"
                        type="password"
                        value={(*current_password).clone()}
                        oninput={text_input(&current_password)}
                    />
                </div>
                <div class="form-control">
                    <label class="label" for="new-password">
                        <span class="label-text">{"New password"}</span>
                    </label>
                    <input
                        id="new-password"
                        class="input input-bordered"
                        type="password"
                        value={(*new_password).clone()}
                        oninput={text_input(&new_password)}
                    />
                </div>
                <div class="card-actions justify-end mt-2">
                    <button class="btn btn-secondary" type="submit" disabled={*is_saving}>
                        {if *is_saving { "Updating..." } else { "Update password" }}
                    </button>
                </div>
            </form>
        </div>
    }
}

#[function_component(DeleteAccountCard)]
fn delete_account_card() -> Html {
    let support_email = FrontendConfig::new().support_email;
    let armed = use_state(|| false);
    let is_deleting = use_state(|| false);
    let navigator = use_navigator();
    let (_, dispatch) = use_store::<AppState>();
    let (_, toast_dispatch) = use_store::<Toasts>();

    let onclick = {
        let armed = armed.clone();
        let is_deleting = is_deleting.clone();
        let navigator = navigator;
        let dispatch = dispatch;
        let toast_dispatch = toast_dispatch;
        Callback::from(move |_: MouseEvent| {
            // First click arms the button, second click deletes.
            if !*armed {
                armed.set(true);
                return;
            }

            is_deleting.set(true);
            let armed = armed.clone();
            let is_deleting = is_deleting.clone();
            let navigator = navigator.clone();
            let dispatch = dispatch.clone();
            let toast_dispatch = toast_dispatch.clone();
            spawn_local(async move {
                let client = ApiClient::shared();
                match client.delete_account().await {
                    Ok(_) => {
                        auth_flow::sign_out(&dispatch, navigator.as_ref());
                    }
                    Err(err) => {
                        push_toast(&toast_dispatch, ToastLevel::Error, err.to_string());
                        armed.set(false);
                    }
                }
                is_deleting.set(false);
            });
        })
    };

    html! {
        <div class="card bg-base-200 shadow-xl border border-error/40">
            <div class="card-body">
                <h2 class="card-title text-error">{"Danger zone"}</h2>
                <p class="text-sm text-base-content/70">
                    {"Deleting your account removes all tasks, analytics and recommendations. This cannot be undone."}
                </p>
                <p class="text-xs text-base-content/60">
                    {"Having trouble instead? Write to "}
                    <a href={format!("mailto:{support_email}")} class="link">
                        { support_email.clone() }
                    </a>
                </p>
                <div class="card-actions justify-end mt-2">
                    <button
                        class={classes!("btn", "btn-error", (!*armed).then_some("btn-outline"))}
                        onclick={onclick}
                        disabled={*is_deleting}
                    >
                        {
                            if *is_deleting {
                                "Deleting..."
                            } else if *armed {
                                "Click again to confirm"
                            } else {
                                "Delete account"
                            }
                        }
                    </button>
                </div>
            </div>
        </div>
    }
}

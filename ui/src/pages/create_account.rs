use std::collections::HashMap;

use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::Route;
use crate::auth::dispatch_registration;
use crate::components::AuthFailureMessage;
use crate::contexts::use_toast;
use crate::forms::{FieldErrors, register};
use crate::hooks::{use_query_params, use_title};
use crate::state::RegistrationState;
use crate::utils::{current_search, merge_path_with_query};

const INPUT_CLASSES: &str = "w-full px-3 py-2 border border-neutral-300 \
     dark:border-neutral-600 rounded-md shadow-sm bg-white \
     dark:bg-neutral-700 text-neutral-900 dark:text-neutral-100 \
     focus:outline-none focus:ring-2 focus:ring-neutral-500 \
     focus:border-neutral-500 dark:focus:ring-neutral-400 \
     dark:focus:border-neutral-400";

fn field_error_text(errors: &FieldErrors, field: &str) -> Html {
    match errors.get(field) {
        Some(message) => html! {
            <p class="mt-1 text-sm text-red-600 dark:text-red-400">
                {message}
            </p>
        },
        None => html! {},
    }
}

#[function_component]
pub fn CreateAccountPage() -> Html {
    use_title("Create an account - Sprout");
    let navigator = use_navigator().unwrap();
    let toast = use_toast();
    let (registration_state, registration_dispatch) =
        use_store::<RegistrationState>();
    let query_params = use_query_params();

    let fields = use_state(register::Fields::default);
    let field_errors = use_state(FieldErrors::new);
    let show_password = use_state(|| false);

    // A stale result from a previous visit must not trigger a redirect.
    {
        let registration_dispatch = registration_dispatch.clone();
        use_effect_with((), move |_| {
            registration_dispatch.reduce_mut(|state| state.flow.reset());
        });
    }

    // Backend field errors merge into the local map as they arrive.
    {
        let field_errors = field_errors.clone();
        let backend_errors = registration_state.flow.field_errors.clone();
        use_effect_with(backend_errors, move |backend_errors| {
            if !backend_errors.is_empty() {
                let mut merged = (*field_errors).clone();
                merged.extend(backend_errors.clone());
                field_errors.set(merged);
            }
        });
    }

    // Redirect once the store reports success.
    {
        let navigator = navigator.clone();
        let toast = toast.clone();
        let query_params = query_params.clone();
        let result = registration_state.flow.result.clone();
        use_effect_with(result, move |result| {
            let Some(outcome) = result else { return };
            if !outcome.success {
                return;
            }

            toast.success("Account created successfully!");
            if let Some(redirect_url) = &outcome.redirect_url {
                let destination =
                    merge_path_with_query(redirect_url, &current_search());
                tracing::info!(
                    %destination,
                    "registration redirect (backend)"
                );
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href(&destination);
                }
            } else if query_params.is_empty() {
                navigator.replace(&Route::Dashboard);
            } else {
                let params: HashMap<String, String> =
                    query_params.iter().cloned().collect();
                let _ = navigator
                    .replace_with_query(&Route::Dashboard, &params);
            }
        });
    }

    // Editing a field clears its error, both locally and in the store.
    let make_edit = {
        let fields = fields.clone();
        let field_errors = field_errors.clone();
        let registration_dispatch = registration_dispatch.clone();
        move |field: &'static str,
              apply: fn(&mut register::Fields, String)| {
            let fields = fields.clone();
            let field_errors = field_errors.clone();
            let registration_dispatch = registration_dispatch.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                let mut next = (*fields).clone();
                apply(&mut next, input.value());
                fields.set(next);

                if field_errors.contains_key(field) {
                    let mut cleared = (*field_errors).clone();
                    cleared.remove(field);
                    field_errors.set(cleared);
                }
                registration_dispatch
                    .reduce_mut(|state| state.flow.clear_field_error(field));
            })
        }
    };
    let on_name_input =
        make_edit("name", |fields, value| fields.name = value);
    let on_username_input =
        make_edit("username", |fields, value| fields.username = value);
    let on_email_input =
        make_edit("email", |fields, value| fields.email = value);
    let on_password_input =
        make_edit("password", |fields, value| fields.password = value);

    let on_terms_change = {
        let fields = fields.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*fields).clone();
            next.terms_accepted = input.checked();
            fields.set(next);
        })
    };

    let toggle_password = {
        let show_password = show_password.clone();
        Callback::from(move |_: MouseEvent| {
            show_password.set(!*show_password);
        })
    };

    let on_submit = {
        let fields = fields.clone();
        let field_errors = field_errors.clone();
        let toast = toast.clone();
        let registration_dispatch = registration_dispatch.clone();
        let query_params = query_params.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let current = (*fields).clone();
            if !current.terms_accepted {
                toast.error(
                    "Please agree to the terms of service and privacy \
                     policy.",
                );
                return;
            }

            match current.prepare(&query_params) {
                Ok(request) => {
                    field_errors.set(FieldErrors::new());
                    dispatch_registration(
                        registration_dispatch.clone(),
                        request,
                    );
                }
                Err(errors) => {
                    field_errors.set(errors);
                    toast.error("Please correct the errors in the form.");
                }
            }
        })
    };

    let is_pending = registration_state.flow.is_pending();
    let password_type = if *show_password { "text" } else { "password" };

    html! {
        <div class="flex flex-col items-center min-h-screen px-4 py-10">
            <div class="max-w-md w-full space-y-6">
                <div class="text-center">
                    <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100 mb-2">
                        {"Create an account"}
                    </h1>
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {"Join Sprout to get started"}
                    </p>
                </div>

                if let Some(error_code) = registration_state.flow.error_code {
                    <AuthFailureMessage
                        {error_code}
                        context={registration_state.flow.error_context.clone()}
                    />
                }

                <form onsubmit={on_submit} class="space-y-4">
                    <div>
                        <label for="name" class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                            {"Full name"}
                        </label>
                        <input
                            type="text"
                            id="name"
                            name="name"
                            autocomplete="name"
                            class={INPUT_CLASSES}
                            placeholder="Enter your full name"
                            value={fields.name.clone()}
                            oninput={on_name_input}
                            disabled={is_pending}
                        />
                        {field_error_text(&field_errors, "name")}
                    </div>

                    <div>
                        <label for="username" class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                            {"Username"}
                        </label>
                        <input
                            type="text"
                            id="username"
                            name="username"
                            autocomplete="username"
                            class={INPUT_CLASSES}
                            placeholder="Choose a username"
                            value={fields.username.clone()}
                            oninput={on_username_input}
                            disabled={is_pending}
                        />
                        {field_error_text(&field_errors, "username")}
                    </div>

                    <div>
                        <label for="email" class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                            {"Email"}
                        </label>
                        <input
                            type="email"
                            id="email"
                            name="email"
                            autocomplete="email"
                            class={INPUT_CLASSES}
                            placeholder="Enter your email"
                            value={fields.email.clone()}
                            oninput={on_email_input}
                            disabled={is_pending}
                        />
                        {field_error_text(&field_errors, "email")}
                    </div>

                    <div>
                        <label for="password" class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                            {"Password"}
                        </label>
                        <div class="relative">
                            <input
                                type={password_type}
                                id="password"
                                name="password"
                                autocomplete="new-password"
                                class={INPUT_CLASSES}
                                placeholder="Choose a password"
                                value={fields.password.clone()}
                                oninput={on_password_input}
                                disabled={is_pending}
                            />
                            <button
                                type="button"
                                onclick={toggle_password}
                                class="absolute inset-y-0 right-3 text-sm text-neutral-600 dark:text-neutral-400 hover:text-neutral-900 dark:hover:text-neutral-100"
                            >
                                {if *show_password { "Hide" } else { "Show" }}
                            </button>
                        </div>
                        {field_error_text(&field_errors, "password")}
                    </div>

                    <div class="flex items-center gap-2 text-sm text-neutral-700 dark:text-neutral-300">
                        <input
                            type="checkbox"
                            id="terms"
                            checked={fields.terms_accepted}
                            onchange={on_terms_change}
                            disabled={is_pending}
                        />
                        <label for="terms">
                            {"I agree to the "}
                            <a href="/terms" target="_blank" rel="noopener noreferrer" class="underline font-medium">
                                {"terms of service"}
                            </a>
                            {" and "}
                            <a href="/privacy" target="_blank" rel="noopener noreferrer" class="underline font-medium">
                                {"privacy policy"}
                            </a>
                        </label>
                    </div>

                    <button
                        type="submit"
                        disabled={is_pending}
                        class="w-full flex justify-center py-2 px-4 border border-transparent rounded-md shadow-sm text-sm font-medium text-white bg-neutral-900 hover:bg-neutral-800 dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-neutral-500 disabled:opacity-50 disabled:cursor-not-allowed transition-colors duration-200"
                    >
                        if is_pending {
                            {"Creating account..."}
                        } else {
                            {"Create account"}
                        }
                    </button>
                </form>

                <p class="text-center text-sm text-neutral-600 dark:text-neutral-400">
                    {"Already have an account? "}
                    <Link<Route> to={Route::Login} classes="text-neutral-900 dark:text-neutral-100 hover:text-neutral-700 dark:hover:text-neutral-300 font-medium underline">
                        {"Sign in"}
                    </Link<Route>>
                </p>
            </div>
        </div>
    }
}

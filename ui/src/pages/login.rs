use std::collections::HashMap;

use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::Route;
use crate::accounts::{SeedAccounts, default_dashboard};
use crate::auth::dispatch_login;
use crate::components::{AccountPicker, AuthFailureMessage};
use crate::contexts::use_toast;
use crate::forms::{FieldErrors, login};
use crate::hooks::{use_query_params, use_title};
use crate::state::LoginState;
use crate::utils::{current_search, is_dev_mode, merge_path_with_query};

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
pub fn LoginPage() -> Html {
    use_title("Sign in - Sprout");
    let navigator = use_navigator().unwrap();
    let toast = use_toast();
    let (login_state, login_dispatch) = use_store::<LoginState>();
    let query_params = use_query_params();

    let fields = use_state(login::Fields::default);
    let field_errors = use_state(FieldErrors::new);

    // A stale result from a previous visit must not trigger a redirect.
    {
        let login_dispatch = login_dispatch.clone();
        use_effect_with((), move |_| {
            login_dispatch.reduce_mut(|state| state.flow.reset());
        });
    }

    // Backend field errors merge into the local map as they arrive.
    {
        let field_errors = field_errors.clone();
        let backend_errors = login_state.flow.field_errors.clone();
        use_effect_with(backend_errors, move |backend_errors| {
            if !backend_errors.is_empty() {
                let mut merged = (*field_errors).clone();
                merged.extend(backend_errors.clone());
                field_errors.set(merged);
            }
        });
    }

    // Redirect once the store reports success. Backend-supplied
    // destinations may leave the app and get a full document load; the
    // local default stays on the in-app router.
    {
        let navigator = navigator.clone();
        let snapshot = (*fields).clone();
        let query_params = query_params.clone();
        let result = login_state.flow.result.clone();
        use_effect_with(result, move |result| {
            let Some(outcome) = result else { return };
            if !outcome.success {
                return;
            }

            if let Some(redirect_url) = &outcome.redirect_url {
                let destination =
                    merge_path_with_query(redirect_url, &current_search());
                tracing::info!(%destination, "login redirect (backend)");
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href(&destination);
                }
            } else {
                let route =
                    default_dashboard(snapshot.role, snapshot.account_id);
                tracing::info!(?route, "login redirect (local default)");
                if query_params.is_empty() {
                    navigator.replace(&route);
                } else {
                    let params: HashMap<String, String> =
                        query_params.iter().cloned().collect();
                    let _ = navigator.replace_with_query(&route, &params);
                }
            }
        });
    }

    let on_select_role = {
        let fields = fields.clone();
        let field_errors = field_errors.clone();
        Callback::from(move |role| {
            let mut next = (*fields).clone();
            next.select_role(role, &SeedAccounts);
            fields.set(next);
            field_errors.set(FieldErrors::new());
        })
    };

    let on_select_account = {
        let fields = fields.clone();
        let field_errors = field_errors.clone();
        Callback::from(move |account| {
            let mut next = (*fields).clone();
            next.select_account(&account);
            fields.set(next);
            field_errors.set(FieldErrors::new());
        })
    };

    // Editing a field clears its error, both locally and in the store.
    let make_edit = {
        let fields = fields.clone();
        let field_errors = field_errors.clone();
        let login_dispatch = login_dispatch.clone();
        move |field: &'static str,
              apply: fn(&mut login::Fields, String)| {
            let fields = fields.clone();
            let field_errors = field_errors.clone();
            let login_dispatch = login_dispatch.clone();
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
                login_dispatch
                    .reduce_mut(|state| state.flow.clear_field_error(field));
            })
        }
    };
    let on_username_input =
        make_edit("username", |fields, value| fields.username = value);
    let on_password_input =
        make_edit("password", |fields, value| fields.password = value);

    let on_submit = {
        let fields = fields.clone();
        let field_errors = field_errors.clone();
        let toast = toast.clone();
        let login_dispatch = login_dispatch.clone();
        let query_params = query_params.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let current = (*fields).clone();
            if current.role.is_none() {
                toast.error("Please select your role first.");
                return;
            }
            if current.account_id.is_none() {
                toast.error("Please select an account profile.");
                return;
            }

            match current.prepare(&query_params) {
                Ok(request) => {
                    field_errors.set(FieldErrors::new());
                    dispatch_login(login_dispatch.clone(), request);
                }
                Err(errors) => {
                    field_errors.set(errors);
                    toast.error("Please enter your username and password.");
                }
            }
        })
    };

    let is_pending = login_state.flow.is_pending();
    let show_form =
        fields.role.is_some() && fields.account_id.is_some();

    html! {
        <div class="flex flex-col items-center min-h-screen px-4 py-10">
            <div class="max-w-md w-full space-y-6">
                <div class="text-center">
                    <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100 mb-2">
                        {"Select your account"}
                    </h1>
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {"Choose who is signing in to Sprout"}
                    </p>
                </div>

                if let Some(error_code) = login_state.flow.error_code {
                    <AuthFailureMessage
                        {error_code}
                        context={login_state.flow.error_context.clone()}
                    />
                }

                <AccountPicker
                    selected_role={fields.role}
                    selected_account={fields.account_id}
                    {on_select_role}
                    {on_select_account}
                />

                if show_form {
                    <form onsubmit={on_submit} class="space-y-4">
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
                                placeholder="Enter your username"
                                value={fields.username.clone()}
                                oninput={on_username_input}
                                disabled={is_pending}
                            />
                            {field_error_text(&field_errors, "username")}
                        </div>

                        <div>
                            <label for="password" class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                                {"Password"}
                            </label>
                            <input
                                type="password"
                                id="password"
                                name="password"
                                autocomplete="current-password"
                                class={INPUT_CLASSES}
                                placeholder="Enter your password"
                                value={fields.password.clone()}
                                oninput={on_password_input}
                                disabled={is_pending}
                            />
                            {field_error_text(&field_errors, "password")}
                        </div>

                        <button
                            type="submit"
                            disabled={is_pending}
                            class="w-full flex justify-center py-2 px-4 border border-transparent rounded-md shadow-sm text-sm font-medium text-white bg-neutral-900 hover:bg-neutral-800 dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-neutral-500 disabled:opacity-50 disabled:cursor-not-allowed transition-colors duration-200"
                        >
                            if is_pending {
                                {"Signing in..."}
                            } else {
                                {"Sign in"}
                            }
                        </button>
                    </form>
                }

                <p class="text-center text-sm text-neutral-600 dark:text-neutral-400">
                    <Link<Route> to={Route::CreateAccount} classes="text-neutral-900 dark:text-neutral-100 hover:text-neutral-700 dark:hover:text-neutral-300 font-medium underline">
                        {"Add new account"}
                    </Link<Route>>
                </p>

                if is_dev_mode() {
                    <p class="text-center text-sm text-neutral-600 dark:text-neutral-400">
                        {"Development build: profiles come from the local seed roster."}
                    </p>
                }
            </div>
        </div>
    }
}

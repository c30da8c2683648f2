use payloads::APIClient;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod accounts;
pub mod auth;
pub mod components;
pub mod contexts;
pub mod forms;
pub mod hooks;
mod logs;
pub mod pages;
pub mod state;
pub mod utils;

use components::ToastContainer;
use contexts::toast::ToastProvider;
use pages::{
    CreateAccountPage, DashboardPage, LoginPage, NotFoundPage,
    ParentDashboardPage,
};

// Global API client - configurable via environment or same-origin fallback
pub fn get_api_client() -> APIClient {
    // Try environment variable first (set at build time)
    let address = option_env!("BACKEND_URL")
        .map(|url| url.to_string())
        .unwrap_or_else(|| {
            // Fallback to same origin (current setup)
            let window = web_sys::window().unwrap();
            let location = window.location();
            location.origin().unwrap()
        });

    APIClient {
        address,
        inner_client: reqwest::Client::new(),
    }
}

#[function_component]
pub fn App() -> Html {
    logs::init_logging();
    html! {
        <BrowserRouter>
            <ToastProvider>
                <div class="min-h-screen bg-neutral-50 dark:bg-neutral-900 text-neutral-900 dark:text-neutral-100 transition-colors">
                    <Switch<Route> render={switch} />
                </div>
                <ToastContainer />
            </ToastProvider>
        </BrowserRouter>
    }
}

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/create-account")]
    CreateAccount,
    #[at("/dashboard")]
    Dashboard,
    #[at("/parent-dashboard")]
    ParentDashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Redirect<Route> to={Route::Login} /> },
        Route::Login => html! { <LoginPage /> },
        Route::CreateAccount => html! { <CreateAccountPage /> },
        Route::Dashboard => html! { <DashboardPage /> },
        Route::ParentDashboard => html! { <ParentDashboardPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::hooks::use_title;

#[function_component]
pub fn NotFoundPage() -> Html {
    use_title("Page not found - Sprout");

    html! {
        <main class="max-w-3xl mx-auto px-4 py-16 text-center">
            <h1 class="text-4xl font-bold text-neutral-900 dark:text-neutral-100">
                {"404"}
            </h1>
            <p class="text-neutral-600 dark:text-neutral-400 mb-6">
                {"Page not found"}
            </p>
            <Link<Route> to={Route::Login} classes="text-neutral-900 dark:text-neutral-100 font-medium underline">
                {"Back to sign in"}
            </Link<Route>>
        </main>
    }
}

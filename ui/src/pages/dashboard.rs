use yew::prelude::*;

use crate::hooks::use_title;

// Placeholder destinations. The host platform owns the dashboard content;
// the account screens only need routable targets to land on.

#[function_component]
pub fn DashboardPage() -> Html {
    use_title("Dashboard - Sprout");

    html! {
        <main class="max-w-3xl mx-auto px-4 py-16 text-center">
            <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100 mb-2">
                {"Dashboard"}
            </h1>
            <p class="text-neutral-600 dark:text-neutral-400">
                {"You are signed in."}
            </p>
        </main>
    }
}

#[function_component]
pub fn ParentDashboardPage() -> Html {
    use_title("Parent dashboard - Sprout");

    html! {
        <main class="max-w-3xl mx-auto px-4 py-16 text-center">
            <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100 mb-2">
                {"Parent dashboard"}
            </h1>
            <p class="text-neutral-600 dark:text-neutral-400">
                {"You are signed in as a parent."}
            </p>
        </main>
    }
}

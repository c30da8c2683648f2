use yew::prelude::*;

use crate::accounts::{
    AccountDirectory, AccountProfile, Role, SeedAccounts,
};

#[derive(Properties, PartialEq)]
pub struct AccountPickerProps {
    pub selected_role: Option<Role>,
    pub selected_account: Option<&'static str>,
    pub on_select_role: Callback<Role>,
    pub on_select_account: Callback<AccountProfile>,
}

/// Role buttons plus the filtered account-profile grid. Selection state is
/// owned by the login page; this component only renders and reports clicks.
#[function_component]
pub fn AccountPicker(props: &AccountPickerProps) -> Html {
    let directory = SeedAccounts;

    let role_button = |role: Role| {
        let selected = props.selected_role == Some(role);
        let onclick = props.on_select_role.reform(move |_: MouseEvent| role);
        let classes = if selected {
            "flex-1 py-3 px-4 rounded-xl border-2 border-neutral-900 \
             dark:border-neutral-100 bg-neutral-900 text-white \
             dark:bg-neutral-100 dark:text-neutral-900 font-medium \
             transition-colors"
        } else {
            "flex-1 py-3 px-4 rounded-xl border-2 border-neutral-300 \
             dark:border-neutral-600 bg-white dark:bg-neutral-800 \
             text-neutral-700 dark:text-neutral-300 font-medium \
             hover:border-neutral-500 transition-colors"
        };
        html! {
            <button type="button" class={classes} {onclick}>
                {role.label()}
            </button>
        }
    };

    html! {
        <div class="space-y-4">
            <div class="flex gap-4">
                {role_button(Role::Parent)}
                {role_button(Role::Child)}
            </div>

            if let Some(role) = props.selected_role {
                <div class="grid grid-cols-2 gap-4 min-h-[8rem]">
                    {for directory.for_role(role).into_iter().map(|account| {
                        let account = *account;
                        let selected =
                            props.selected_account == Some(account.id);
                        let onclick = props
                            .on_select_account
                            .reform(move |_: MouseEvent| account);
                        html! {
                            <div
                                key={account.id}
                                class="relative rounded-2xl p-4 min-h-[7.5rem] flex flex-col items-center justify-center text-white text-center cursor-pointer shadow-md hover:shadow-lg transition-shadow"
                                style={format!("background-color: {}", account.card_color)}
                                {onclick}
                            >
                                if selected {
                                    <span class="absolute top-2 right-2 h-6 w-6 rounded-full bg-white text-neutral-900 flex items-center justify-center text-sm">
                                        {"✓"}
                                    </span>
                                }
                                <img
                                    src={account.avatar_url}
                                    alt={account.name}
                                    class="w-12 h-12 rounded-full object-cover mb-2 border-2 border-white/50"
                                />
                                <span class="text-sm font-medium">
                                    {account.name}
                                </span>
                            </div>
                        }
                    })}
                </div>
            }
        </div>
    }
}

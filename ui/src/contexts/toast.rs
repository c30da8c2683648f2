use std::collections::HashMap;
use std::rc::Rc;

use uuid::Uuid;
use yew::prelude::*;

const AUTO_DISMISS_MS: u32 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    pub fn new(message: String, kind: ToastKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            message,
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastState {
    pub toasts: HashMap<Uuid, Toast>,
}

pub enum ToastAction {
    Add(Toast),
    Remove(Uuid),
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();

        match action {
            ToastAction::Add(toast) => {
                toasts.insert(toast.id, toast);
            }
            ToastAction::Remove(id) => {
                toasts.remove(&id);
            }
        }

        Rc::new(ToastState { toasts })
    }
}

pub type ToastContext = UseReducerHandle<ToastState>;

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component]
pub fn ToastProvider(props: &ToastProviderProps) -> Html {
    let toast_state = use_reducer(ToastState::default);

    html! {
        <ContextProvider<ToastContext> context={toast_state}>
            {props.children.clone()}
        </ContextProvider<ToastContext>>
    }
}

/// Handle for raising notifications. Every toast auto-dismisses; the user
/// can also close it early.
#[derive(Clone)]
pub struct ToastHandle {
    context: ToastContext,
}

impl ToastHandle {
    pub fn add(&self, toast: Toast) {
        let toast_id = toast.id;
        let context = self.context.clone();

        self.context.dispatch(ToastAction::Add(toast));

        yew::platform::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(AUTO_DISMISS_MS).await;
            context.dispatch(ToastAction::Remove(toast_id));
        });
    }

    pub fn error(&self, message: impl Into<String>) {
        self.add(Toast::new(message.into(), ToastKind::Error));
    }

    pub fn success(&self, message: impl Into<String>) {
        self.add(Toast::new(message.into(), ToastKind::Success));
    }

    pub fn remove(&self, id: Uuid) {
        self.context.dispatch(ToastAction::Remove(id));
    }
}

#[hook]
pub fn use_toast() -> ToastHandle {
    let context = use_context::<ToastContext>()
        .expect("use_toast must be called inside a ToastProvider");
    ToastHandle { context }
}

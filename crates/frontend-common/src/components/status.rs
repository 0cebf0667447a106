//! Loading and result indicators

use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NoticeKind {
    #[default]
    Error,
    Success,
}

#[derive(Properties, Clone, PartialEq)]
pub struct NoticeProps {
    #[prop_or_default]
    pub kind: NoticeKind,
    /// Nothing is rendered without a message
    #[prop_or_default]
    pub message: Option<String>,
}

#[function_component(Notice)]
pub fn notice(props: &NoticeProps) -> Html {
    let Some(message) = &props.message else {
        return html! {};
    };

    let class = match props.kind {
        NoticeKind::Error => "p-3 mb-4 rounded-md bg-red-50 border border-red-200 text-red-700 text-sm",
        NoticeKind::Success => {
            "p-3 mb-4 rounded-md bg-green-50 border border-green-200 text-green-700 text-sm"
        }
    };

    html! {
        <div class={class} role="alert">{message}</div>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct SpinnerProps {
    #[prop_or(AttrValue::Static("Loading..."))]
    pub text: AttrValue,
    /// Centre in the viewport instead of the surrounding block
    #[prop_or_default]
    pub full_screen: bool,
}

/// Placeholder shown while content or the session is loading
#[function_component(Spinner)]
pub fn spinner(props: &SpinnerProps) -> Html {
    let frame = if props.full_screen {
        "min-h-screen flex flex-col items-center justify-center"
    } else {
        "py-16 flex flex-col items-center"
    };

    html! {
        <div class={frame} role="status" aria-live="polite">
            <span class="h-8 w-8 rounded-full border-2 border-indigo-100 border-t-indigo-600 animate-spin"></span>
            <p class="mt-3 text-sm text-gray-500">{props.text.clone()}</p>
        </div>
    }
}

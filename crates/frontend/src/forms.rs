//! Form input helpers

use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

/// Callback storing the value of a text input into a state handle
pub fn bind_input(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        state.set(input.value());
    })
}

/// Callback storing the value of a textarea into a state handle
pub fn bind_textarea(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlTextAreaElement = e.target_unchecked_into();
        state.set(input.value());
    })
}

/// Callback mapping a text input's value into a form struct
pub fn update_field<T, F>(form: &UseStateHandle<T>, apply: F) -> Callback<InputEvent>
where
    T: Clone + 'static,
    F: Fn(&mut T, String) + 'static,
{
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*form).clone();
        apply(&mut next, input.value());
        form.set(next);
    })
}

/// Callback dispatching a text input's value to a reducer
pub fn reduce_input<R>(
    handle: &UseReducerHandle<R>,
    action: fn(String) -> R::Action,
) -> Callback<InputEvent>
where
    R: Reducible + 'static,
{
    let handle = handle.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        handle.dispatch(action(input.value()));
    })
}

/// Callback dispatching a textarea's value to a reducer
pub fn reduce_textarea<R>(
    handle: &UseReducerHandle<R>,
    action: fn(String) -> R::Action,
) -> Callback<InputEvent>
where
    R: Reducible + 'static,
{
    let handle = handle.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlTextAreaElement = e.target_unchecked_into();
        handle.dispatch(action(input.value()));
    })
}

pub const INPUT_CLASS: &str = "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-indigo-500";
pub const PRIMARY_BUTTON: &str = "px-4 py-2 text-sm font-medium text-white bg-indigo-600 hover:bg-indigo-700 rounded-md disabled:opacity-50";
pub const EDIT_BUTTON: &str = "px-3 py-1 text-sm text-gray-700 hover:bg-gray-100 rounded-md";
pub const DANGER_BUTTON: &str =
    "px-3 py-1 text-sm text-red-600 hover:text-red-800 hover:bg-red-50 rounded-md";

//! Neutral waiting indicator.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpinnerSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl SpinnerSize {
    fn class(self) -> &'static str {
        match self {
            SpinnerSize::Small => "spinner spinner--small",
            SpinnerSize::Medium => "spinner spinner--medium",
            SpinnerSize::Large => "spinner spinner--large",
        }
    }
}

#[component]
pub fn LoadingSpinner(#[prop(optional)] size: SpinnerSize, #[prop(optional)] full_page: bool) -> impl IntoView {
    view! {
        <div class="spinner-wrap" class:spinner-wrap--page=full_page role="status" aria-label="Loading">
            <div class=size.class()></div>
        </div>
    }
}

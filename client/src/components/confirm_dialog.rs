//! Yes/no confirmation modal for destructive actions.

use leptos::prelude::*;

#[component]
pub fn ConfirmDialog(
    title: &'static str,
    message: &'static str,
    #[prop(default = "Delete")] confirm_label: &'static str,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" role="alertdialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                <p class="dialog__danger">{message}</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| on_confirm.run(())>
                        {confirm_label}
                    </button>
                </div>
            </div>
        </div>
    }
}

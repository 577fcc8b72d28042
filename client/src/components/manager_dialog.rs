//! Create/edit modal for a manager account.

use leptos::prelude::*;

use crate::state::managers::{FormMode, ManagerForm, ManagerFormErrors};

/// Validates locally and hands a clean draft to `on_submit`; the page owns
/// the API call and closes the dialog on success.
#[component]
pub fn ManagerDialog(
    mode: FormMode,
    initial: ManagerForm,
    busy: ReadSignal<bool>,
    on_submit: Callback<ManagerForm>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let form = RwSignal::new(initial);
    let errors = RwSignal::new(ManagerFormErrors::default());
    let creating = mode.is_create();

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = form.get_untracked();
        let found = draft.validate(&mode);
        let valid = found.is_empty();
        errors.set(found);
        if valid {
            on_submit.run(draft);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <form class="dialog" on:click=move |ev| ev.stop_propagation() on:submit=submit>
                <h2>{if creating { "Add Manager" } else { "Edit Manager" }}</h2>
                <label class="dialog__label">
                    "Name"
                    <input
                        class="dialog__input"
                        class:dialog__input--error=move || errors.get().name.is_some()
                        type="text"
                        prop:value=move || form.get().name
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                    <FieldError message=Signal::derive(move || errors.get().name)/>
                </label>
                <label class="dialog__label">
                    "Email"
                    <input
                        class="dialog__input"
                        class:dialog__input--error=move || errors.get().email.is_some()
                        type="email"
                        prop:value=move || form.get().email
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                    <FieldError message=Signal::derive(move || errors.get().email)/>
                </label>
                <label class="dialog__label">
                    {if creating { "Password" } else { "New Password (leave blank to keep unchanged)" }}
                    <input
                        class="dialog__input"
                        class:dialog__input--error=move || errors.get().password.is_some()
                        type="password"
                        prop:value=move || form.get().password
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                    <FieldError message=Signal::derive(move || errors.get().password)/>
                </label>
                <div class="dialog__actions">
                    <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {if creating { "Create" } else { "Update" }}
                    </button>
                </div>
            </form>
        </div>
    }
}

/// Inline validation message under a field.
#[component]
pub fn FieldError(message: Signal<Option<&'static str>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <span class="dialog__error">{move || message.get().unwrap_or_default()}</span>
        </Show>
    }
}

//! Create/edit modal for an employer's lead.

use leptos::prelude::*;

use crate::components::manager_dialog::FieldError;
use crate::net::types::{LeadStatus, Manager};
use crate::state::leads::{LeadForm, LeadFormErrors};
use crate::state::managers::FormMode;

#[component]
pub fn LeadDialog(
    mode: FormMode,
    initial: LeadForm,
    managers: Signal<Vec<Manager>>,
    busy: ReadSignal<bool>,
    on_submit: Callback<LeadForm>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let form = RwSignal::new(initial);
    let errors = RwSignal::new(LeadFormErrors::default());
    let creating = mode.is_create();

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = form.get_untracked();
        let found = draft.validate();
        let valid = found.is_empty();
        errors.set(found);
        if valid {
            on_submit.run(draft);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <form class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation() on:submit=submit>
                <h2>{if creating { "Add Lead" } else { "Edit Lead" }}</h2>
                <label class="dialog__label">
                    "Contact Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || form.get().contact_name
                        on:input=move |ev| form.update(|f| f.contact_name = event_target_value(&ev))
                    />
                    <FieldError message=Signal::derive(move || errors.get().contact_name)/>
                </label>
                <label class="dialog__label">
                    "Contact Email"
                    <input
                        class="dialog__input"
                        type="email"
                        prop:value=move || form.get().contact_email
                        on:input=move |ev| form.update(|f| f.contact_email = event_target_value(&ev))
                    />
                    <FieldError message=Signal::derive(move || errors.get().contact_email)/>
                </label>
                <label class="dialog__label">
                    "Company Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || form.get().company_name
                        on:input=move |ev| form.update(|f| f.company_name = event_target_value(&ev))
                    />
                    <FieldError message=Signal::derive(move || errors.get().company_name)/>
                </label>
                <label class="dialog__label">
                    "Status"
                    <select
                        class="dialog__input"
                        prop:value=move || form.get().status.as_str()
                        on:change=move |ev| {
                            if let Some(status) = LeadStatus::parse(&event_target_value(&ev)) {
                                form.update(|f| f.status = status);
                            }
                        }
                    >
                        {LeadStatus::ALL
                            .into_iter()
                            .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label class="dialog__label">
                    "Assigned Manager"
                    <select
                        class="dialog__input"
                        prop:value=move || form.get().manager_id
                        on:change=move |ev| form.update(|f| f.manager_id = event_target_value(&ev))
                    >
                        <option value="">"Unassigned"</option>
                        {move || {
                            managers
                                .get()
                                .into_iter()
                                .map(|m| view! { <option value=m.id>{m.name}</option> })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </label>
                <label class="dialog__label">
                    "Notes"
                    <textarea
                        class="dialog__input dialog__textarea"
                        rows="3"
                        placeholder="Add any additional notes here..."
                        prop:value=move || form.get().notes
                        on:input=move |ev| form.update(|f| f.notes = event_target_value(&ev))
                    ></textarea>
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

//! Manager's status-change modal with an optional note.

use leptos::prelude::*;

use crate::components::status_badge::StatusBadge;
use crate::net::types::LeadStatus;
use crate::state::leads::StatusUpdateForm;

#[component]
pub fn StatusDialog(
    initial: StatusUpdateForm,
    contact_name: String,
    busy: ReadSignal<bool>,
    on_submit: Callback<StatusUpdateForm>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let current = initial.current;
    let form = RwSignal::new(initial);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(form.get_untracked());
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <form class="dialog" on:click=move |ev| ev.stop_propagation() on:submit=submit>
                <h2>"Update Lead Status"</h2>
                <p class="dialog__subtitle">{contact_name}</p>
                <div class="dialog__label">
                    "Current Status"
                    <StatusBadge status=current/>
                </div>
                <label class="dialog__label">
                    "New Status"
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
                    "Note (optional)"
                    <textarea
                        class="dialog__input dialog__textarea"
                        rows="3"
                        placeholder="Add a note about this status change..."
                        prop:value=move || form.get().note
                        on:input=move |ev| form.update(|f| f.note = event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="dialog__actions">
                    <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Update"
                    </button>
                </div>
            </form>
        </div>
    }
}

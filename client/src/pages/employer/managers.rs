//! Employer team page: list, search, create, edit, and delete managers.
//!
//! ERROR HANDLING
//! ==============
//! Failed fetches and mutations raise an error toast and keep the current
//! list. The session is never touched from here.

use leptos::prelude::*;

use crate::app::{AppSession, use_session};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::loading_spinner::{LoadingSpinner, SpinnerSize};
use crate::components::manager_dialog::ManagerDialog;
use crate::net::types::Manager;
use crate::state::managers::{self, FormMode, ManagerForm, ManagersState, initials};
use crate::state::notifications::{NotificationsState, notify_error, notify_success};

#[component]
pub fn ManagersPage() -> impl IntoView {
    let session = use_session();
    let notifications = expect_context::<RwSignal<NotificationsState>>();
    let state = RwSignal::new(ManagersState::loading());
    let editing = RwSignal::new(None::<(FormMode, ManagerForm)>);
    let deleting = RwSignal::new(None::<String>);
    let (busy, set_busy) = signal(false);

    let reload = {
        let session = session.clone();
        Callback::new(move |()| load_managers(&session, state, notifications))
    };
    reload.run(());

    let on_save = {
        let session = session.clone();
        Callback::new(move |form: ManagerForm| {
            let Some((mode, _)) = editing.get_untracked() else {
                return;
            };
            set_busy.set(true);
            save_manager(&session, mode, form, notifications, move |ok| {
                set_busy.set(false);
                if ok {
                    editing.set(None);
                    reload.run(());
                }
            });
        })
    };

    let on_delete = Callback::new(move |()| {
        let Some(id) = deleting.get_untracked() else {
            return;
        };
        deleting.set(None);
        delete_manager(&session, id, notifications, move || reload.run(()));
    });

    let on_cancel_edit = Callback::new(move |()| editing.set(None));
    let on_cancel_delete = Callback::new(move |()| deleting.set(None));

    let rows = move || {
        state
            .get()
            .visible()
            .into_iter()
            .map(|m| manager_row(m, editing, deleting))
            .collect::<Vec<_>>()
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div>
                    <h2>"Managers"</h2>
                    <p class="page__subtitle">"Manage your team members and their access."</p>
                </div>
                <button
                    class="btn btn--primary"
                    on:click=move |_| editing.set(Some((FormMode::Create, ManagerForm::default())))
                >
                    "+ Add Manager"
                </button>
            </div>

            <div class="panel">
                <div class="panel__toolbar">
                    <input
                        class="search-input"
                        type="text"
                        placeholder="Search managers..."
                        prop:value=move || state.get().search
                        on:input=move |ev| state.update(|s| s.search = event_target_value(&ev))
                    />
                    <Show when=move || !state.get().search.is_empty()>
                        <button class="btn search-clear" on:click=move |_| state.update(|s| s.search.clear())>
                            "✕"
                        </button>
                    </Show>
                </div>
                <Show when=move || !state.get().loading fallback=|| view! { <LoadingSpinner size=SpinnerSize::Large/> }>
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Email"</th>
                                <th>"Leads"</th>
                                <th class="table__actions">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show
                                when=move || !state.get().visible().is_empty()
                                fallback=move || view! {
                                    <tr>
                                        <td class="table__empty" colspan="4">{move || state.get().empty_message()}</td>
                                    </tr>
                                }
                            >
                                {rows}
                            </Show>
                        </tbody>
                    </table>
                </Show>
            </div>

            {move || {
                editing
                    .get()
                    .map(|(mode, initial)| {
                        view! {
                            <ManagerDialog
                                mode=mode
                                initial=initial
                                busy=busy
                                on_submit=on_save
                                on_cancel=on_cancel_edit
                            />
                        }
                    })
            }}
            <Show when=move || deleting.get().is_some()>
                <ConfirmDialog
                    title="Delete Manager"
                    message="Are you sure you want to delete this manager?"
                    on_confirm=on_delete
                    on_cancel=on_cancel_delete
                />
            </Show>
        </div>
    }
}

fn manager_row(
    manager: Manager,
    editing: RwSignal<Option<(FormMode, ManagerForm)>>,
    deleting: RwSignal<Option<String>>,
) -> impl IntoView {
    let edit_form = ManagerForm::from_manager(&manager);
    let edit_id = manager.id.clone();
    let delete_id = manager.id.clone();
    view! {
        <tr>
            <td>
                <span class="avatar" aria-hidden="true">{initials(&manager.name)}</span>
                <span class="table__name">{manager.name}</span>
            </td>
            <td>{manager.email}</td>
            <td>{manager.leads_count}</td>
            <td class="table__actions">
                <button
                    class="btn btn--link"
                    on:click=move |_| editing.set(Some((FormMode::Edit(edit_id.clone()), edit_form.clone())))
                >
                    "Edit"
                </button>
                <button class="btn btn--link btn--danger" on:click=move |_| deleting.set(Some(delete_id.clone()))>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}

fn load_managers(session: &AppSession, state: RwSignal<ManagersState>, notifications: RwSignal<NotificationsState>) {
    let mut ticket = 0;
    state.update(|s| ticket = s.begin_load());
    #[cfg(feature = "hydrate")]
    {
        let client = session.client();
        leptos::task::spawn_local(async move {
            let result = client.list_managers().await;
            managers::settle_fetch(state, notifications, ticket, result);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (session, notifications, ticket);
}

fn save_manager(
    session: &AppSession,
    mode: FormMode,
    form: ManagerForm,
    notifications: RwSignal<NotificationsState>,
    done: impl FnOnce(bool) + 'static,
) {
    let payload = form.to_payload();
    #[cfg(feature = "hydrate")]
    {
        let client = session.client();
        leptos::task::spawn_local(async move {
            let (result, verb) = match &mode {
                FormMode::Create => (client.create_manager(&payload).await, "create"),
                FormMode::Edit(id) => (client.update_manager(id, &payload).await, "update"),
            };
            match result {
                Ok(()) => {
                    notify_success(notifications, format!("Manager {verb}d successfully"));
                    done(true);
                }
                Err(err) => {
                    notify_error(notifications, err.user_message(&format!("Failed to {verb} manager")));
                    done(false);
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, mode, payload, notifications);
        done(false);
    }
}

fn delete_manager(
    session: &AppSession,
    id: String,
    notifications: RwSignal<NotificationsState>,
    done: impl FnOnce() + 'static,
) {
    #[cfg(feature = "hydrate")]
    {
        let client = session.client();
        leptos::task::spawn_local(async move {
            match client.delete_manager(&id).await {
                Ok(()) => {
                    notify_success(notifications, "Manager deleted successfully");
                    done();
                }
                Err(err) => notify_error(notifications, err.user_message("Failed to delete manager")),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, id, notifications, done);
    }
}

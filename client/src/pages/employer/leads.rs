//! Employer lead book: filtered listing plus create, edit, and delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! Status and manager filters are sent to `GET /employer/leads`, so the list
//! refetches whenever they change. The search box only narrows what was
//! fetched. The manager list feeds both the filter and the assignment field.

use leptos::prelude::*;

use crate::app::{AppSession, use_session};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::lead_dialog::LeadDialog;
use crate::components::loading_spinner::{LoadingSpinner, SpinnerSize};
use crate::components::status_badge::StatusBadge;
use crate::net::types::{Lead, LeadStatus, Manager};
use crate::state::leads::{self, LeadFilters, LeadForm, LeadsState};
use crate::state::managers::FormMode;
use crate::state::notifications::{NotificationsState, notify_error, notify_success};

#[component]
pub fn EmployerLeadsPage() -> impl IntoView {
    let session = use_session();
    let notifications = expect_context::<RwSignal<NotificationsState>>();
    let state = RwSignal::new(LeadsState::loading());
    let managers = RwSignal::new(Vec::<Manager>::new());
    let show_filters = RwSignal::new(false);
    let editing = RwSignal::new(None::<(FormMode, LeadForm)>);
    let deleting = RwSignal::new(None::<String>);
    let (busy, set_busy) = signal(false);

    load_manager_options(&session, managers, notifications);

    let filters = Memo::new(move |_| state.with(|s| s.filters.clone()));
    let reload = {
        let session = session.clone();
        Callback::new(move |()| load_leads(&session, filters.get_untracked(), state, notifications))
    };
    Effect::new(move || {
        filters.track();
        reload.run(());
    });

    let on_save = {
        let session = session.clone();
        Callback::new(move |form: LeadForm| {
            let Some((mode, _)) = editing.get_untracked() else {
                return;
            };
            set_busy.set(true);
            save_lead(&session, mode, form, notifications, move |ok| {
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
        delete_lead(&session, id, notifications, move || reload.run(()));
    });

    let on_cancel_edit = Callback::new(move |()| editing.set(None));
    let on_cancel_delete = Callback::new(move |()| deleting.set(None));
    let manager_options = Signal::derive(move || managers.get());

    let rows = move || {
        state
            .get()
            .visible()
            .into_iter()
            .map(|lead| lead_row(lead, editing, deleting))
            .collect::<Vec<_>>()
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div>
                    <h2>"Leads"</h2>
                    <p class="page__subtitle">"Track and assign leads across your team."</p>
                </div>
                <button
                    class="btn btn--primary"
                    on:click=move |_| editing.set(Some((FormMode::Create, LeadForm::default())))
                >
                    "+ Add Lead"
                </button>
            </div>

            <div class="panel">
                <div class="panel__toolbar">
                    <input
                        class="search-input"
                        type="text"
                        placeholder="Search leads..."
                        prop:value=move || state.get().search
                        on:input=move |ev| state.update(|s| s.search = event_target_value(&ev))
                    />
                    <button class="btn" on:click=move |_| show_filters.update(|v| *v = !*v)>
                        {move || if show_filters.get() { "Filters ▴" } else { "Filters ▾" }}
                    </button>
                </div>
                <Show when=move || show_filters.get()>
                    <div class="panel__filters">
                        <select
                            class="filter-select"
                            prop:value=move || filters.get().status.map_or("", LeadStatus::as_str)
                            on:change=move |ev| {
                                let status = LeadStatus::parse(&event_target_value(&ev));
                                state.update(|s| s.filters.status = status);
                            }
                        >
                            <option value="">"All Statuses"</option>
                            {LeadStatus::ALL
                                .into_iter()
                                .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                        <select
                            class="filter-select"
                            prop:value=move || filters.get().manager_id.unwrap_or_default()
                            on:change=move |ev| {
                                let id = Some(event_target_value(&ev)).filter(|id| !id.is_empty());
                                state.update(|s| s.filters.manager_id = id);
                            }
                        >
                            <option value="">"All Managers"</option>
                            {move || {
                                managers
                                    .get()
                                    .into_iter()
                                    .map(|m| view! { <option value=m.id>{m.name}</option> })
                                    .collect::<Vec<_>>()
                            }}
                        </select>
                        <button
                            class="btn"
                            on:click=move |_| {
                                state.update(|s| s.filters.clear());
                                show_filters.set(false);
                            }
                        >
                            "Clear Filters"
                        </button>
                    </div>
                </Show>
                <Show when=move || !state.get().loading fallback=|| view! { <LoadingSpinner size=SpinnerSize::Large/> }>
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Contact"</th>
                                <th>"Company"</th>
                                <th>"Status"</th>
                                <th>"Manager"</th>
                                <th class="table__actions">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show
                                when=move || !state.get().visible().is_empty()
                                fallback=move || view! {
                                    <tr>
                                        <td class="table__empty" colspan="5">{move || state.get().empty_message()}</td>
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
                            <LeadDialog
                                mode=mode
                                initial=initial
                                managers=manager_options
                                busy=busy
                                on_submit=on_save
                                on_cancel=on_cancel_edit
                            />
                        }
                    })
            }}
            <Show when=move || deleting.get().is_some()>
                <ConfirmDialog
                    title="Delete Lead"
                    message="Are you sure you want to delete this lead?"
                    on_confirm=on_delete
                    on_cancel=on_cancel_delete
                />
            </Show>
        </div>
    }
}

fn lead_row(lead: Lead, editing: RwSignal<Option<(FormMode, LeadForm)>>, deleting: RwSignal<Option<String>>) -> impl IntoView {
    let edit_form = LeadForm::from_lead(&lead);
    let edit_id = lead.id.clone();
    let delete_id = lead.id.clone();
    let manager_name = lead.manager_name.clone().unwrap_or_else(|| "Unassigned".to_owned());
    view! {
        <tr>
            <td>
                <span class="table__name">{lead.contact_name}</span>
                <span class="table__sub">{lead.contact_email}</span>
            </td>
            <td>{lead.company_name}</td>
            <td>
                <StatusBadge status=lead.status/>
            </td>
            <td>{manager_name}</td>
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

fn load_leads(
    session: &AppSession,
    filters: LeadFilters,
    state: RwSignal<LeadsState>,
    notifications: RwSignal<NotificationsState>,
) {
    let mut ticket = 0;
    state.update(|s| ticket = s.begin_load());
    #[cfg(feature = "hydrate")]
    {
        let client = session.client();
        leptos::task::spawn_local(async move {
            let result = client.list_leads(filters.status, filters.manager_id.as_deref()).await;
            leads::settle_fetch(state, notifications, ticket, result);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (session, filters, notifications, ticket);
}

fn load_manager_options(session: &AppSession, managers: RwSignal<Vec<Manager>>, notifications: RwSignal<NotificationsState>) {
    #[cfg(feature = "hydrate")]
    {
        let client = session.client();
        leptos::task::spawn_local(async move {
            match client.list_managers().await {
                Ok(items) => managers.set(items),
                Err(err) => notify_error(notifications, err.user_message("Failed to fetch managers")),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (session, managers, notifications);
}

fn save_lead(
    session: &AppSession,
    mode: FormMode,
    form: LeadForm,
    notifications: RwSignal<NotificationsState>,
    done: impl FnOnce(bool) + 'static,
) {
    let payload = form.to_payload();
    #[cfg(feature = "hydrate")]
    {
        let client = session.client();
        leptos::task::spawn_local(async move {
            let (result, verb) = match &mode {
                FormMode::Create => (client.create_lead(&payload).await, "create"),
                FormMode::Edit(id) => (client.update_lead(id, &payload).await, "update"),
            };
            match result {
                Ok(()) => {
                    notify_success(notifications, format!("Lead {verb}d successfully"));
                    done(true);
                }
                Err(err) => {
                    notify_error(notifications, err.user_message(&format!("Failed to {verb} lead")));
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

fn delete_lead(session: &AppSession, id: String, notifications: RwSignal<NotificationsState>, done: impl FnOnce() + 'static) {
    #[cfg(feature = "hydrate")]
    {
        let client = session.client();
        leptos::task::spawn_local(async move {
            match client.delete_lead(&id).await {
                Ok(()) => {
                    notify_success(notifications, "Lead deleted successfully");
                    done();
                }
                Err(err) => notify_error(notifications, err.user_message("Failed to delete lead")),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, id, notifications, done);
    }
}

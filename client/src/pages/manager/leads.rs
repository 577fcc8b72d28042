//! Manager workspace: assigned leads as cards with status updates.

use leptos::prelude::*;

use crate::app::{AppSession, use_session};
use crate::components::loading_spinner::{LoadingSpinner, SpinnerSize};
use crate::components::status_badge::StatusBadge;
use crate::components::status_dialog::StatusDialog;
use crate::net::types::{Lead, LeadStatus};
use crate::state::leads::{self, LeadsState, StatusUpdateForm};
use crate::state::notifications::{NotificationsState, notify_error, notify_success};

#[component]
pub fn ManagerLeadsPage() -> impl IntoView {
    let session = use_session();
    let notifications = expect_context::<RwSignal<NotificationsState>>();
    let state = RwSignal::new(LeadsState::loading());
    let show_filters = RwSignal::new(false);
    let updating = RwSignal::new(None::<(StatusUpdateForm, String)>);
    let (busy, set_busy) = signal(false);

    let status_filter = Memo::new(move |_| state.with(|s| s.filters.status));
    let reload = {
        let session = session.clone();
        Callback::new(move |()| load_assigned(&session, status_filter.get_untracked(), state, notifications))
    };
    Effect::new(move || {
        status_filter.track();
        reload.run(());
    });

    let on_update = Callback::new(move |form: StatusUpdateForm| {
        set_busy.set(true);
        update_status(&session, form, notifications, move |ok| {
            set_busy.set(false);
            if ok {
                updating.set(None);
                reload.run(());
            }
        });
    });
    let on_cancel = Callback::new(move |()| updating.set(None));

    let cards = move || {
        state
            .get()
            .visible()
            .into_iter()
            .map(|lead| lead_card(lead, updating))
            .collect::<Vec<_>>()
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div>
                    <h2>"My Leads"</h2>
                    <p class="page__subtitle">"Manage your assigned leads and update their status."</p>
                </div>
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
                            prop:value=move || status_filter.get().map_or("", LeadStatus::as_str)
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
            </div>

            <Show when=move || !state.get().loading fallback=|| view! { <LoadingSpinner size=SpinnerSize::Large/> }>
                <Show
                    when=move || !state.get().visible().is_empty()
                    fallback=move || view! {
                        <div class="empty-state">
                            <h3>"No leads found"</h3>
                            <p>{move || state.get().assigned_empty_hint()}</p>
                        </div>
                    }
                >
                    <div class="lead-cards">{cards}</div>
                </Show>
            </Show>

            {move || {
                updating
                    .get()
                    .map(|(initial, contact_name)| {
                        view! {
                            <StatusDialog
                                initial=initial
                                contact_name=contact_name
                                busy=busy
                                on_submit=on_update
                                on_cancel=on_cancel
                            />
                        }
                    })
            }}
        </div>
    }
}

fn lead_card(lead: Lead, updating: RwSignal<Option<(StatusUpdateForm, String)>>) -> impl IntoView {
    let form = StatusUpdateForm::for_lead(&lead);
    let contact = lead.contact_name.clone();
    let notes = if lead.notes.is_empty() {
        view! { <p class="lead-card__no-notes">"No notes yet."</p> }.into_any()
    } else {
        view! {
            <ul class="lead-card__notes">
                {lead.notes.into_iter().map(|note| view! { <li>{note}</li> }).collect::<Vec<_>>()}
            </ul>
        }
        .into_any()
    };
    view! {
        <article class="lead-card">
            <header class="lead-card__header">
                <div>
                    <h3 class="lead-card__contact">{lead.contact_name}</h3>
                    <p class="lead-card__company">{lead.company_name}</p>
                </div>
                <StatusBadge status=lead.status/>
            </header>
            <p class="lead-card__email">{lead.contact_email}</p>
            <section>
                <h4>"Notes"</h4>
                {notes}
            </section>
            <button class="btn btn--primary" on:click=move |_| updating.set(Some((form.clone(), contact.clone())))>
                "Update Status"
            </button>
        </article>
    }
}

fn load_assigned(
    session: &AppSession,
    status: Option<LeadStatus>,
    state: RwSignal<LeadsState>,
    notifications: RwSignal<NotificationsState>,
) {
    let mut ticket = 0;
    state.update(|s| ticket = s.begin_load());
    #[cfg(feature = "hydrate")]
    {
        let client = session.client();
        leptos::task::spawn_local(async move {
            let result = client.list_assigned_leads(status).await;
            leads::settle_fetch(state, notifications, ticket, result);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (session, status, notifications, ticket);
}

fn update_status(
    session: &AppSession,
    form: StatusUpdateForm,
    notifications: RwSignal<NotificationsState>,
    done: impl FnOnce(bool) + 'static,
) {
    let update = form.to_update();
    #[cfg(feature = "hydrate")]
    {
        let client = session.client();
        leptos::task::spawn_local(async move {
            match client.update_assigned_lead(&form.lead_id, &update).await {
                Ok(()) => {
                    notify_success(notifications, "Lead updated successfully");
                    done(true);
                }
                Err(err) => {
                    notify_error(notifications, err.user_message("Failed to update lead"));
                    done(false);
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, form, update, notifications);
        done(false);
    }
}

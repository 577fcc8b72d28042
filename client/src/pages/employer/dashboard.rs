//! Employer overview: pipeline counters and team size.

use leptos::prelude::*;

use crate::app::use_session;
use crate::components::loading_spinner::{LoadingSpinner, SpinnerSize};
use crate::components::stats_card::StatsCard;
use crate::state::dashboard::{DashboardState, stat_cards};

#[component]
pub fn EmployerDashboardPage() -> impl IntoView {
    let manager = use_session();
    let state = RwSignal::new(DashboardState { loading: true, ..DashboardState::default() });

    #[cfg(feature = "hydrate")]
    {
        let client = manager.client();
        leptos::task::spawn_local(async move {
            match client.dashboard_stats().await {
                Ok(stats) => state.update(|s| {
                    s.stats = Some(stats);
                    s.loading = false;
                }),
                Err(err) => {
                    log::warn!("dashboard stats failed: {err}");
                    state.update(|s| {
                        s.error = Some(crate::state::dashboard::LOAD_ERROR.to_owned());
                        s.loading = false;
                    });
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    drop(manager);

    view! {
        <div class="page">
            <div class="page__header">
                <div>
                    <h2>"Overview"</h2>
                    <p class="page__subtitle">"Monitor your business performance and lead management."</p>
                </div>
            </div>
            <Show when=move || !state.get().loading fallback=|| view! { <LoadingSpinner size=SpinnerSize::Large/> }>
                {move || {
                    let snapshot = state.get();
                    match (snapshot.error, snapshot.stats) {
                        (Some(error), _) => view! { <div class="page__error" role="alert">{error}</div> }.into_any(),
                        (None, Some(stats)) => view! {
                            <div class="stats-grid">
                                {stat_cards(&stats).into_iter().map(|card| view! { <StatsCard card/> }).collect::<Vec<_>>()}
                            </div>
                        }
                        .into_any(),
                        (None, None) => view! { <p class="page__empty">"No statistics available yet."</p> }.into_any(),
                    }
                }}
            </Show>
        </div>
    }
}

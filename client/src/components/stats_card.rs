//! Dashboard counter card with month-over-month change.

use leptos::prelude::*;

use crate::state::dashboard::StatCard;

#[component]
pub fn StatsCard(card: StatCard) -> impl IntoView {
    let rising = card.is_rising();
    view! {
        <div class="stat-card">
            <div class=format!("stat-card__icon stat-card__icon--{}", card.tone) aria-hidden="true"></div>
            <dl class="stat-card__body">
                <dt class="stat-card__title">{card.title}</dt>
                <dd class="stat-card__value">{card.value}</dd>
            </dl>
            <div class="stat-card__change" class:stat-card__change--up=rising class:stat-card__change--down=!rising>
                <span>{card.change_label()}</span>
                <span class="stat-card__since">" since last month"</span>
            </div>
        </div>
    }
}

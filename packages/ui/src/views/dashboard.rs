use dioxus::prelude::*;
use store::dashboard::{
    format_change, format_money, format_signed_money, DashboardSnapshot, ExportFormat, LedgerLine,
};
use store::{Language, Text};

use crate::chart::BarChart;
use crate::components::{Button, ButtonVariant, Card};
use crate::{use_language, use_theme};

use super::{page_title, SidebarLayout};

#[component]
pub fn Dashboard() -> Element {
    let mut language = use_language();
    let theme = use_theme();
    let snapshot = use_hook(DashboardSnapshot::placeholder);
    let t = move |key: Text| language.text(key);
    let switch_to = if language.get() == Language::En { "PT" } else { "EN" };

    let balance_change = format!("{} {}", format_change(snapshot.balance_change), t(Text::FromLastMonth));
    let expenses_change = format!("{} {}", format_change(snapshot.expenses_change), t(Text::FromLastMonth));
    let progress = snapshot.budget_progress.min(100);
    let title = page_title(t(Text::Dashboard));

    rsx! {
        document::Title { "{title}" }
        SidebarLayout {
            header: rsx! {
                h1 { class: "page-title", "{t(Text::Dashboard)}" }
                div { class: "page-actions",
                    ExportMenu {}
                    Button {
                        variant: ButtonVariant::Outline,
                        title: t(Text::ToggleLanguage).to_string(),
                        onclick: move |_| language.toggle(),
                        "{switch_to}"
                    }
                }
            },
            div { class: "card-grid",
                Card { title: t(Text::TotalBalance).to_string(),
                    p { class: "metric", "{format_money(snapshot.total_balance_cents)}" }
                    p { class: "metric-note", "{balance_change}" }
                }
                Card { title: t(Text::MonthlyExpenses).to_string(),
                    p { class: "metric", "{format_money(snapshot.monthly_expenses_cents)}" }
                    p { class: "metric-note", "{expenses_change}" }
                }
                Card { title: t(Text::BudgetProgress).to_string(),
                    p { class: "metric", "{progress}%" }
                    div {
                        class: "progress",
                        role: "progressbar",
                        aria_valuenow: "{progress}",
                        aria_valuemin: "0",
                        aria_valuemax: "100",
                        div { class: "progress-fill", style: "width: {progress}%" }
                    }
                }
            }
            Card { class: "chart-card", title: t(Text::IncomeVsExpenses).to_string(),
                BarChart {
                    flows: snapshot.monthly_flows.clone(),
                    theme: theme.get(),
                    income_label: t(Text::Income).to_string(),
                    expenses_label: t(Text::Expenses).to_string(),
                }
            }
            div { class: "card-grid card-grid--two",
                Card { title: t(Text::RecentTransactions).to_string(),
                    LedgerList { lines: snapshot.recent_transactions.clone(), signed: true }
                }
                Card { title: t(Text::TopSpendingCategories).to_string(),
                    LedgerList { lines: snapshot.top_categories.clone(), signed: false }
                }
            }
        }
    }
}

#[component]
fn LedgerList(lines: Vec<LedgerLine>, signed: bool) -> Element {
    let language = use_language();

    rsx! {
        ul { class: "ledger",
            for line in lines {
                li { key: "{line.label:?}", class: "ledger-line",
                    span { "{language.text(line.label)}" }
                    if signed {
                        span {
                            class: if line.amount_cents < 0 { "amount amount--out" } else { "amount amount--in" },
                            "{format_signed_money(line.amount_cents)}"
                        }
                    } else {
                        span { class: "amount", "{format_money(line.amount_cents)}" }
                    }
                }
            }
        }
    }
}

/// Export dropdown. Neither format is implemented yet: choosing one closes the
/// menu and says so.
#[component]
fn ExportMenu() -> Element {
    let language = use_language();
    let mut open = use_signal(|| false);
    let mut unavailable = use_signal(|| false);

    rsx! {
        div { class: "dropdown",
            Button {
                variant: ButtonVariant::Outline,
                onclick: move |_| open.set(!open()),
                "{language.text(Text::Export)}"
            }
            if open() {
                div { class: "dropdown-menu", role: "menu",
                    p { class: "dropdown-label", "{language.text(Text::ChooseFormat)}" }
                    hr { class: "dropdown-separator" }
                    for format in ExportFormat::ALL {
                        button {
                            key: "{format.label()}",
                            class: "dropdown-item",
                            role: "menuitem",
                            onclick: move |_| {
                                tracing::warn!("{} export requested but not available", format.label());
                                open.set(false);
                                unavailable.set(true);
                            },
                            "{format.label()}"
                        }
                    }
                }
            }
            if unavailable() {
                p { class: "notice", role: "status", "{language.text(Text::ExportUnavailable)}" }
            }
        }
    }
}

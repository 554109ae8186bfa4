//! Dashboard: headline stats, the monthly revenue trend, and recent cases.

use dcase_core::fixtures::{dashboard_stats, revenue_series};
use dcase_core::model::Case;
use dioxus::prelude::*;

use crate::components::shared::{AvatarBubble, StatCard, StatusBadge};
use crate::components::{use_cases, use_navigator, View};
use crate::utils::formatting::dollars;

#[component]
pub fn DashboardView() -> Element {
    let cases = use_cases();
    let mut nav = use_navigator();

    let stats = dashboard_stats();
    let revenue = revenue_series();
    let peak = revenue.iter().map(|p| p.revenue).max().unwrap_or(1);
    let recent: Vec<Case> = cases.read().list().to_vec();

    rsx! {
        div { class: "dc-page",
            header { class: "dc-page-header",
                h1 { class: "dc-page-title", "Dashboard" }
            }

            div { class: "dc-stat-grid",
                StatCard {
                    label: "Total Cases",
                    value: stats.total_cases.to_string(),
                }
                StatCard {
                    label: "Won Cases",
                    value: stats.won_cases.to_string(),
                    tone: "green",
                }
                StatCard {
                    label: "Lost Cases",
                    value: stats.lost_cases.to_string(),
                    tone: "red",
                }
                StatCard {
                    label: "Monthly Revenue",
                    value: dollars(stats.monthly_revenue as f64),
                }
            }

            section { class: "dc-card",
                h2 { class: "dc-section-title", "Revenue Overview" }
                div { class: "dc-revenue-chart",
                    for point in revenue {
                        RevenueColumn {
                            key: "{point.month}",
                            month: point.month.to_string(),
                            revenue: point.revenue,
                            peak,
                        }
                    }
                }
            }

            section { class: "dc-card",
                h2 { class: "dc-section-title", "Recent Cases" }
                for case in recent {
                    article { key: "{case.id}", class: "dc-related-row",
                        AvatarBubble { name: case.client.clone() }
                        div { class: "dc-entity-title",
                            h3 { class: "dc-related-title", "{case.title}" }
                            p { class: "dc-entity-sub",
                                "{case.client} • {case.case_type} • {case.attorney}"
                            }
                        }
                        StatusBadge { label: case.status.to_string() }
                        button {
                            class: "dc-btn",
                            onclick: move |_| nav.write().go(View::CaseDetail(case.id)),
                            "View"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RevenueColumn(month: String, revenue: u64, peak: u64) -> Element {
    let height = revenue * 100 / peak.max(1);
    let tooltip = format!("{month}: {}", dollars(revenue as f64));
    rsx! {
        div { class: "dc-revenue-col", title: "{tooltip}",
            div { class: "dc-revenue-bar", style: "height: {height}%;" }
            span { class: "dc-revenue-month", "{month}" }
        }
    }
}

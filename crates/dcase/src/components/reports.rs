//! Reports & analytics screen.
//!
//! KPI cards and aggregate tables over the report snapshot, with export to
//! CSV, "PDF", and "Excel". Export runs through a coroutine that waits out
//! the fixed processing delay, renders the payload in `dcase-core`, and
//! hands it to the platform download bridge. Emailing a report is a pure
//! simulation: a longer delay and a success toast, no payload.

use dcase_core::config::{EMAIL_DELAY_MS, EXPORT_DELAY_MS};
use dcase_core::export::{export_report, ReportFormat};
use dcase_core::fixtures::report_snapshot;
use dcase_core::model::today;
use dcase_core::reports::{ReportPeriod, ReportType, Trend};
use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedReceiver;
use futures_util::StreamExt;

use crate::components::shared::{Toast, ToastView};
use crate::download;
use crate::platform;

/// Messages for the export coroutine.
enum ExportMessage {
    Download(ReportFormat),
    Email,
}

#[component]
pub fn ReportsView() -> Element {
    let mut report_type = use_signal(|| ReportType::Overview);
    let mut period = use_signal(|| ReportPeriod::Monthly);
    let mut exporting = use_signal(|| false);
    let toast = use_signal(|| None::<Toast>);

    let exporter = use_coroutine(move |mut rx: UnboundedReceiver<ExportMessage>| {
        let mut toast = toast;
        async move {
            while let Some(message) = rx.next().await {
                exporting.set(true);
                match message {
                    ExportMessage::Download(format) => {
                        platform::sleep_ms(EXPORT_DELAY_MS).await;
                        let payload = export_report(
                            &report_snapshot(),
                            report_type(),
                            period(),
                            format,
                            &today(),
                        );
                        match download::deliver(&payload) {
                            Ok(()) => {
                                info!(filename = %payload.filename, "report exported");
                                toast.set(Some(Toast::success(
                                    format!("{} Export Successful", format.label()),
                                    format!(
                                        "{} report has been downloaded as {} file.",
                                        report_type().key(),
                                        format.label()
                                    ),
                                )));
                            }
                            Err(err) => {
                                error!(%err, "report export failed");
                                toast.set(Some(Toast::error(
                                    "Export Failed",
                                    "There was an error exporting the report. Please try again.",
                                )));
                            }
                        }
                    }
                    ExportMessage::Email => {
                        platform::sleep_ms(EMAIL_DELAY_MS).await;
                        toast.set(Some(Toast::success(
                            "Report Emailed Successfully",
                            format!(
                                "{} report has been sent to your email address.",
                                report_type().key()
                            ),
                        )));
                    }
                }
                exporting.set(false);
            }
        }
    });

    let snapshot = report_snapshot();
    let busy = exporting();
    let type_key = report_type().key();
    let period_key = period().key();

    rsx! {
        div { class: "dc-page",
            header { class: "dc-page-header",
                h1 { class: "dc-page-title", "Reports & Analytics" }
                div { class: "dc-toolbar",
                    select {
                        class: "dc-select",
                        value: "{type_key}",
                        onchange: move |evt| {
                            if let Some(parsed) = ReportType::parse(&evt.value()) {
                                report_type.set(parsed);
                            }
                        },
                        for (option_key, option_label) in ReportType::ALL.map(|t| (t.key(), t.label())) {
                            option { value: "{option_key}", "{option_label}" }
                        }
                    }
                    select {
                        class: "dc-select",
                        value: "{period_key}",
                        onchange: move |evt| {
                            if let Some(parsed) = ReportPeriod::parse(&evt.value()) {
                                period.set(parsed);
                            }
                        },
                        for (option_key, option_label) in ReportPeriod::ALL.map(|p| (p.key(), p.label())) {
                            option { value: "{option_key}", "{option_label}" }
                        }
                    }
                }
            }

            div { class: "dc-toolbar",
                button {
                    class: "dc-btn",
                    disabled: busy,
                    onclick: move |_| exporter.send(ExportMessage::Download(ReportFormat::Pdf)),
                    if busy { "Exporting…" } else { "Export PDF" }
                }
                button {
                    class: "dc-btn",
                    disabled: busy,
                    onclick: move |_| exporter.send(ExportMessage::Download(ReportFormat::Excel)),
                    if busy { "Exporting…" } else { "Export Excel" }
                }
                button {
                    class: "dc-btn",
                    disabled: busy,
                    onclick: move |_| exporter.send(ExportMessage::Download(ReportFormat::Csv)),
                    if busy { "Exporting…" } else { "Export CSV" }
                }
                button {
                    class: "dc-btn",
                    disabled: busy,
                    onclick: move |_| exporter.send(ExportMessage::Email),
                    "Email Report"
                }
            }

            div { class: "dc-stat-grid",
                for kpi in snapshot.kpis.clone() {
                    div { key: "{kpi.title}", class: "dc-card dc-stat-card",
                        p { class: "dc-stat-label", "{kpi.title}" }
                        p { class: "dc-stat-value", "{kpi.value}" }
                        span {
                            class: if kpi.trend == Trend::Up {
                                "dc-kpi-change dc-kpi-change--up"
                            } else {
                                "dc-kpi-change dc-kpi-change--down"
                            },
                            "{kpi.change}"
                        }
                    }
                }
            }

            section { class: "dc-card",
                h2 { class: "dc-section-title", "Case Outcomes by Practice Area" }
                table { class: "dc-table",
                    thead {
                        tr {
                            th { "Practice Area" }
                            th { "Won" }
                            th { "Lost" }
                            th { "Pending" }
                        }
                    }
                    tbody {
                        for outcome in snapshot.outcomes.clone() {
                            tr { key: "{outcome.category}",
                                td { "{outcome.category}" }
                                td { class: "dc-table-num dc-table-num--green", "{outcome.won}" }
                                td { class: "dc-table-num dc-table-num--red", "{outcome.lost}" }
                                td { class: "dc-table-num", "{outcome.pending}" }
                            }
                        }
                    }
                }
            }

            section { class: "dc-card",
                h2 { class: "dc-section-title", "Attorney Performance" }
                table { class: "dc-table",
                    thead {
                        tr {
                            th { "Attorney" }
                            th { "Cases" }
                            th { "Rating" }
                            th { "Revenue" }
                        }
                    }
                    tbody {
                        for attorney in snapshot.attorneys.clone() {
                            AttorneyPerformanceRow {
                                key: "{attorney.name}",
                                name: attorney.name.clone(),
                                cases: attorney.cases,
                                rating: attorney.rating,
                                revenue: attorney.revenue,
                            }
                        }
                    }
                }
            }

            ToastView { toast }
        }
    }
}

#[component]
fn AttorneyPerformanceRow(name: String, cases: u32, rating: f64, revenue: u64) -> Element {
    let revenue_display = crate::utils::formatting::dollars(revenue as f64);
    rsx! {
        tr {
            td { "{name}" }
            td { class: "dc-table-num", "{cases}" }
            td { class: "dc-table-num", "{rating}" }
            td { class: "dc-table-num", "{revenue_display}" }
        }
    }
}

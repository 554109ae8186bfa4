//! Appointment calendar: a Sunday-first month grid with per-day
//! appointment chips. The Week and Day buttons exist but the month grid is
//! the only rendering, matching the product this screen reproduces.

use dcase_core::calendar::{appointments_on, MonthCursor, DAYS_OF_WEEK};
use dcase_core::model::{Appointment, AppointmentDraft, AppointmentKind};
use dioxus::prelude::*;

use crate::components::shared::{status_tone, Dialog, FormField, FormSelect, FormTextarea};
use crate::components::use_appointments;

const VIEW_MODES: [&str; 3] = ["Month", "Week", "Day"];

#[component]
pub fn CalendarView() -> Element {
    let mut appointments = use_appointments();
    let mut cursor = use_signal(MonthCursor::current);
    let mut mode = use_signal(|| "Month".to_string());
    let mut dialog_open = use_signal(|| false);
    let mut draft = use_signal(AppointmentDraft::default);

    let all: Vec<Appointment> = appointments.read().list().to_vec();
    let month = cursor();
    let label = month.label();

    let submit = move |_| {
        if appointments.write().add(draft()).is_ok() {
            draft.set(AppointmentDraft::default());
            dialog_open.set(false);
        }
    };

    rsx! {
        div { class: "dc-page",
            header { class: "dc-page-header",
                h1 { class: "dc-page-title", "Appointments" }
                button {
                    class: "dc-btn dc-btn--primary",
                    onclick: move |_| {
                        draft.set(AppointmentDraft::default());
                        dialog_open.set(true);
                    },
                    "+ New Appointment"
                }
            }

            div { class: "dc-toolbar dc-calendar-toolbar",
                div { class: "dc-calendar-nav",
                    button {
                        class: "dc-btn",
                        onclick: move |_| {
                            let prev = cursor().prev();
                            cursor.set(prev);
                        },
                        "‹"
                    }
                    h2 { class: "dc-calendar-label", "{label}" }
                    button {
                        class: "dc-btn",
                        onclick: move |_| {
                            let next = cursor().next();
                            cursor.set(next);
                        },
                        "›"
                    }
                }
                div { class: "dc-mode-switch",
                    for view_mode in VIEW_MODES {
                        button {
                            class: if mode() == view_mode {
                                "dc-btn dc-btn--primary"
                            } else {
                                "dc-btn"
                            },
                            onclick: move |_| mode.set(view_mode.to_string()),
                            "{view_mode}"
                        }
                    }
                }
            }

            div { class: "dc-calendar-grid",
                for day_name in DAYS_OF_WEEK {
                    div { class: "dc-calendar-dow", "{day_name}" }
                }
                for cell in month.grid() {
                    if let Some(day) = cell {
                        DayCell {
                            day,
                            date: month.cell_date(day),
                            appointments: appointments_on(&all, &month.cell_date(day))
                                .into_iter()
                                .cloned()
                                .collect::<Vec<_>>(),
                        }
                    } else {
                        div { class: "dc-calendar-cell dc-calendar-cell--blank" }
                    }
                }
            }

            Dialog { title: "New Appointment", open: dialog_open,
                FormField {
                    label: "Title",
                    value: draft().title,
                    placeholder: "Enter appointment title",
                    on_input: move |v| draft.write().title = v,
                }
                div { class: "dc-form-grid",
                    FormField {
                        label: "Client",
                        value: draft().client,
                        placeholder: "Enter client name",
                        on_input: move |v| draft.write().client = v,
                    }
                    FormField {
                        label: "Attorney",
                        value: draft().attorney,
                        placeholder: "Enter attorney name",
                        on_input: move |v| draft.write().attorney = v,
                    }
                    FormField {
                        label: "Date",
                        value: draft().date,
                        placeholder: "YYYY-MM-DD",
                        on_input: move |v| draft.write().date = v,
                    }
                    FormField {
                        label: "Time",
                        value: draft().time,
                        placeholder: "HH:MM",
                        on_input: move |v| draft.write().time = v,
                    }
                }
                FormSelect {
                    label: "Type",
                    value: draft().kind.unwrap_or(AppointmentKind::Meeting).to_string(),
                    options: AppointmentKind::ALL.iter().map(|k| k.to_string()).collect::<Vec<_>>(),
                    on_change: move |v: String| draft.write().kind = AppointmentKind::parse(&v),
                }
                FormTextarea {
                    label: "Description",
                    value: draft().description,
                    placeholder: "What is this appointment about?",
                    on_input: move |v| draft.write().description = v,
                }
                button {
                    class: "dc-btn dc-btn--primary dc-btn--block",
                    onclick: submit,
                    "Schedule"
                }
            }
        }
    }
}

#[component]
fn DayCell(day: u32, date: String, appointments: Vec<Appointment>) -> Element {
    rsx! {
        div { class: "dc-calendar-cell", title: "{date}",
            span { class: "dc-calendar-day", "{day}" }
            for appointment in appointments {
                AppointmentChip { key: "{appointment.id}", appointment: appointment.clone() }
            }
        }
    }
}

#[component]
fn AppointmentChip(appointment: Appointment) -> Element {
    let tone = status_tone(appointment.kind.as_str());
    let title = format!("{} · {}", appointment.time, appointment.title);
    rsx! {
        div {
            class: "dc-chip dc-chip--{tone}",
            title: "{appointment.client} • {appointment.description}",
            "{title}"
        }
    }
}

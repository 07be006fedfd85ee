use dioxus::prelude::*;

use coleta_core::model::{ActivityStatus, AttendanceRow, ClassGroup, SessionInfo};

use crate::views::ViewError;
use crate::vm::{SaveState, WizardIntent};

/// Step 2: roll call over the roster, then save.
///
/// The table has exactly one row per roster student; rows are never
/// inserted or removed here, only their status changes.
#[component]
pub fn CollectView(
    info: SessionInfo,
    class_group: ClassGroup,
    rows: Vec<AttendanceRow>,
    save_state: SaveState,
    error: Option<ViewError>,
    on_intent: EventHandler<WizardIntent>,
) -> Element {
    let saving = save_state == SaveState::Saving;
    let saved = save_state == SaveState::Saved;

    let subject_label = info.subject.as_str();
    let reference_label = if info.pages.is_empty() {
        info.source_type.display_label().to_string()
    } else {
        format!("{} ({})", info.source_type.display_label(), info.pages)
    };
    let date_label = info.collection_date.to_string();

    rsx! {
        section { class: "card collect-card",
            h2 { "2. Roll call: {class_group}" }
            p { class: "collect-context",
                strong { "{subject_label}" }
                " | {reference_label} | {date_label}"
            }
            p { class: "collect-hint", "Change the status of anyone who didn't finish or was absent:" }

            table { class: "attendance-table",
                thead {
                    tr {
                        th { "Student" }
                        th { "Class" }
                        th { "Status" }
                    }
                }
                tbody {
                    for (index, row) in rows.into_iter().enumerate() {
                        AttendanceRowView {
                            index,
                            row,
                            locked: saving || saved,
                            on_intent,
                        }
                    }
                }
            }

            div { class: "collect-actions",
                button {
                    class: "btn btn-secondary",
                    id: "collect-back",
                    r#type: "button",
                    disabled: saving,
                    onclick: move |_| on_intent.call(WizardIntent::Back),
                    "Back"
                }
                if saved {
                    button {
                        class: "btn btn-primary",
                        id: "collect-new",
                        r#type: "button",
                        onclick: move |_| on_intent.call(WizardIntent::NewCollection),
                        "New Collection"
                    }
                } else if saving {
                    button {
                        class: "btn btn-primary",
                        id: "collect-save",
                        r#type: "button",
                        disabled: true,
                        "Saving..."
                    }
                } else {
                    button {
                        class: "btn btn-primary",
                        id: "collect-save",
                        r#type: "button",
                        onclick: move |_| on_intent.call(WizardIntent::Save),
                        "Save"
                    }
                }
            }

            if saved {
                p { class: "collect-status collect-status--success", "Collection saved." }
            }
            if let Some(err) = error {
                p { class: "collect-status collect-status--error", "{err.message()}" }
            }
        }
    }
}

#[component]
fn AttendanceRowView(
    index: usize,
    row: AttendanceRow,
    locked: bool,
    on_intent: EventHandler<WizardIntent>,
) -> Element {
    let status = row.status;
    rsx! {
        tr {
            td { "{row.student_name}" }
            td { "{row.class_group}" }
            td {
                select {
                    class: "status-select",
                    disabled: locked,
                    onchange: move |evt| {
                        if let Ok(parsed) = evt.value().parse::<ActivityStatus>() {
                            on_intent.call(WizardIntent::SetStatus { index, status: parsed });
                        }
                    },
                    for option in ActivityStatus::ALL {
                        option {
                            value: "{option.as_str()}",
                            selected: option == status,
                            "{option.display_label()}"
                        }
                    }
                }
            }
        }
    }
}

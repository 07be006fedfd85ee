use chrono::NaiveDate;
use dioxus::prelude::*;

use coleta_core::model::{SessionInfo, SourceType, Subject};

/// Step 1: configure the activity being collected.
///
/// `initial` carries the previously submitted setup when the user came back
/// from step 2, so nothing has to be re-entered.
#[component]
pub fn SetupView(
    initial: Option<SessionInfo>,
    default_date: NaiveDate,
    on_submit: EventHandler<SessionInfo>,
) -> Element {
    let (seed_subject, seed_source, seed_pages, seed_date) = match initial {
        Some(info) => (
            info.subject,
            info.source_type,
            info.pages,
            info.collection_date,
        ),
        None => (
            Subject::Math,
            SourceType::Notebook,
            String::new(),
            default_date,
        ),
    };

    let mut subject = use_signal(move || seed_subject);
    let mut source = use_signal(move || seed_source);
    let mut pages = use_signal(move || seed_pages);
    let mut date = use_signal(move || seed_date);

    let pages_value = pages();
    let date_value = date().to_string();

    rsx! {
        section { class: "card setup-card",
            h2 { "1. Configure the activity" }
            form {
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    on_submit.call(SessionInfo::new(subject(), source(), pages(), date()));
                },
                div { class: "field",
                    label { r#for: "setup-subject", "Subject" }
                    select {
                        id: "setup-subject",
                        onchange: move |evt| {
                            if let Ok(parsed) = evt.value().parse::<Subject>() {
                                subject.set(parsed);
                            }
                        },
                        for option in Subject::ALL {
                            option {
                                value: "{option.as_str()}",
                                selected: option == subject(),
                                "{option.as_str()}"
                            }
                        }
                    }
                }
                fieldset { class: "field",
                    legend { "Where was the activity done?" }
                    for option in SourceType::ALL {
                        label { class: "radio",
                            input {
                                r#type: "radio",
                                name: "setup-source",
                                value: "{option.as_str()}",
                                checked: option == source(),
                                onchange: move |_| source.set(option),
                            }
                            "{option.display_label()}"
                        }
                    }
                }
                div { class: "field",
                    label { r#for: "setup-pages", "Pages / details" }
                    input {
                        id: "setup-pages",
                        r#type: "text",
                        placeholder: "e.g. p. 42-45",
                        value: "{pages_value}",
                        oninput: move |evt| pages.set(evt.value()),
                    }
                }
                div { class: "field",
                    label { r#for: "setup-date", "Collection date" }
                    input {
                        id: "setup-date",
                        r#type: "date",
                        value: "{date_value}",
                        onchange: move |evt| {
                            if let Ok(parsed) = NaiveDate::parse_from_str(&evt.value(), "%Y-%m-%d") {
                                date.set(parsed);
                            }
                        },
                    }
                }
                button {
                    class: "btn btn-primary",
                    id: "setup-submit",
                    r#type: "submit",
                    "Continue to roll call"
                }
            }
        }
    }
}

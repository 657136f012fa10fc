use dioxus::prelude::*;

/// Labelled text input with an optional inline validation message.
#[component]
pub fn TextField(
    label: &'static str,
    value: String,
    placeholder: Option<&'static str>,
    error: Option<&'static str>,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx!(
        div {
            class: "field",
            label {
                class: "label",
                span { class: "label-text", "{label}" }
            }
            input {
                class: if error.is_some() { "input input-error" } else { "input" },
                r#type: "text",
                value,
                placeholder: placeholder.unwrap_or_default(),
                oninput: move |evt| oninput.call(evt),
            }
            if let Some(message) = error {
                p { class: "field-error", "{message}" }
            }
        }
    )
}

/// Labelled select. The empty placeholder option is disabled unless
/// `allow_clear` is set, in which case it reads "None" and deselects.
#[component]
pub fn SelectField(
    label: &'static str,
    value: String,
    options: Vec<String>,
    error: Option<&'static str>,
    allow_clear: Option<bool>,
    onchange: EventHandler<FormEvent>,
) -> Element {
    let allow_clear = allow_clear.unwrap_or(false);

    rsx!(
        div {
            class: "field",
            label {
                class: "label",
                span { class: "label-text", "{label}" }
            }
            select {
                class: if error.is_some() { "select input-error" } else { "select" },
                value: "{value}",
                onchange: move |evt| onchange.call(evt),
                option {
                    value: "",
                    disabled: !allow_clear,
                    selected: value.is_empty(),
                    if allow_clear { "None" } else { "Choose..." }
                }
                for option in options {
                    option {
                        key: "{option}",
                        value: "{option}",
                        selected: option == value,
                        "{option}"
                    }
                }
            }
            if let Some(message) = error {
                p { class: "field-error", "{message}" }
            }
        }
    )
}

/// Labelled multi-line input.
#[component]
pub fn TextAreaField(
    label: &'static str,
    value: String,
    placeholder: Option<&'static str>,
    error: Option<&'static str>,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx!(
        div {
            class: "field",
            label {
                class: "label",
                span { class: "label-text", "{label}" }
            }
            textarea {
                class: if error.is_some() { "textarea input-error" } else { "textarea" },
                value,
                placeholder: placeholder.unwrap_or_default(),
                oninput: move |evt| oninput.call(evt),
            }
            if let Some(message) = error {
                p { class: "field-error", "{message}" }
            }
        }
    )
}

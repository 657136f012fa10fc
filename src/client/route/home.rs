use dioxus::prelude::*;

use crate::{
    client::{
        component::{Page, SelectField, Stepper, TextAreaField, TextField},
        constant::SITE_NAME,
        form::{validate::offered_departments, Field, Screen, Step, Wizard},
    },
    model::{application::YEAR_LEVELS, faculty::Faculty},
};

#[cfg(feature = "web")]
use crate::client::api::submit_application;

#[component]
pub fn Home() -> Element {
    let wizard = use_signal(Wizard::new);

    let screen = wizard.read().screen;

    rsx! {
        Title { "Apply - {SITE_NAME}" }
        Page {
            class: "centered",
            match screen {
                Screen::Welcome => rsx!(WelcomeCard { wizard }),
                Screen::Form => rsx!(WizardCard { wizard }),
                Screen::Success => rsx!(SuccessCard {}),
            }
        }
    }
}

#[component]
fn WelcomeCard(wizard: Signal<Wizard>) -> Element {
    rsx!(
        div {
            class: "card welcome-card",
            h1 { "Join {SITE_NAME}" }
            p {
                "Apply to one of our departments. The application takes about "
                "five minutes and you can review everything before submitting."
            }
            button {
                class: "btn btn-primary",
                onclick: move |_| wizard.with_mut(|w| w.start()),
                "Start Application"
            }
        }
    )
}

#[component]
fn SuccessCard() -> Element {
    rsx!(
        div {
            class: "card welcome-card",
            h1 { "Application Received" }
            p {
                "Thanks for applying! We will review your application and "
                "reach out over your university email."
            }
        }
    )
}

#[component]
fn WizardCard(wizard: Signal<Wizard>) -> Element {
    let step = wizard.read().step;
    let submitting = wizard.read().submitting;

    rsx!(
        div {
            class: "card wizard-card",
            Stepper { current: step }
            h2 { "{step.title()}" }
            p { class: "step-subtitle", "{step.subtitle()}" }

            match step {
                Step::Personal => rsx!(PersonalStep { wizard }),
                Step::University => rsx!(UniversityStep { wizard }),
                Step::Documents => rsx!(DocumentsStep { wizard }),
                Step::Preferences => rsx!(PreferencesStep { wizard }),
                Step::Extra => rsx!(ExtraStep { wizard }),
                Step::Review => rsx!(ReviewStep { wizard }),
            }

            div {
                class: "wizard-nav",
                if step.prev().is_some() {
                    button {
                        class: "btn btn-outline",
                        disabled: submitting,
                        onclick: move |_| wizard.with_mut(|w| w.back()),
                        "Back"
                    }
                }
                if step == Step::Review {
                    button {
                        class: "btn btn-primary",
                        disabled: submitting,
                        onclick: move |_| submit(wizard),
                        if submitting { "Submitting..." } else { "Submit Application" }
                    }
                } else {
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| {
                            wizard.with_mut(|w| w.next());
                        },
                        if step == Step::Extra { "Review" } else { "Next" }
                    }
                }
            }
        }
    )
}

/// Kicks off the network call once the final validation pass is clean.
fn submit(mut wizard: Signal<Wizard>) {
    let Some(payload) = wizard.with_mut(|w| w.begin_submit()) else {
        return;
    };

    #[cfg(feature = "web")]
    spawn(async move {
        match submit_application(&payload).await {
            Ok(_) => wizard.with_mut(|w| w.finish_success()),
            Err(err) => wizard.with_mut(|w| w.fail_submit(err.message)),
        }
    });

    #[cfg(not(feature = "web"))]
    let _ = payload;
}

#[component]
fn PersonalStep(wizard: Signal<Wizard>) -> Element {
    let form = wizard.read().form.clone();
    let name_error = wizard.read().error_for(Field::FullName);
    let email_error = wizard.read().error_for(Field::Email);
    let id_error = wizard.read().error_for(Field::StudentId);

    rsx!(
        TextField {
            label: "Full Name",
            value: form.full_name,
            placeholder: "First Middle Last",
            error: name_error,
            oninput: move |evt: FormEvent| wizard.with_mut(|w| w.form.full_name = evt.value()),
        }
        TextField {
            label: "University Email",
            value: form.email,
            placeholder: "name2398765@miuegypt.edu.eg",
            error: email_error,
            oninput: move |evt: FormEvent| wizard.with_mut(|w| w.form.email = evt.value()),
        }
        TextField {
            label: "University ID",
            value: form.student_id,
            placeholder: "2023/37654",
            error: id_error,
            oninput: move |evt: FormEvent| wizard.with_mut(|w| w.form.student_id = evt.value()),
        }
    )
}

#[component]
fn UniversityStep(wizard: Signal<Wizard>) -> Element {
    let form = wizard.read().form.clone();
    let faculty_error = wizard.read().error_for(Field::Faculty);
    let year_error = wizard.read().error_for(Field::Year);

    let faculties: Vec<String> = Faculty::ALL.iter().map(|f| f.as_str().to_string()).collect();
    let years: Vec<String> = YEAR_LEVELS
        .iter()
        .map(|(label, _)| label.to_string())
        .collect();

    rsx!(
        SelectField {
            label: "Faculty",
            value: form.faculty,
            options: faculties,
            error: faculty_error,
            onchange: move |evt: FormEvent| {
                wizard.with_mut(|w| w.form.set_faculty(&evt.value()))
            },
        }
        SelectField {
            label: "Academic Year",
            value: form.year,
            options: years,
            error: year_error,
            onchange: move |evt: FormEvent| wizard.with_mut(|w| w.form.year = evt.value()),
        }
    )
}

#[component]
fn DocumentsStep(wizard: Signal<Wizard>) -> Element {
    let form = wizard.read().form.clone();
    let schedule_error = wizard.read().error_for(Field::Schedule);
    let phone_error = wizard.read().error_for(Field::Phone);

    rsx!(
        div {
            class: "field",
            label {
                class: "label",
                span { class: "label-text", "Class Schedule (PDF, optional)" }
            }
            input {
                class: "input",
                r#type: "file",
                accept: ".pdf",
                onchange: move |evt| {
                    // Browsers report a fake path; keep only the filename.
                    let value = evt.value();
                    let name = value.rsplit(['/', '\\']).next().unwrap_or("").to_string();
                    wizard.with_mut(|w| {
                        w.form.schedule = if name.is_empty() { None } else { Some(name) }
                    });
                },
            }
            if let Some(name) = form.schedule {
                p { class: "field-hint", "Selected: {name}" }
            }
            if let Some(message) = schedule_error {
                p { class: "field-error", "{message}" }
            }
        }
        TextField {
            label: "Phone Number",
            value: form.phone,
            placeholder: "01012345678",
            error: phone_error,
            oninput: move |evt: FormEvent| wizard.with_mut(|w| w.form.set_phone(&evt.value())),
        }
    )
}

#[component]
fn PreferencesStep(wizard: Signal<Wizard>) -> Element {
    let form = wizard.read().form.clone();
    let first_error = wizard.read().error_for(Field::FirstChoice);
    let second_error = wizard.read().error_for(Field::SecondChoice);

    let offered: Vec<String> = offered_departments(&form.faculty)
        .into_iter()
        .map(|d| d.name.to_string())
        .collect();

    rsx!(
        SelectField {
            label: "First Choice Department",
            value: form.first_choice,
            options: offered.clone(),
            error: first_error,
            onchange: move |evt: FormEvent| {
                wizard.with_mut(|w| w.form.first_choice = evt.value())
            },
        }
        SelectField {
            label: "Second Choice Department (optional)",
            value: form.second_choice,
            options: offered,
            error: second_error,
            allow_clear: true,
            onchange: move |evt: FormEvent| {
                wizard.with_mut(|w| w.form.second_choice = evt.value())
            },
        }
    )
}

#[component]
fn ExtraStep(wizard: Signal<Wizard>) -> Element {
    let form = wizard.read().form.clone();
    let skills_error = wizard.read().error_for(Field::Skills);
    let motivation_error = wizard.read().error_for(Field::Motivation);

    rsx!(
        TextAreaField {
            label: "Skills",
            value: form.skills,
            placeholder: "What are you good at?",
            error: skills_error,
            oninput: move |evt: FormEvent| wizard.with_mut(|w| w.form.skills = evt.value()),
        }
        TextAreaField {
            label: "Motivation",
            value: form.motivation,
            placeholder: "Why do you want to join?",
            error: motivation_error,
            oninput: move |evt: FormEvent| wizard.with_mut(|w| w.form.motivation = evt.value()),
        }
    )
}

#[component]
fn ReviewStep(wizard: Signal<Wizard>) -> Element {
    let form = wizard.read().form.clone();
    let submit_error = wizard.read().submit_error.clone();

    let second_choice = if form.second_choice.is_empty() {
        "None".to_string()
    } else {
        form.second_choice
    };
    let schedule = form.schedule.unwrap_or_else(|| "Not provided".to_string());

    rsx!(
        dl {
            class: "review-list",
            ReviewRow { label: "Full Name", value: form.full_name }
            ReviewRow { label: "Email", value: form.email }
            ReviewRow { label: "University ID", value: form.student_id }
            ReviewRow { label: "Faculty", value: form.faculty }
            ReviewRow { label: "Year", value: form.year }
            ReviewRow { label: "Schedule", value: schedule }
            ReviewRow { label: "Phone", value: form.phone }
            ReviewRow { label: "First Choice", value: form.first_choice }
            ReviewRow { label: "Second Choice", value: second_choice }
            ReviewRow { label: "Skills", value: form.skills }
            ReviewRow { label: "Motivation", value: form.motivation }
        }
        if let Some(message) = submit_error {
            p { class: "submit-error", "{message}" }
        }
    )
}

#[component]
fn ReviewRow(label: &'static str, value: String) -> Element {
    rsx!(
        div {
            class: "review-row",
            dt { "{label}" }
            dd { "{value}" }
        }
    )
}

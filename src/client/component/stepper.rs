use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaCheck, Icon};

use crate::client::form::Step;

/// Progress strip across the top of the wizard. Completed steps are
/// highlighted; the review "step" appears last.
#[component]
pub fn Stepper(current: Step) -> Element {
    let steps = Step::DATA_STEPS.iter().chain(std::iter::once(&Step::Review));

    rsx!(
        ol {
            class: "stepper",
            for step in steps {
                li {
                    key: "{step.title()}",
                    class: if step.index() < current.index() {
                        "step step-done"
                    } else if step.index() == current.index() {
                        "step step-current"
                    } else {
                        "step"
                    },
                    span {
                        class: "step-marker",
                        if step.index() < current.index() {
                            Icon {
                                width: 12,
                                height: 12,
                                icon: FaCheck
                            }
                        } else {
                            "{step.index() + 1}"
                        }
                    }
                    span { class: "step-label", "{step.title()}" }
                }
            }
        }
    )
}

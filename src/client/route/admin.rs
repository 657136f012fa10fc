use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{component::Page, constant::SITE_NAME, model::error::ApiError},
    model::{
        application::{year_label, ApplicationListDto, ApplicationStatus},
        department::department_name_by_id,
    },
};

#[cfg(feature = "web")]
use crate::client::api::{delete_application, get_applications, update_application_status};

#[component]
pub fn Admin() -> Element {
    let mut applications = use_signal(|| None::<Result<ApplicationListDto, ApiError>>);
    let mut reload = use_signal(|| 0u32);

    // Fetch applications on first load and after every action
    #[cfg(feature = "web")]
    {
        let future = use_resource(move || {
            let _ = reload();
            async move { get_applications().await }
        });

        match &*future.read_unchecked() {
            Some(Ok(list)) => applications.set(Some(Ok(list.clone()))),
            Some(Err(err)) => {
                tracing::error!("Failed to fetch applications: {}", err);
                applications.set(Some(Err(err.clone())));
            }
            None => (),
        }
    }

    let set_status = move |id: i32, status: ApplicationStatus| {
        #[cfg(feature = "web")]
        spawn(async move {
            match update_application_status(id, status).await {
                Ok(_) => reload += 1,
                Err(err) => tracing::error!("Failed to update application {}: {}", id, err),
            }
        });

        #[cfg(not(feature = "web"))]
        let _ = (id, status);
    };

    let remove = move |id: i32| {
        #[cfg(feature = "web")]
        spawn(async move {
            match delete_application(id).await {
                Ok(_) => reload += 1,
                Err(err) => tracing::error!("Failed to delete application {}: {}", id, err),
            }
        });

        #[cfg(not(feature = "web"))]
        let _ = id;
    };

    rsx! {
        Title { "Applications - {SITE_NAME}" }
        Page {
            h1 { "Applications" }
            match applications() {
                Some(Ok(list)) => rsx!(
                    p {
                        class: "application-count",
                        "{list.count} applications"
                    }
                    table {
                        class: "application-table",
                        thead {
                            tr {
                                th { "ID" }
                                th { "Applicant" }
                                th { "Faculty" }
                                th { "Year" }
                                th { "Departments" }
                                th { "Phone" }
                                th { "Status" }
                                th { "Actions" }
                            }
                        }
                        tbody {
                            for app in list.data {
                                tr {
                                    key: "{app.application_id}",
                                    td { "{app.university_id}" }
                                    td {
                                        p { "{app.full_name}" }
                                        p { class: "muted", "{app.email}" }
                                    }
                                    td { "{app.faculty}" }
                                    td { {year_label(app.year).unwrap_or("Unknown")} }
                                    td {
                                        p { {department_name_by_id(app.first_choice).unwrap_or("Unknown")} }
                                        if let Some(second) = app.second_choice {
                                            p { class: "muted", {department_name_by_id(second).unwrap_or("Unknown")} }
                                        }
                                    }
                                    td { "{app.phone_number}" }
                                    td {
                                        span {
                                            class: "status status-{app.status}",
                                            "{app.status}"
                                        }
                                    }
                                    td {
                                        class: "actions",
                                        {
                                            let id = app.application_id;
                                            rsx!(
                                                button {
                                                    class: "btn btn-small btn-approve",
                                                    onclick: move |_| set_status(id, ApplicationStatus::Approved),
                                                    "Approve"
                                                }
                                                button {
                                                    class: "btn btn-small btn-reject",
                                                    onclick: move |_| set_status(id, ApplicationStatus::Rejected),
                                                    "Reject"
                                                }
                                                button {
                                                    class: "btn btn-small btn-delete",
                                                    onclick: move |_| remove(id),
                                                    "Delete"
                                                }
                                            )
                                        }
                                    }
                                }
                            }
                        }
                    }
                ),
                Some(Err(err)) => rsx!(
                    p { class: "submit-error", "Failed to load applications: {err}" }
                ),
                None => rsx!(
                    p { "Loading..." }
                ),
            }
        }
    }
}

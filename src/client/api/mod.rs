#[cfg(feature = "web")]
pub mod helper;

#[cfg(feature = "web")]
pub mod application;

#[cfg(feature = "web")]
pub use application::{
    delete_application, get_applications, submit_application, update_application_status,
};

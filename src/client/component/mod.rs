pub mod field;
pub mod layout;
pub mod page;
pub mod stepper;

pub use field::{SelectField, TextAreaField, TextField};
pub use layout::Layout;
pub use page::Page;
pub use stepper::Stepper;

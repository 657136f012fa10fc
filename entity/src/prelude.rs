pub use super::application::Entity as Application;
pub use super::board_member::Entity as BoardMember;
pub use super::department::Entity as Department;
pub use super::member::Entity as Member;

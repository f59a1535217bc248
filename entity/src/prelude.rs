pub use super::activity::Entity as Activity;
pub use super::city::Entity as City;
pub use super::complaint::Entity as Complaint;
pub use super::department::Entity as Department;
pub use super::zone::Entity as Zone;

pub use super::shows::Entity as Shows;

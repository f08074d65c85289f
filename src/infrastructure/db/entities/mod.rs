pub mod design;

pub use design::Entity as Design;

pub mod design;

pub use design::{DesignRepository, NewDesign};

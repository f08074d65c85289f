mod design;

pub use design::*;

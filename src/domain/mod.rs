pub mod entities;
pub mod errors;
pub mod naming;
pub mod resources;
pub mod validation;
pub mod value_objects;

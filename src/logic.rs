pub mod collision;
pub mod editor;
pub mod suggestion;
pub mod sufficiency;
pub mod transform;

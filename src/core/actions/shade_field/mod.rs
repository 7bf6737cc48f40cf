pub mod ports;
#[allow(clippy::module_inception)]
pub mod shade_field;

#[allow(clippy::module_inception)]
pub mod render_field;
pub mod render_field_parallel_rayon;

pub mod cancellation;
pub mod render_field;
pub mod shade_field;

//! Renderers from API values to HTML fragments.

pub mod detail;
pub mod insights;
pub mod result;
pub mod updates;

pub use detail::render_country_detail;
pub use insights::render_insights;
pub use result::render_check_result;
pub use updates::render_updates;

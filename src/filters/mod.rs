pub mod apply;
pub mod criteria;

pub use apply::apply_filter;
pub use criteria::{QuickFilter, StudentFilter};

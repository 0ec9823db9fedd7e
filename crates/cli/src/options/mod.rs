mod format_options;
mod request_options;
mod scope_options;

pub use format_options::FormatOptions;
pub use request_options::RequestOptions;
pub use scope_options::ScopeOptions;

pub mod use_query_params;
pub mod use_title;

pub use use_query_params::use_query_params;
pub use use_title::use_title;

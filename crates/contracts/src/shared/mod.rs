pub mod navigation;
pub mod query_string;

pub mod api;
pub mod context;
pub mod flow;
pub mod guard;
pub mod storage;

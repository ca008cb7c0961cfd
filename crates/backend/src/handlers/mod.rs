pub mod a001_catalog;
pub mod a002_cart;

pub mod catalog_page;
pub mod filter_sidebar;
pub mod sellers_list;

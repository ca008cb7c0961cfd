pub mod cart_page;

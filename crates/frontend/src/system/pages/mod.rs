pub mod admin;
pub mod home;
pub mod login;
pub mod seller_dashboard;

pub mod api_utils;
pub mod icons;
pub mod navigator;
pub mod request_generation;

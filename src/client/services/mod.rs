pub mod clipboard_service;
pub mod prediction_service;

pub mod docs;
pub mod status;

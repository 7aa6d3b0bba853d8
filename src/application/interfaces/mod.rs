/// Search service interface
pub mod search;

pub mod config;
pub mod get;
pub mod ls;
pub mod mkdir;
pub mod rm;
pub mod search_path;
pub mod tree;

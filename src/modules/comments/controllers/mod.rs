pub mod comment_controller;

pub use comment_controller::configure;

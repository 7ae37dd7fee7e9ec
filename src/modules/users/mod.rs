// Users module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{CreateUserRequest, UpdateUserRequest, User, UserResponse};
pub use repositories::{SqliteUserRepository, UserRepository};
pub use services::UserService;

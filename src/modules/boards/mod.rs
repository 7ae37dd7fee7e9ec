// Boards module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Board, BoardResponse, CreateBoardRequest, UpdateBoardRequest};
pub use repositories::{BoardRepository, SqliteBoardRepository};
pub use services::BoardService;

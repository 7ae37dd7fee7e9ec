mod board;

pub use board::{Board, BoardResponse, CreateBoardRequest, UpdateBoardRequest};

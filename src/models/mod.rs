pub mod author;
pub mod game;
pub mod review;

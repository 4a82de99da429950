pub mod authors;
pub mod games;

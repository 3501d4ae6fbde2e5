pub mod dto;
pub mod entities;

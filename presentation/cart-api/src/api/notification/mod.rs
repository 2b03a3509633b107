pub mod dto;
pub mod feed;
pub mod routes;

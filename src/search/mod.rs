pub mod controller;
pub mod filter;
pub mod interface;
pub mod model;

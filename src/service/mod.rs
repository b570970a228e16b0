pub mod controller;
pub mod listing;
pub mod render;
pub mod search;

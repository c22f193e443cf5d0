pub mod actions;
pub mod api;
pub mod config;
pub mod models;
pub mod pages;
pub mod store;
pub mod validation;
pub mod views;

pub mod banner;
pub mod config;
pub mod consts;
pub mod error;
pub mod generator;
pub mod prompts;
pub mod provider;
pub mod render;
pub mod service;
pub mod spinner;
pub mod store;
pub mod story;

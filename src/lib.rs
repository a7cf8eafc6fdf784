pub mod config;
pub mod dto;
pub mod handlers;
pub mod infer;
pub mod prompts;
pub mod service;
pub mod state;

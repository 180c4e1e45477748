pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod db;
pub mod global;
pub mod history;
pub mod normalizer;
pub mod practice;
pub mod recognition;
pub mod scoring;

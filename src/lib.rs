pub mod app_config;
pub mod audit;
pub mod cache;
pub mod db;
pub mod flags;
pub mod flash;
pub mod metrics;
pub mod middleware;
pub mod orm;
pub mod session;
pub mod user;
pub mod web;

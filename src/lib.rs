pub mod config;
pub mod db;
pub mod models;
pub mod openapi;
pub mod routes;

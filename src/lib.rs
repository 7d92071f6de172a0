//! Per-user to-do list server. Clients push and pull JSON arrays of to-do items keyed
//! by username; the whole data set lives in a single JSON file on disk.

pub mod app_env;
pub mod dto;
pub mod entity;
pub mod logging;
pub mod persistence;
pub mod report;
pub mod routes;
pub mod routing_utils;

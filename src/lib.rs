// Library for tests to access modules

pub mod classifier;
pub mod collector;
pub mod config;
pub mod gateway;
pub mod models;
pub mod routes;
pub mod stats_tracker;
pub mod worker;

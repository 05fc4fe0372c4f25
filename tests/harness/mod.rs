//! Shared fixtures for integration tests.

#![allow(dead_code)]

pub mod temp_db;

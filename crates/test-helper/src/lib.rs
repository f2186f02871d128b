//! Shared fixtures for the workspace's tests.

pub mod frames;
pub mod logger;

//! Integration tests

pub mod access_control_tests;
pub mod auth_flow_tests;
pub mod cross_instance_tests;

mod auth_flow_tests;
mod auth_tests;
mod booking_tests;
mod contact_tests;
mod favorites_tests;
mod function_tests;
mod host_tests;
mod pages_tests;

pub mod next_route;
pub mod quiz_requests;
pub mod start_route;
pub mod submit_route;

pub mod health_route;
pub mod quiz;

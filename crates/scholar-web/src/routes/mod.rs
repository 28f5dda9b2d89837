mod gateway;
mod health;
mod page;

pub use gateway::gateway_routes;
pub use health::health_routes;
pub use page::page_routes;

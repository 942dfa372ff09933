pub mod health;
pub mod model;
pub mod prediction;
pub mod server;

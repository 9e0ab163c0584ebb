pub mod derived;
pub mod factory;
pub mod health;

pub use derived::derived_handler;
pub use factory::factory_handler;
pub use health::health_handler;

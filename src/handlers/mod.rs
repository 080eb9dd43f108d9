pub mod news;
pub mod query;
pub mod services;
pub mod staff;
pub mod topics;
pub mod welcome;

pub mod audit;
pub mod details;
pub mod documents;
pub mod history;
pub mod services;

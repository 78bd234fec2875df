// Module exports for models

pub mod event;
pub mod layout;
pub mod settings;

// Settings service
// Loads and saves the layout configuration file

mod service;

pub use service::SettingsService;

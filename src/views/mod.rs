pub mod chat;
pub mod config_panel;

pub use chat::ChatView;
pub use config_panel::ConfigPanel;

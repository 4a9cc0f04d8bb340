pub mod data_table;
pub mod empty_state;
pub mod error;
pub mod layout;
pub mod modal;

pub mod action_cell;
pub mod approval_slip;
pub mod assets_table;
pub mod filter;
pub mod print_modal;

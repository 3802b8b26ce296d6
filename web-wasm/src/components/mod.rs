pub mod header;
pub mod show_grid;
pub mod sort_select;
pub mod spinner;

pub mod code_block;
pub mod forms;
pub mod header;
pub mod tip;
pub mod title_band;

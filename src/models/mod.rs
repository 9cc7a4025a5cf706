pub mod display_mode;
pub mod set_summary;
pub mod track;

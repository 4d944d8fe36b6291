pub mod doctor;
pub mod output;
pub mod rename;
pub mod set;
pub mod show;
pub mod tokens;

pub mod ascii;
pub mod config_file;
pub mod seed;

pub mod use_endpoint;
pub mod use_energy;
pub mod use_palette;
pub mod use_refresh;

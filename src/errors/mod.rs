pub mod error;
mod mapping_indy;

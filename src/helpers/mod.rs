pub mod locality;

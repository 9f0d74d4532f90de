pub mod common;

mod fetch_locators;

pub mod backdrop;
pub mod common;
pub mod demo;
pub mod features;
pub mod footer;
pub mod hero;
pub mod how_it_works;
pub mod navigation;
pub mod team;

pub mod intro;
pub mod bits;
pub mod converter;
pub mod files;
pub mod quiz;

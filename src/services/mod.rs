pub mod origin;
pub mod upstream;

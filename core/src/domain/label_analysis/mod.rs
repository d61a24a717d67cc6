pub mod entities;
pub mod highlight;
pub mod parser;
pub mod ports;
pub mod prompt;
pub mod scoring;
pub mod services;
pub mod text;
pub mod value_objects;

pub mod db;
pub mod llm;
pub mod ocr;
pub mod product;

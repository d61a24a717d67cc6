pub mod tesseract_engine;

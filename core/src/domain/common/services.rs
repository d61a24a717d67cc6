/// Aggregate service carrying one adapter per port.
///
/// Each domain area implements its service trait on this struct in its own
/// `services.rs`, so a single instance backs the whole API surface.
#[derive(Debug, Clone)]
pub struct Service<P, L, O> {
    pub product_repository: P,
    pub llm_client: L,
    pub ocr_engine: O,
}

impl<P, L, O> Service<P, L, O> {
    pub fn new(product_repository: P, llm_client: L, ocr_engine: O) -> Self {
        Self {
            product_repository,
            llm_client,
            ocr_engine,
        }
    }
}

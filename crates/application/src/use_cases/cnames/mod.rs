pub mod resolve_batch;

pub use resolve_batch::{BatchSummary, ResolveCnamesUseCase};

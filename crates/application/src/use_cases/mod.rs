pub mod cnames;

pub use cnames::{BatchSummary, ResolveCnamesUseCase};

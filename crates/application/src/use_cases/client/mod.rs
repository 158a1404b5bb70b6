mod drive_queries;

pub use drive_queries::{ClientDriverUseCase, FailedHop, ResolutionOutcome, ResolutionState};

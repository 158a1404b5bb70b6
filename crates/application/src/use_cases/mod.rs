pub mod client;
pub mod root;
pub mod tld;

// Re-export use cases
pub use client::{ClientDriverUseCase, FailedHop, ResolutionOutcome, ResolutionState};
pub use root::RootResolverUseCase;
pub use tld::AuthoritativeResolverUseCase;

mod resolve_root_query;

pub use resolve_root_query::RootResolverUseCase;

mod resolve_authoritative_query;

pub use resolve_authoritative_query::AuthoritativeResolverUseCase;

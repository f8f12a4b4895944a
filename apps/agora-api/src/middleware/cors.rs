use actix_cors::Cors;

/// Cross-origin requests are accepted from any origin, with any method and header.
pub fn cors_policy() -> Cors {
    Cors::permissive()
}

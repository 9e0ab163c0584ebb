// Route path constants - single source of truth for all API paths

pub const HEALTH: &str = "/health";
pub const FACTORY: &str = "/v1";
pub const DERIVED: &str = "/v2";
pub const OPENAPI: &str = "/api-docs/openapi.json";

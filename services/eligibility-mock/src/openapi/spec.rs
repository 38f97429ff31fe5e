use serde_json::{json, Map, Value};

use crate::catalog::FixtureCatalog;
use crate::routes::health::SERVICE_NAME;

/// OpenAPI 3 document generated from the catalog, one path per fixture with the
/// canned body as its example.
pub fn openapi_spec(catalog: &FixtureCatalog) -> Value {
    let mut paths = Map::new();
    paths.insert("/".into(), json!({ "get": { "summary": "Catalog introspection", "responses": { "200": { "description": "ok" } } } }));
    paths.insert("/health".into(), json!({ "get": { "summary": "Liveness", "responses": { "200": { "description": "ok" } } } }));

    for fixture in catalog.fixtures() {
        let example = fixture.payload.to_value().unwrap_or(Value::Null);
        paths.insert(
            fixture.path(),
            json!({
                "get": {
                    "tags": [fixture.domain.name()],
                    "operationId": format!("{}_{}", fixture.domain.route_segment(), fixture.id.replace('-', "_")),
                    "summary": fixture.description,
                    "responses": {
                        "200": {
                            "description": fixture.kind().name(),
                            "content": { "application/json": { "example": example } }
                        }
                    }
                }
            }),
        );
    }

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": format!("{SERVICE_NAME} Service"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": "Mock API service for healthcare endpoints"
        },
        "paths": paths
    })
}

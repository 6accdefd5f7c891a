//! OpenAPI 文档

use axum::response::Json;
use serde_json::{json, Value};

pub async fn openapi_document() -> Json<Value> {
    Json(document())
}

pub fn document() -> Value {
    json!({
        "openapi": "3.0.1",
        "info": {
            "title": "shopfront API",
            "version": env!("CARGO_PKG_VERSION")
        },
        "paths": {
            "/health": {
                "get": {
                    "operationId": "HealthCheck",
                    "responses": {
                        "200": json_response("#/components/schemas/HealthResponse")
                    }
                }
            },
            "/products": {
                "get": {
                    "operationId": "GetProducts",
                    "responses": {
                        "200": {
                            "description": "OK",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "array",
                                        "items": { "$ref": "#/components/schemas/Product" }
                                    }
                                }
                            }
                        }
                    }
                }
            },
            "/products/{id}": {
                "get": {
                    "operationId": "GetProductById",
                    "parameters": [{
                        "name": "id",
                        "in": "path",
                        "required": true,
                        "schema": { "type": "integer", "format": "int32" }
                    }],
                    "responses": {
                        "200": json_response("#/components/schemas/Product"),
                        "400": { "description": "Bad Request" },
                        "404": { "description": "Not Found" }
                    }
                }
            },
            "/instance": {
                "get": {
                    "operationId": "GetInstance",
                    "responses": {
                        "200": json_response("#/components/schemas/InstanceInfo")
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "Product": {
                    "type": "object",
                    "required": ["id", "name", "description", "price"],
                    "properties": {
                        "id": { "type": "integer", "format": "int32" },
                        "name": { "type": "string" },
                        "description": { "type": "string" },
                        "price": { "type": "number", "format": "double" }
                    }
                },
                "InstanceInfo": {
                    "type": "object",
                    "required": ["instanceId", "hostname", "startupTime", "uptime"],
                    "properties": {
                        "instanceId": { "type": "string" },
                        "hostname": { "type": "string" },
                        "startupTime": { "type": "string", "format": "date-time" },
                        "uptime": { "type": "string", "example": "01:02:05" }
                    }
                },
                "HealthResponse": {
                    "type": "object",
                    "required": ["status", "timestamp"],
                    "properties": {
                        "status": { "type": "string" },
                        "timestamp": { "type": "string", "format": "date-time" }
                    }
                }
            }
        }
    })
}

fn json_response(schema_ref: &str) -> Value {
    json!({
        "description": "OK",
        "content": {
            "application/json": {
                "schema": { "$ref": schema_ref }
            }
        }
    })
}

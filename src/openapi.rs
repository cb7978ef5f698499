//! OpenAPI 3 description of the HTTP API.
//!
//! Served at `GET /openapi.json` so chat assistants can import the service
//! as an action. Titles and summaries keep the service's published language.

use serde_json::{json, Value};

pub const API_TITLE: &str = "OCNOS Article Service";
pub const API_DESCRIPTION: &str =
    "Servicio para custom GPT: obtiene metadatos y secciones de artículos OCNOS";
pub const API_VERSION: &str = "1.0";

/// Builds the OpenAPI document for the three article endpoints.
pub fn openapi_document() -> Value {
    json!({
        "openapi": "3.1.0",
        "info": {
            "title": API_TITLE,
            "description": API_DESCRIPTION,
            "version": API_VERSION
        },
        "paths": {
            "/list_articles": {
                "get": {
                    "summary": "Listar títulos de artículos disponibles",
                    "operationId": "list_articles",
                    "responses": {
                        "200": json_response(
                            "Artículos disponibles",
                            json!({
                                "type": "array",
                                "items": {"$ref": "#/components/schemas/ArticleSummary"}
                            })
                        ),
                        "500": error_response("Error al cargar JSON")
                    }
                }
            },
            "/get_metadata": {
                "post": {
                    "summary": "Obtener datos bibliográficos del artículo",
                    "operationId": "get_metadata",
                    "requestBody": request_body("MetadataRequest"),
                    "responses": {
                        "200": json_response(
                            "Metadatos del artículo",
                            schema_ref("ArticleMetadata")
                        ),
                        "404": error_response("Artículo no encontrado"),
                        "422": error_response("Cuerpo de la petición inválido"),
                        "500": error_response("Error al cargar JSON")
                    }
                }
            },
            "/get_section": {
                "post": {
                    "summary": "Recuperar párrafos de una sección",
                    "operationId": "get_section",
                    "requestBody": request_body("SectionRequest"),
                    "responses": {
                        "200": json_response(
                            "Párrafos de la sección",
                            schema_ref("SectionResponse")
                        ),
                        "404": error_response("Artículo, abstract o sección no encontrados"),
                        "422": error_response("Cuerpo de la petición inválido"),
                        "500": error_response("Error al cargar JSON")
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "MetadataRequest": {
                    "type": "object",
                    "required": ["article_query"],
                    "properties": {
                        "article_query": {"type": "string", "title": "Article Query"}
                    }
                },
                "SectionRequest": {
                    "type": "object",
                    "required": ["article_query", "section"],
                    "properties": {
                        "article_query": {"type": "string", "title": "Article Query"},
                        "section": {"type": "string", "title": "Section"}
                    }
                },
                "ArticleSummary": {
                    "type": "object",
                    "properties": {
                        "id": {},
                        "title": {}
                    }
                },
                "ArticleMetadata": {
                    "type": "object",
                    "properties": {
                        "doi": {},
                        "title": {},
                        "authors": {},
                        "journal": {},
                        "date": {},
                        "keywords": {}
                    }
                },
                "SectionResponse": {
                    "type": "object",
                    "required": ["paragraphs"],
                    "properties": {
                        "paragraphs": {"type": "array", "items": {"type": "string"}}
                    }
                },
                "ErrorResponse": {
                    "type": "object",
                    "required": ["detail"],
                    "properties": {
                        "detail": {}
                    }
                }
            }
        }
    })
}

fn schema_ref(name: &str) -> Value {
    json!({"$ref": format!("#/components/schemas/{}", name)})
}

fn request_body(schema: &str) -> Value {
    json!({
        "required": true,
        "content": {"application/json": {"schema": schema_ref(schema)}}
    })
}

fn json_response(description: &str, schema: Value) -> Value {
    json!({
        "description": description,
        "content": {"application/json": {"schema": schema}}
    })
}

fn error_response(description: &str) -> Value {
    json_response(description, schema_ref("ErrorResponse"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_block() {
        let doc = openapi_document();
        assert_eq!(doc["info"]["title"], API_TITLE);
        assert_eq!(doc["info"]["version"], API_VERSION);
        assert!(doc["openapi"].as_str().unwrap().starts_with("3."));
    }

    #[test]
    fn test_every_ref_resolves() {
        fn collect_refs(value: &Value, out: &mut Vec<String>) {
            match value {
                Value::Object(map) => {
                    for (k, v) in map {
                        match (k.as_str(), v.as_str()) {
                            ("$ref", Some(target)) => out.push(target.to_string()),
                            _ => collect_refs(v, out),
                        }
                    }
                }
                Value::Array(items) => items.iter().for_each(|v| collect_refs(v, out)),
                _ => {}
            }
        }

        let doc = openapi_document();
        let mut refs = Vec::new();
        collect_refs(&doc, &mut refs);
        assert!(!refs.is_empty());
        for target in refs {
            let name = target.trim_start_matches("#/components/schemas/");
            assert!(
                doc["components"]["schemas"].get(name).is_some(),
                "dangling $ref {}",
                target
            );
        }
    }

    #[test]
    fn test_request_schemas_require_query_fields() {
        let doc = openapi_document();
        let schemas = &doc["components"]["schemas"];
        assert_eq!(schemas["MetadataRequest"]["required"], json!(["article_query"]));
        assert_eq!(
            schemas["SectionRequest"]["required"],
            json!(["article_query", "section"])
        );
    }
}

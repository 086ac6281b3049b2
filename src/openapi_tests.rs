#[cfg(test)]
mod tests {
    use crate::schemas::ApiDoc;
    use utoipa::OpenApi;

    #[test]
    fn test_openapi_schema_generation() {
        // Test that the OpenAPI schema can be generated without errors
        let openapi = ApiDoc::openapi();

        // Verify that the schema contains the expected components
        assert!(openapi.components.is_some());
        let components = openapi.components.as_ref().unwrap();

        // Check that the shared response schemas are properly defined
        assert!(components.schemas.contains_key("ErrorResponse"));
        assert!(components.schemas.contains_key("HealthResponse"));
        assert!(components.schemas.contains_key("UserResponse"));
        assert!(components.schemas.contains_key("FavoriteResponse"));

        // Verify that the schema can be serialized to JSON without errors
        let json_result = serde_json::to_string(&openapi);
        assert!(json_result.is_ok());
    }

    #[test]
    fn test_error_response_schema_structure() {
        let openapi = ApiDoc::openapi();
        let components = openapi.components.as_ref().unwrap();
        let error_response_schema = components.schemas.get("ErrorResponse").unwrap();

        // Verify ErrorResponse has the expected structure
        if let utoipa::openapi::RefOr::T(utoipa::openapi::schema::Schema::Object(obj)) =
            error_response_schema
        {
            let properties = &obj.properties;
            assert!(properties.contains_key("error"));
            assert!(properties.contains_key("code"));
            assert!(properties.contains_key("success"));
        } else {
            panic!("ErrorResponse should be an object schema");
        }
    }

    #[test]
    fn test_openapi_paths_cover_the_api_surface() {
        let openapi = ApiDoc::openapi();
        let paths = &openapi.paths.paths;

        for expected in [
            "/health",
            "/api/v1/auth/register",
            "/api/v1/auth/login",
            "/api/v1/auth/logout",
            "/api/v1/auth/protected",
            "/api/v1/users",
            "/api/v1/users/{user_id}",
            "/api/v1/people",
            "/api/v1/people/{person_id}",
            "/api/v1/planets",
            "/api/v1/planets/{planet_id}",
            "/api/v1/vehicles",
            "/api/v1/vehicles/{vehicle_id}",
            "/api/v1/users/{user_id}/favorites",
            "/api/v1/users/{user_id}/favorites/{kind}",
            "/api/v1/users/{user_id}/favorites/{kind}/{entity_id}",
        ] {
            assert!(paths.contains_key(expected), "missing path: {}", expected);
        }
    }

    #[test]
    fn test_register_documents_conflict_response() {
        let openapi = ApiDoc::openapi();
        let register_path = openapi.paths.paths.get("/api/v1/auth/register").unwrap();
        let register_post = register_path
            .operations
            .get(&utoipa::openapi::PathItemType::Post)
            .unwrap();

        let responses = &register_post.responses;
        assert!(responses.responses.contains_key("201"));
        assert!(responses.responses.contains_key("400"));
        assert!(responses.responses.contains_key("409"));
    }
}

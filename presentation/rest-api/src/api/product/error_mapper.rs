use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::errors::RepositoryError;
use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            ProductError::NameEmpty
            | ProductError::InvalidPrice
            | ProductError::InvalidPagination => (StatusCode::BAD_REQUEST, "ValidationError"),
            ProductError::NotFound | ProductError::Repository(RepositoryError::NotFound) => {
                (StatusCode::NOT_FOUND, "NotFound")
            }
            ProductError::Repository(RepositoryError::StorageUnavailable) => {
                (StatusCode::SERVICE_UNAVAILABLE, "ServiceUnavailable")
            }
            ProductError::Repository(RepositoryError::DatabaseError) | ProductError::Cache(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "InternalError")
            }
        };

        (status, Json(ErrorResponse::new(name, self.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::cache::CacheError;

    fn map(err: ProductError) -> (u16, String, String) {
        let (status, json) = err.into_error_response();
        (status.as_u16(), json.0.name, json.0.message)
    }

    #[test]
    fn should_map_validation_errors_to_bad_request() {
        assert_eq!(
            map(ProductError::InvalidPagination),
            (
                400,
                "ValidationError".to_string(),
                "product.missing_query_parameters".to_string()
            )
        );
        assert_eq!(map(ProductError::NameEmpty).0, 400);
        assert_eq!(map(ProductError::InvalidPrice).0, 400);
    }

    #[test]
    fn should_map_not_found_to_404() {
        assert_eq!(
            map(ProductError::NotFound),
            (404, "NotFound".to_string(), "product.not_found".to_string())
        );
        assert_eq!(map(ProductError::Repository(RepositoryError::NotFound)).0, 404);
    }

    #[test]
    fn should_map_storage_unavailable_to_503() {
        assert_eq!(
            map(ProductError::Repository(RepositoryError::StorageUnavailable)),
            (
                503,
                "ServiceUnavailable".to_string(),
                "repository.storage_unavailable".to_string()
            )
        );
    }

    #[test]
    fn should_map_remaining_failures_to_500() {
        assert_eq!(
            map(ProductError::Repository(RepositoryError::DatabaseError)),
            (
                500,
                "InternalError".to_string(),
                "repository.database_error".to_string()
            )
        );
        assert_eq!(
            map(ProductError::Cache(CacheError::Unavailable)),
            (
                500,
                "InternalError".to_string(),
                "cache.unavailable".to_string()
            )
        );
    }
}

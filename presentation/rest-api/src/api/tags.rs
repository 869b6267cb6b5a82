use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    /// Service liveness and database role
    Health,
    /// Product catalog
    Products,
}

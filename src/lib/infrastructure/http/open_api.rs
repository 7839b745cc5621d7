//! OpenAPI module

use utoipa::OpenApi;

use crate::infrastructure::http::{errors::ErrorResponse, handlers::*};

#[derive(Debug, OpenApi)]
#[openapi(
    info(title = "Portfolio Backend"),
    paths(contact::handler, status::handler, resume::handler),
    components(schemas(
        contact::ContactBody,
        contact::ContactResponse,
        status::StatusResponse,
        status::Endpoints,
        ErrorResponse,
    ))
)]
pub struct ApiDocs;

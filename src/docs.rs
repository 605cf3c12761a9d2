use utoipa::OpenApi;
use crate::common::response::ErrorResponse;
use crate::modules::video::model::Video;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::thumbnail::handler::upload_thumbnail,
        crate::modules::thumbnail::handler::get_thumbnail,
        crate::modules::video::handler::get_video,
    ),
    components(
        schemas(Video, ErrorResponse)
    ),
    tags(
        (name = "Thumbnails", description = "Thumbnail upload and retrieval"),
        (name = "Videos", description = "Video records")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

use utoipa::Modify;
use utoipa::openapi::security::{SecurityScheme, HttpAuthScheme, HttpBuilder};

pub struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

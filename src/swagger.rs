use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use axum::Router;
use std::sync::Arc;

use crate::{
    models::{
        ContactMessage, ContactReceivedResponse, CreatedResponse, Profile,
        ProfileUpsertResponse, Project, TestReport,
    },
    AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::profile::get_profile,
        crate::routes::profile::create_or_update_profile,
        crate::routes::projects::list_projects,
        crate::routes::projects::add_project,
        crate::routes::contact::submit_contact,
        crate::routes::diagnostics::test_database,
    ),
    components(
        schemas(
            Profile, Project, ContactMessage,
            ProfileUpsertResponse, CreatedResponse, ContactReceivedResponse,
            TestReport
        )
    ),
    tags(
        (name = "profile", description = "Singleton profile endpoints"),
        (name = "projects", description = "Portfolio project endpoints"),
        (name = "contact", description = "Visitor contact endpoint"),
        (name = "diagnostics", description = "Store connectivity diagnostics"),
    ),
    info(
        title = "Folio API",
        version = "0.1.0",
        description = "Personal portfolio backend"
    )
)]
pub struct ApiDoc;

pub fn create_swagger_router() -> Router<Arc<AppState>> {
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .into()
}

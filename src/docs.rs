// src/docs.rs

use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::register,
        handlers::auth::login,

        // --- Users ---
        handlers::auth::get_me,

        // --- Clients ---
        handlers::clients::create_client,
        handlers::clients::list_clients,
        handlers::clients::get_client,
        handlers::clients::update_client,
        handlers::clients::delete_client,

        // --- Ordens ---
        handlers::ordens::create_ordem,
        handlers::ordens::list_ordens,
        handlers::ordens::list_client_ordens,
        handlers::ordens::get_ordem,
        handlers::ordens::update_ordem,
        handlers::ordens::update_status,
    ),
    components(
        schemas(
            // --- Auth ---
            models::auth::User,
            models::auth::RegisterUserPayload,
            models::auth::LoginUserPayload,
            models::auth::AuthResponse,

            // --- Clients ---
            models::clients::Client,
            models::clients::CreateClientPayload,
            models::clients::UpdateClientPayload,

            // --- Ordens ---
            models::ordens::Ordem,
            models::ordens::CreateOrdemPayload,
            models::ordens::UpdateOrdemPayload,
            models::ordens::UpdateStatusOrdemPayload,
        )
    ),
    tags(
        (name = "Auth", description = "Autenticação e Registro"),
        (name = "Users", description = "Dados do Usuário Autenticado"),
        (name = "Clients", description = "Gestão de Clientes"),
        (name = "Ordens", description = "Gestão de Ordens de Serviço")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

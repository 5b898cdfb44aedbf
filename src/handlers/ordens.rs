// src/handlers/ordens.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::ordens::{CreateOrdemPayload, Ordem, UpdateOrdemPayload, UpdateStatusOrdemPayload},
};

// POST /api/ordens
#[utoipa::path(
    post,
    path = "/api/ordens",
    tag = "Ordens",
    request_body = CreateOrdemPayload,
    responses(
        (status = 201, description = "Ordem criada (status padrão: Pendente)", body = Ordem),
        (status = 404, description = "Cliente inexistente ou de outro usuário"),
        (status = 422, description = "Status fora do conjunto permitido")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_ordem(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(payload): Json<CreateOrdemPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let ordem = app_state
        .ordem_service
        .create_ordem(
            &user,
            payload.client_id,
            &payload.nome_servico,
            payload.descricao_servico.as_deref(),
            payload.valor,
            payload.status.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(ordem)))
}

// GET /api/ordens
#[utoipa::path(
    get,
    path = "/api/ordens",
    tag = "Ordens",
    responses(
        (status = 200, description = "Todas as ordens dos clientes do usuário", body = Vec<Ordem>),
        (status = 401, description = "Não autenticado")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_ordens(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    let ordens = app_state.ordem_service.list_ordens(&user).await?;

    Ok((StatusCode::OK, Json(ordens)))
}

// GET /api/clients/{id}/ordens
#[utoipa::path(
    get,
    path = "/api/clients/{id}/ordens",
    tag = "Ordens",
    params(
        ("id" = Uuid, Path, description = "ID do cliente")
    ),
    responses(
        (status = 200, description = "Ordens do cliente (vazio se o cliente não é seu)", body = Vec<Ordem>),
        (status = 401, description = "Não autenticado")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_client_ordens(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let ordens = app_state.ordem_service.list_client_ordens(&user, id).await?;

    Ok((StatusCode::OK, Json(ordens)))
}

// GET /api/ordens/{id}
#[utoipa::path(
    get,
    path = "/api/ordens/{id}",
    tag = "Ordens",
    params(
        ("id" = Uuid, Path, description = "ID da ordem")
    ),
    responses(
        (status = 200, description = "Ordem encontrada", body = Ordem),
        (status = 404, description = "Ordem inexistente ou de outro usuário")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_ordem(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let ordem = app_state.ordem_service.get_ordem(&user, id).await?;

    Ok((StatusCode::OK, Json(ordem)))
}

// PUT /api/ordens/{id}
#[utoipa::path(
    put,
    path = "/api/ordens/{id}",
    tag = "Ordens",
    request_body = UpdateOrdemPayload,
    params(
        ("id" = Uuid, Path, description = "ID da ordem")
    ),
    responses(
        (status = 200, description = "Ordem atualizada; campos omitidos ficam como estavam", body = Ordem),
        (status = 404, description = "Ordem inexistente ou de outro usuário"),
        (status = 422, description = "Status fora do conjunto permitido")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_ordem(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateOrdemPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let ordem = app_state
        .ordem_service
        .update_ordem(
            &user,
            id,
            payload.nome_servico.as_deref(),
            payload.descricao_servico.as_deref(),
            payload.valor,
            payload.status.as_deref(),
        )
        .await?;

    Ok((StatusCode::OK, Json(ordem)))
}

// PATCH /api/ordens/{id}/status
#[utoipa::path(
    patch,
    path = "/api/ordens/{id}/status",
    tag = "Ordens",
    request_body = UpdateStatusOrdemPayload,
    params(
        ("id" = Uuid, Path, description = "ID da ordem")
    ),
    responses(
        (status = 200, description = "Status atualizado", body = Ordem),
        (status = 404, description = "Ordem inexistente ou de outro usuário"),
        (status = 422, description = "Status fora do conjunto permitido")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_status(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateStatusOrdemPayload>,
) -> Result<impl IntoResponse, AppError> {
    let ordem = app_state
        .ordem_service
        .update_status(&user, id, &payload.status)
        .await?;

    Ok((StatusCode::OK, Json(ordem)))
}

//! Community handlers
//!
//! Endpoints for community management and roster membership.

use axum::{
    extract::{Path, State},
    Json,
};
use community_core::Snowflake;
use community_service::{
    CommunityResponse, CommunityService, CreateCommunityRequest, UpdateCommunityRequest,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Ids are opaque path strings; one that does not parse cannot name a
/// stored community, so it gets the same not-found treatment as an unknown
/// id rather than a format error.
fn parse_community_id(id: &str) -> ApiResult<Snowflake> {
    id.parse().map_err(|_| ApiError::NotFound("Community"))
}

/// Create a new community
///
/// POST /communities
pub async fn create_community(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateCommunityRequest>,
) -> ApiResult<Created<Json<CommunityResponse>>> {
    let service = CommunityService::new(state.service_context());
    let response = service.create_community(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// List every community
///
/// GET /communities
pub async fn get_all_communities(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<CommunityResponse>>> {
    let service = CommunityService::new(state.service_context());
    let response = service.get_all_communities().await?;
    Ok(Json(response))
}

/// List the communities the caller belongs to
///
/// GET /communities/@me
pub async fn get_my_communities(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<CommunityResponse>>> {
    let service = CommunityService::new(state.service_context());
    let response = service.get_communities_by_user(auth.user_id).await?;
    Ok(Json(response))
}

/// Get a community by ID
///
/// GET /communities/{community_id}
pub async fn get_community(
    State(state): State<AppState>,
    Path(community_id): Path<String>,
) -> ApiResult<Json<CommunityResponse>> {
    let community_id = parse_community_id(&community_id)?;

    let service = CommunityService::new(state.service_context());
    match service.get_community_by_id(community_id).await? {
        Some(response) => Ok(Json(response)),
        None => Err(ApiError::NotFound("Community")),
    }
}

/// Join a community
///
/// POST /communities/{community_id}/join
pub async fn join_community(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(community_id): Path<String>,
) -> ApiResult<()> {
    let community_id = parse_community_id(&community_id)?;

    let service = CommunityService::new(state.service_context());
    if service.join_community(community_id, auth.user_id).await? {
        Ok(())
    } else {
        Err(ApiError::NotFound("Community"))
    }
}

/// Leave a community
///
/// POST /communities/{community_id}/leave
pub async fn leave_community(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(community_id): Path<String>,
) -> ApiResult<()> {
    let community_id = parse_community_id(&community_id)?;

    let service = CommunityService::new(state.service_context());
    if service.leave_community(community_id, auth.user_id).await? {
        Ok(())
    } else {
        Err(ApiError::NotFound("Community"))
    }
}

/// Update a community's name and description
///
/// PUT /communities/{community_id}
pub async fn update_community(
    State(state): State<AppState>,
    Path(community_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateCommunityRequest>,
) -> ApiResult<Json<CommunityResponse>> {
    let community_id = parse_community_id(&community_id)?;

    let service = CommunityService::new(state.service_context());
    match service.update_community(community_id, request).await? {
        Some(response) => Ok(Json(response)),
        None => Err(ApiError::NotFound("Community")),
    }
}

/// Delete a community
///
/// DELETE /communities/{community_id}
pub async fn delete_community(
    State(state): State<AppState>,
    Path(community_id): Path<String>,
) -> ApiResult<NoContent> {
    let community_id = parse_community_id(&community_id)?;

    let service = CommunityService::new(state.service_context());
    if service.delete_community(community_id).await? {
        Ok(NoContent)
    } else {
        Err(ApiError::NotFound("Community"))
    }
}

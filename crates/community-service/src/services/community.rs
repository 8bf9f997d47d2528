//! Community service
//!
//! Handles community creation, lookup, update, deletion, and the join/leave
//! roster transitions.

use community_core::entities::Community;
use community_core::traits::MembershipStore;
use community_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::{CommunityResponse, CreateCommunityRequest, UpdateCommunityRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Community service
pub struct CommunityService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommunityService<'a> {
    /// Create a new CommunityService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new community with the actor seeded as its first member
    #[instrument(skip(self, request))]
    pub async fn create_community(
        &self,
        actor: Snowflake,
        request: CreateCommunityRequest,
    ) -> ServiceResult<CommunityResponse> {
        if request.name.trim().is_empty() {
            return Err(ServiceError::validation("Community name must not be blank"));
        }

        let community = Community::new(
            self.ctx.generate_id(),
            request.name,
            request.description,
            actor,
        );
        self.ctx.membership_store().create(&community).await?;

        info!(community_id = %community.id, created_by = %actor, "Community created");

        Ok(CommunityResponse::from(&community))
    }

    /// Snapshot of every stored community
    #[instrument(skip(self))]
    pub async fn get_all_communities(&self) -> ServiceResult<Vec<CommunityResponse>> {
        let communities = self.ctx.membership_store().find_all().await?;
        Ok(communities.iter().map(CommunityResponse::from).collect())
    }

    /// Get a community by id; absence is a value, not an error
    #[instrument(skip(self))]
    pub async fn get_community_by_id(
        &self,
        id: Snowflake,
    ) -> ServiceResult<Option<CommunityResponse>> {
        let community = self.ctx.membership_store().find_by_id(id).await?;
        Ok(community.as_ref().map(CommunityResponse::from))
    }

    /// Add the actor to a community's roster
    ///
    /// Returns `false` only when no community has that id. Joining a
    /// community the actor already belongs to still returns `true`: the
    /// roster is a set and the operation is idempotent by contract, so the
    /// caller is not told whether the state actually changed.
    #[instrument(skip(self))]
    pub async fn join_community(&self, id: Snowflake, actor: Snowflake) -> ServiceResult<bool> {
        let updated = self
            .ctx
            .membership_store()
            .update_with(
                id,
                Box::new(move |community| {
                    community.add_member(actor);
                }),
            )
            .await?;

        match updated {
            Some(community) => {
                info!(community_id = %id, user_id = %actor, members = community.member_count(), "User joined community");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove the actor from a community's roster
    ///
    /// Returns `false` only when no community has that id; leaving a
    /// community the actor is not in is an idempotent no-op that still
    /// succeeds. The creator may leave like anyone else; `created_by`
    /// keeps pointing at them.
    #[instrument(skip(self))]
    pub async fn leave_community(&self, id: Snowflake, actor: Snowflake) -> ServiceResult<bool> {
        let updated = self
            .ctx
            .membership_store()
            .update_with(
                id,
                Box::new(move |community| {
                    community.remove_member(actor);
                }),
            )
            .await?;

        match updated {
            Some(community) => {
                info!(community_id = %id, user_id = %actor, members = community.member_count(), "User left community");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Every community whose roster currently contains the actor
    #[instrument(skip(self))]
    pub async fn get_communities_by_user(
        &self,
        actor: Snowflake,
    ) -> ServiceResult<Vec<CommunityResponse>> {
        let communities = self.ctx.membership_store().find_by_member(actor).await?;
        Ok(communities.iter().map(CommunityResponse::from).collect())
    }

    /// Overwrite a community's name and description
    ///
    /// Roster and creator are untouched. Returns `None` if no community has
    /// that id.
    #[instrument(skip(self, request))]
    pub async fn update_community(
        &self,
        id: Snowflake,
        request: UpdateCommunityRequest,
    ) -> ServiceResult<Option<CommunityResponse>> {
        let updated = self
            .ctx
            .membership_store()
            .update_with(
                id,
                Box::new(move |community| {
                    community.set_details(request.name, request.description);
                }),
            )
            .await?;

        if updated.is_some() {
            info!(community_id = %id, "Community updated");
        }

        Ok(updated.as_ref().map(CommunityResponse::from))
    }

    /// Hard-delete a community; returns whether a deletion occurred
    #[instrument(skip(self))]
    pub async fn delete_community(&self, id: Snowflake) -> ServiceResult<bool> {
        let deleted = self.ctx.membership_store().delete(id).await?;

        if deleted {
            info!(community_id = %id, "Community deleted");
        }

        Ok(deleted)
    }
}

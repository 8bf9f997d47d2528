//! API Integration Tests
//!
//! End-to-end tests against a spawned server with in-memory stores.
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, CommunityResponse, CreateCommunityBody, TestServer,
    UpdateCommunityBody, SEEDED_SUBJECTS,
};
use reqwest::StatusCode;

async fn create_community(
    server: &TestServer,
    token: &str,
    body: &CreateCommunityBody,
) -> CommunityResponse {
    let response = server
        .post_auth("/api/v1/communities", token, body)
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Create Community Tests
// ============================================================================

#[tokio::test]
async fn test_create_community_seeds_creator() {
    let server = TestServer::start().await.unwrap();
    let token = server.token_for(SEEDED_SUBJECTS[0]);

    let community =
        create_community(&server, &token, &CreateCommunityBody::unique()).await;

    assert_eq!(community.members, vec![community.created_by.clone()]);
    assert_eq!(community.member_count, 1);
}

#[tokio::test]
async fn test_create_community_requires_credential() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post("/api/v1/communities", &CreateCommunityBody::unique())
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_create_community_rejects_wrong_scheme() {
    let server = TestServer::start().await.unwrap();
    let token = server.token_for(SEEDED_SUBJECTS[0]);

    // Valid token, wrong scheme prefix: rejected before any verification
    let response = server
        .post_raw_header("/api/v1/communities", &format!("Token {token}"))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_create_community_bad_token_is_not_found() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/communities",
            "not.a.jwt",
            &CreateCommunityBody::unique(),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_create_community_unknown_subject_is_not_found() {
    let server = TestServer::start().await.unwrap();
    // Token verifies but the subject has no directory record
    let token = server.token_for("stranger@example.com");

    let response = server
        .post_auth(
            "/api/v1/communities",
            &token,
            &CreateCommunityBody::unique(),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_create_community_rejects_blank_name() {
    let server = TestServer::start().await.unwrap();
    let token = server.token_for(SEEDED_SUBJECTS[0]);

    let empty = server
        .post_auth(
            "/api/v1/communities",
            &token,
            &CreateCommunityBody::named("", "x"),
        )
        .await
        .unwrap();
    assert_status(empty, StatusCode::BAD_REQUEST).await.unwrap();

    let whitespace = server
        .post_auth(
            "/api/v1/communities",
            &token,
            &CreateCommunityBody::named("   ", "x"),
        )
        .await
        .unwrap();
    assert_status(whitespace, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_create_community_allows_empty_description() {
    let server = TestServer::start().await.unwrap();
    let token = server.token_for(SEEDED_SUBJECTS[0]);

    let community =
        create_community(&server, &token, &CreateCommunityBody::named("readers", "")).await;
    assert_eq!(community.description, "");
}

// ============================================================================
// Read Tests
// ============================================================================

#[tokio::test]
async fn test_list_all_is_public() {
    let server = TestServer::start().await.unwrap();
    let token = server.token_for(SEEDED_SUBJECTS[0]);

    create_community(&server, &token, &CreateCommunityBody::unique()).await;
    create_community(&server, &token, &CreateCommunityBody::unique()).await;

    let response = server.get("/api/v1/communities").await.unwrap();
    let list: Vec<CommunityResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(list.len(), 2);
}

#[tokio::test]
async fn test_get_by_id_round_trips() {
    let server = TestServer::start().await.unwrap();
    let token = server.token_for(SEEDED_SUBJECTS[0]);

    let created = create_community(&server, &token, &CreateCommunityBody::unique()).await;

    let response = server
        .get(&format!("/api/v1/communities/{}", created.id))
        .await
        .unwrap();
    let fetched: CommunityResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_get_unknown_id_is_not_found() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/api/v1/communities/424242").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_get_unparseable_id_is_not_found() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .get("/api/v1/communities/nonexistent-id")
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Join / Leave Tests
// ============================================================================

#[tokio::test]
async fn test_join_community() {
    let server = TestServer::start().await.unwrap();
    let creator = server.token_for(SEEDED_SUBJECTS[0]);
    let joiner = server.token_for(SEEDED_SUBJECTS[1]);

    let created = create_community(&server, &creator, &CreateCommunityBody::unique()).await;

    let response = server
        .post_auth_empty(&format!("/api/v1/communities/{}/join", created.id), &joiner)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .get(&format!("/api/v1/communities/{}", created.id))
        .await
        .unwrap();
    let after: CommunityResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(after.member_count, 2);
}

#[tokio::test]
async fn test_join_twice_is_idempotent() {
    let server = TestServer::start().await.unwrap();
    let creator = server.token_for(SEEDED_SUBJECTS[0]);
    let joiner = server.token_for(SEEDED_SUBJECTS[1]);

    let created = create_community(&server, &creator, &CreateCommunityBody::unique()).await;
    let join_path = format!("/api/v1/communities/{}/join", created.id);

    // Both calls succeed; the second changes nothing
    let first = server.post_auth_empty(&join_path, &joiner).await.unwrap();
    assert_status(first, StatusCode::OK).await.unwrap();
    let second = server.post_auth_empty(&join_path, &joiner).await.unwrap();
    assert_status(second, StatusCode::OK).await.unwrap();

    let response = server
        .get(&format!("/api/v1/communities/{}", created.id))
        .await
        .unwrap();
    let after: CommunityResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(after.member_count, 2);
}

#[tokio::test]
async fn test_join_unknown_community_is_not_found() {
    let server = TestServer::start().await.unwrap();
    let token = server.token_for(SEEDED_SUBJECTS[0]);

    let response = server
        .post_auth_empty("/api/v1/communities/424242/join", &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_join_requires_credential() {
    let server = TestServer::start().await.unwrap();
    let creator = server.token_for(SEEDED_SUBJECTS[0]);
    let created = create_community(&server, &creator, &CreateCommunityBody::unique()).await;

    let url = format!(
        "{}/api/v1/communities/{}/join",
        server.base_url(),
        created.id
    );
    let response = server.client.post(&url).send().await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_leave_by_non_member_still_succeeds() {
    let server = TestServer::start().await.unwrap();
    let creator = server.token_for(SEEDED_SUBJECTS[0]);
    let outsider = server.token_for(SEEDED_SUBJECTS[1]);

    let created = create_community(&server, &creator, &CreateCommunityBody::unique()).await;

    let response = server
        .post_auth_empty(
            &format!("/api/v1/communities/{}/leave", created.id),
            &outsider,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .get(&format!("/api/v1/communities/{}", created.id))
        .await
        .unwrap();
    let after: CommunityResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(after.member_count, 1);
}

#[tokio::test]
async fn test_leave_unknown_community_is_not_found() {
    let server = TestServer::start().await.unwrap();
    let token = server.token_for(SEEDED_SUBJECTS[0]);

    let response = server
        .post_auth_empty("/api/v1/communities/424242/leave", &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_concurrent_joins_are_not_lost() {
    let server = TestServer::start().await.unwrap();
    let creator = server.token_for(SEEDED_SUBJECTS[0]);
    let a = server.token_for(SEEDED_SUBJECTS[1]);
    let b = server.token_for(SEEDED_SUBJECTS[2]);

    let created = create_community(&server, &creator, &CreateCommunityBody::unique()).await;
    let join_path = format!("/api/v1/communities/{}/join", created.id);

    let (first, second) = tokio::join!(
        server.post_auth_empty(&join_path, &a),
        server.post_auth_empty(&join_path, &b),
    );
    assert_status(first.unwrap(), StatusCode::OK).await.unwrap();
    assert_status(second.unwrap(), StatusCode::OK).await.unwrap();

    let response = server
        .get(&format!("/api/v1/communities/{}", created.id))
        .await
        .unwrap();
    let after: CommunityResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(after.member_count, 3);
}

// ============================================================================
// List Mine Tests
// ============================================================================

#[tokio::test]
async fn test_list_mine_reflects_membership() {
    let server = TestServer::start().await.unwrap();
    let creator = server.token_for(SEEDED_SUBJECTS[0]);
    let joiner = server.token_for(SEEDED_SUBJECTS[1]);

    let created = create_community(&server, &creator, &CreateCommunityBody::unique()).await;

    // Joiner starts with nothing
    let response = server
        .get_auth("/api/v1/communities/@me", &joiner)
        .await
        .unwrap();
    let mine: Vec<CommunityResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(mine.is_empty());

    server
        .post_auth_empty(&format!("/api/v1/communities/{}/join", created.id), &joiner)
        .await
        .unwrap();

    let response = server
        .get_auth("/api/v1/communities/@me", &joiner)
        .await
        .unwrap();
    let mine: Vec<CommunityResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].id, created.id);
}

#[tokio::test]
async fn test_list_mine_requires_credential() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/api/v1/communities/@me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Update / Delete Tests
// ============================================================================

#[tokio::test]
async fn test_update_overwrites_details_only() {
    let server = TestServer::start().await.unwrap();
    let creator = server.token_for(SEEDED_SUBJECTS[0]);

    let created = create_community(&server, &creator, &CreateCommunityBody::unique()).await;

    // Baseline contract: update carries no credential
    let response = server
        .put(
            &format!("/api/v1/communities/{}", created.id),
            &UpdateCommunityBody {
                name: "renamed".to_string(),
                description: "new words".to_string(),
            },
        )
        .await
        .unwrap();
    let updated: CommunityResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(updated.name, "renamed");
    assert_eq!(updated.description, "new words");
    assert_eq!(updated.created_by, created.created_by);
    assert_eq!(updated.members, created.members);
}

#[tokio::test]
async fn test_update_unknown_community_is_not_found() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .put(
            "/api/v1/communities/424242",
            &UpdateCommunityBody {
                name: "renamed".to_string(),
                description: String::new(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_delete_community() {
    let server = TestServer::start().await.unwrap();
    let creator = server.token_for(SEEDED_SUBJECTS[0]);

    let created = create_community(&server, &creator, &CreateCommunityBody::unique()).await;

    // Baseline contract: delete carries no credential
    let response = server
        .delete(&format!("/api/v1/communities/{}", created.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get(&format!("/api/v1/communities/{}", created.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_delete_unknown_community_is_not_found() {
    let server = TestServer::start().await.unwrap();

    let response = server.delete("/api/v1/communities/424242").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// End-to-End Scenario
// ============================================================================

#[tokio::test]
async fn test_membership_lifecycle_scenario() {
    let server = TestServer::start().await.unwrap();
    let u1 = server.token_for(SEEDED_SUBJECTS[0]);
    let u2 = server.token_for(SEEDED_SUBJECTS[1]);

    // U1 creates "Photographers"
    let created = create_community(
        &server,
        &u1,
        &CreateCommunityBody::named("Photographers", "x"),
    )
    .await;
    let u1_id = created.created_by.clone();
    assert_eq!(created.members, vec![u1_id.clone()]);

    // U2 joins
    let response = server
        .post_auth_empty(&format!("/api/v1/communities/{}/join", created.id), &u2)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .get(&format!("/api/v1/communities/{}", created.id))
        .await
        .unwrap();
    let after_join: CommunityResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(after_join.member_count, 2);
    assert!(after_join.members.contains(&u1_id));

    // U1 (the creator) leaves; attribution survives
    let response = server
        .post_auth_empty(&format!("/api/v1/communities/{}/leave", created.id), &u1)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .get(&format!("/api/v1/communities/{}", created.id))
        .await
        .unwrap();
    let after_leave: CommunityResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(after_leave.member_count, 1);
    assert!(!after_leave.members.contains(&u1_id));
    assert_eq!(after_leave.created_by, u1_id);

    // Membership listings reflect the roster, not attribution
    let response = server.get_auth("/api/v1/communities/@me", &u1).await.unwrap();
    let u1_mine: Vec<CommunityResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(u1_mine.iter().all(|c| c.id != created.id));

    let response = server.get_auth("/api/v1/communities/@me", &u2).await.unwrap();
    let u2_mine: Vec<CommunityResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(u2_mine.iter().any(|c| c.id == created.id));
}

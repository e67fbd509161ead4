//! Resource lifecycle tests against a mock Confluence server.

use confluence_client::ClientConfig;
use confluence_provider::resources::{
    GroupConfig, GroupMembershipResource, GroupMembershipState, GroupResource, GroupState,
    SpacePermissionConfig, SpacePermissionResource, SpacePermissionState,
};
use confluence_provider::{ConfluenceProvider, ManagedResource, ProviderError, ReadOutcome};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn provider_for(server: &MockServer) -> ConfluenceProvider {
    let site = server
        .uri()
        .strip_prefix("http://")
        .expect("mock server uri")
        .to_string();
    ConfluenceProvider::new(&ClientConfig::new(site, "bot", "secret").with_tls(false))
}

fn permission_resource(server: &MockServer) -> SpacePermissionResource {
    SpacePermissionResource::new(provider_for(server).client())
}

fn permission_config(operations: &[&str]) -> SpacePermissionConfig {
    SpacePermissionConfig {
        key: "DS".to_string(),
        operations: operations.iter().map(|s| s.to_string()).collect(),
        group: "eng".to_string(),
    }
}

fn eng_summary() -> serde_json::Value {
    json!({
        "id": "98305",
        "key": "DS",
        "permissions": [
            {
                "id": 9,
                "subjects": {"group": {"results": [{"name": "eng"}], "size": 1}},
                "operation": {"operation": "read", "targetType": "space"}
            },
            {
                "id": 10,
                "subjects": {"group": {"results": [{"name": "eng"}], "size": 1}},
                "operation": {"operation": "create", "targetType": "page"}
            },
            {
                "id": 11,
                "subjects": {"group": {"results": [{"name": "ops"}], "size": 1}},
                "operation": {"operation": "read", "targetType": "space"}
            }
        ]
    })
}

async fn mount_permission_create(server: &MockServer, key: &str, target: &str, id: i64) {
    Mock::given(method("POST"))
        .and(path("/rest/api/space/DS/permission"))
        .and(body_partial_json(
            json!({"operation": {"key": key, "target": target}}),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": id})))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_permission_create_builds_sorted_composite_id() {
    let server = MockServer::start().await;
    mount_permission_create(&server, "read", "space", 9).await;
    mount_permission_create(&server, "create", "page", 10).await;

    let resource = permission_resource(&server);
    let state = resource
        .create(&permission_config(&["create:page", "read:space"]))
        .await
        .unwrap();

    // Lexicographic, not numeric: "10" sorts before "9".
    assert_eq!(state.id, "10:9");
    assert_eq!(state.operation_ids["read:space"], "9");
    assert_eq!(state.operation_ids["create:page"], "10");
    // Declared order is kept in state even though creation reordered.
    assert_eq!(state.operations, vec!["create:page", "read:space"]);
}

#[tokio::test]
async fn test_permission_create_issues_read_space_first() {
    let server = MockServer::start().await;
    mount_permission_create(&server, "read", "space", 1).await;
    Mock::given(method("POST"))
        .and(path("/rest/api/space/DS/permission"))
        .and(body_partial_json(
            json!({"operation": {"key": "create", "target": "page"}}),
        ))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let resource = permission_resource(&server);
    let err = resource
        .create(&permission_config(&["create:page", "read:space"]))
        .await
        .unwrap_err();

    // read:space was created before the failing create:page, proving the
    // reorder happened on the wire.
    match err {
        ProviderError::PartialApply {
            created, requested, ..
        } => {
            assert_eq!(created, 1);
            assert_eq!(requested, 2);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_permission_create_aborts_on_first_failure() {
    let server = MockServer::start().await;
    mount_permission_create(&server, "read", "space", 1).await;
    Mock::given(method("POST"))
        .and(path("/rest/api/space/DS/permission"))
        .and(body_partial_json(
            json!({"operation": {"key": "create", "target": "page"}}),
        ))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;
    // The third pair must never be attempted.
    Mock::given(method("POST"))
        .and(path("/rest/api/space/DS/permission"))
        .and(body_partial_json(
            json!({"operation": {"key": "create", "target": "blogpost"}}),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 3})))
        .expect(0)
        .mount(&server)
        .await;

    let resource = permission_resource(&server);
    let err = resource
        .create(&permission_config(&[
            "read:space",
            "create:page",
            "create:blogpost",
        ]))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ProviderError::PartialApply {
            created: 1,
            requested: 3,
            ..
        }
    ));
}

#[tokio::test]
async fn test_permission_validation_fails_before_any_remote_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/api/space/DS/permission"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
        .expect(0)
        .mount(&server)
        .await;

    let resource = permission_resource(&server);

    let err = resource
        .create(&permission_config(&["read:space", "readspace"]))
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::InvalidOperationFormat(_)));

    let err = resource
        .create(&permission_config(&["read:space", "archive:space"]))
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::UnknownOperation(_)));
}

#[tokio::test]
async fn test_permission_read_recomputes_composite_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/api/space/DS"))
        .and(query_param("expand", "permissions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(eng_summary()))
        .expect(2)
        .mount(&server)
        .await;

    let resource = permission_resource(&server);
    // Stored identifier is stale; read replaces it from the listing.
    let prior = SpacePermissionState {
        id: "1:2".to_string(),
        key: "DS".to_string(),
        group: "eng".to_string(),
        ..Default::default()
    };

    let first = resource.read(&prior).await.unwrap();
    let ReadOutcome::Current(first) = first else {
        panic!("expected current state");
    };
    assert_eq!(first.id, "10:9");
    assert_eq!(first.operation_ids["create:page"], "10");

    // Idempotent: a second read without remote changes yields the same id.
    let second = resource.read(&first).await.unwrap();
    let ReadOutcome::Current(second) = second else {
        panic!("expected current state");
    };
    assert_eq!(second.id, first.id);
}

#[tokio::test]
async fn test_permission_read_signals_gone_when_space_is_missing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/api/space/DS"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let resource = permission_resource(&server);
    let prior = SpacePermissionState {
        id: "9".to_string(),
        key: "DS".to_string(),
        group: "eng".to_string(),
        ..Default::default()
    };
    assert!(matches!(
        resource.read(&prior).await.unwrap(),
        ReadOutcome::Gone
    ));
}

#[tokio::test]
async fn test_permission_delete_removes_only_the_live_intersection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/api/space/DS"))
        .and(query_param("expand", "permissions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "key": "DS",
            "permissions": [
                {
                    "id": 9,
                    "subjects": {"group": {"results": [{"name": "eng"}], "size": 1}},
                    "operation": {"operation": "read", "targetType": "space"}
                },
                {
                    "id": 11,
                    "subjects": {"group": {"results": [{"name": "ops"}], "size": 1}},
                    "operation": {"operation": "read", "targetType": "space"}
                }
            ]
        })))
        .mount(&server)
        .await;
    // 202 response, the endpoint's documented success status.
    Mock::given(method("DELETE"))
        .and(path("/rest/api/space/DS/permission/9"))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;
    // Id 5 is stored but no longer attached to the group; never touched.
    Mock::given(method("DELETE"))
        .and(path("/rest/api/space/DS/permission/5"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    let resource = permission_resource(&server);
    let state = SpacePermissionState {
        id: "5:9".to_string(),
        key: "DS".to_string(),
        group: "eng".to_string(),
        ..Default::default()
    };
    resource.delete(&state).await.unwrap();
}

#[tokio::test]
async fn test_permission_delete_is_best_effort_across_failures() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/api/space/DS"))
        .and(query_param("expand", "permissions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(eng_summary()))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/rest/api/space/DS/permission/10"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/rest/api/space/DS/permission/9"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let resource = permission_resource(&server);
    let state = SpacePermissionState {
        id: "10:9".to_string(),
        key: "DS".to_string(),
        group: "eng".to_string(),
        ..Default::default()
    };
    // One delete failed, but the loop finished and the operation succeeded.
    resource.delete(&state).await.unwrap();
}

#[tokio::test]
async fn test_permission_delete_succeeds_when_space_is_gone() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/api/space/DS"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let resource = permission_resource(&server);
    let state = SpacePermissionState {
        id: "9".to_string(),
        key: "DS".to_string(),
        group: "eng".to_string(),
        ..Default::default()
    };
    resource.delete(&state).await.unwrap();
}

#[tokio::test]
async fn test_permission_update_is_unsupported() {
    let server = MockServer::start().await;
    let resource = permission_resource(&server);
    let err = resource
        .update(
            &SpacePermissionState::default(),
            &permission_config(&["read:space"]),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::UnsupportedUpdate { .. }));
}

#[tokio::test]
async fn test_group_lifecycle() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/api/group"))
        .and(body_partial_json(json!({"name": "eng", "type": "group"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": "g-1", "name": "eng", "type": "group"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/api/group/by-id"))
        .and(query_param("id", "g-1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": "g-1", "name": "eng", "type": "group"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/rest/api/group/by-id"))
        .and(query_param("id", "g-1"))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    let resource = GroupResource::new(provider_for(&server).client());
    let state = resource
        .create(&GroupConfig {
            name: "eng".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(state.id, "g-1");

    let read = resource.read(&state).await.unwrap();
    assert!(matches!(read, ReadOutcome::Current(ref s) if s.name == "eng"));

    resource.delete(&state).await.unwrap();
}

#[tokio::test]
async fn test_group_update_recreates_under_new_id() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/rest/api/group/by-id"))
        .and(query_param("id", "g-1"))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/rest/api/group"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": "g-2", "name": "platform", "type": "group"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let resource = GroupResource::new(provider_for(&server).client());
    let prior = GroupState {
        id: "g-1".to_string(),
        name: "eng".to_string(),
    };
    let updated = resource
        .update(
            &prior,
            &GroupConfig {
                name: "platform".to_string(),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.id, "g-2");
    assert_eq!(updated.name, "platform");
}

#[tokio::test]
async fn test_group_read_signals_gone_on_404() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/api/group/by-id"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let resource = GroupResource::new(provider_for(&server).client());
    let prior = GroupState {
        id: "g-1".to_string(),
        name: "eng".to_string(),
    };
    assert!(matches!(
        resource.read(&prior).await.unwrap(),
        ReadOutcome::Gone
    ));
}

#[tokio::test]
async fn test_membership_read_signals_gone_when_member_left() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/api/group/g-1/membersByGroupId"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"accountId": "somebody-else"}],
            "size": 1
        })))
        .mount(&server)
        .await;

    let resource = GroupMembershipResource::new(provider_for(&server).client());
    let prior = GroupMembershipState {
        id: "g-1a-1".to_string(),
        group_id: "g-1".to_string(),
        account_id: "a-1".to_string(),
    };
    assert!(matches!(
        resource.read(&prior).await.unwrap(),
        ReadOutcome::Gone
    ));
}

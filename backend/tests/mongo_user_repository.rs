//! MongoDB adapter behaviour against a live server.
//!
//! Skipped unless `USERS_API_TEST_MONGODB_URI` is set.

mod support;

use std::sync::Arc;

use users_api::domain::ports::{UserRepository, UsersCommand, UsersQuery};
use users_api::domain::{ErrorCode, User, UserId, UsersService};
use users_api::outbound::persistence::MongoUserRepository;

use support::mongo::TestDatabase;

fn ada() -> User {
    User::new("Ada", "ada@example.com", Some(36))
}

#[tokio::test]
async fn repository_counts_follow_document_store_semantics() {
    let Some(db) = TestDatabase::connect().await else {
        return;
    };
    let repo = MongoUserRepository::new(&db.database, db.config.collection());

    let id = repo.insert(&ada()).await.expect("insert");
    let found = repo.find_by_id(&id).await.expect("find").expect("present");
    assert_eq!(found.user, ada());

    assert_eq!(repo.replace_fields(&id, &ada()).await.expect("noop replace"), 0);
    let replacement = User::new("Ada King", "countess@example.com", None);
    assert_eq!(repo.replace_fields(&id, &replacement).await.expect("replace"), 1);
    let refreshed = repo.find_by_id(&id).await.expect("find").expect("present");
    assert_eq!(refreshed.user, replacement);

    assert_eq!(
        repo.replace_fields(&UserId::generate(), &ada())
            .await
            .expect("replace unknown"),
        0
    );

    assert_eq!(repo.find_all().await.expect("list").len(), 1);
    assert_eq!(repo.delete_by_id(&id).await.expect("delete"), 1);
    assert_eq!(repo.delete_by_id(&id).await.expect("delete again"), 0);
    assert!(repo.find_by_id(&id).await.expect("find").is_none());

    db.cleanup().await;
}

#[tokio::test]
async fn service_round_trips_through_the_store() {
    let Some(db) = TestDatabase::connect().await else {
        return;
    };
    let service = UsersService::new(Arc::new(MongoUserRepository::new(
        &db.database,
        db.config.collection(),
    )));

    let created = service.create_user(ada()).await.expect("create");
    let fetched = service.get_user(&created.id).await.expect("get");
    assert_eq!(fetched, created);

    let err = service
        .replace_user(&created.id, ada())
        .await
        .expect_err("unchanged replace");
    assert_eq!(err.code(), ErrorCode::NotFound);

    service.delete_user(&created.id).await.expect("delete");
    let err = service
        .get_user(&created.id)
        .await
        .expect_err("deleted user");
    assert_eq!(err.code(), ErrorCode::NotFound);

    db.cleanup().await;
}

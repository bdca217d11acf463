use super::*;

use argon2::password_hash::{PasswordHasher, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use rand::rngs::OsRng;
use sea_orm::ActiveValue::Set;
use sea_orm::ActiveModelTrait;

use crate::database::entity::user;
use crate::error::EntityKind;
use crate::testing;

#[tokio::test]
async fn test_add_and_authenticate() {
    let managers = testing::managers().await;

    let user = managers.users.add_user("alice", "correct horse").await.unwrap();
    assert_ne!("correct horse", user.password_hash);

    assert!(managers.users.authenticate("alice", "correct horse").await.unwrap());
    assert!(!managers.users.authenticate("alice", "battery staple").await.unwrap());
    assert!(managers.users.authenticate("ALICE", "correct horse").await.unwrap());

    let err = managers.users.add_user("Alice", "other").await.unwrap_err();
    assert!(err.is_exists(EntityKind::User));
}

#[tokio::test]
async fn test_non_ascii_user_names() {
    let managers = testing::managers().await;

    managers.users.add_user("Jürgen", "hunter2").await.unwrap();
    managers.commit().await.unwrap();

    let user = managers.users.get_user("JÜRGEN").await.unwrap();
    assert_eq!("Jürgen", user.user_name);
    assert!(managers.users.authenticate("jÜrgen", "hunter2").await.unwrap());

    let err = managers.users.add_user("JÜRGEN", "other").await.unwrap_err();
    assert!(err.is_exists(EntityKind::User));
}

#[tokio::test]
async fn test_unknown_user_is_an_error() {
    let managers = testing::managers().await;

    let err = managers
        .users
        .authenticate("mallory", "anything")
        .await
        .unwrap_err();
    assert!(err.is_not_found(EntityKind::User));

    assert!(managers
        .users
        .set_password("mallory", "anything")
        .await
        .unwrap_err()
        .is_not_found(EntityKind::User));
    assert!(managers
        .users
        .delete_user("mallory")
        .await
        .unwrap_err()
        .is_not_found(EntityKind::User));
}

#[tokio::test]
async fn test_set_password_and_delete() {
    let managers = testing::managers().await;

    let before = managers.users.add_user("bob", "old").await.unwrap();
    let after = managers.users.set_password("bob", "new").await.unwrap();

    assert_eq!(before.id, after.id);
    assert_ne!(before.password_hash, after.password_hash);
    assert!(!managers.users.authenticate("bob", "old").await.unwrap());
    assert!(managers.users.authenticate("bob", "new").await.unwrap());

    managers.users.add_user("carol", "secret").await.unwrap();
    managers.users.delete_user("bob").await.unwrap();

    let names: Vec<String> = managers
        .users
        .list_users()
        .await
        .unwrap()
        .into_iter()
        .map(|u| u.user_name)
        .collect();
    assert_eq!(vec!["carol"], names);
}

#[tokio::test]
async fn test_outdated_hash_is_replaced() {
    let managers = testing::managers().await;

    let dave = managers.users.add_user("dave", "hunter2").await.unwrap();

    let params = Params::new(8, 1, 1, None).unwrap();
    let weak = Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
        .hash_password(b"hunter2", &SaltString::generate(&mut OsRng))
        .unwrap()
        .to_string();

    {
        let db = managers.context.staged().await.unwrap();
        let mut model: user::ActiveModel = dave.into();
        model.password_hash = Set(weak.clone());
        model.update(&*db).await.unwrap();
    }

    assert!(managers.users.authenticate("dave", "hunter2").await.unwrap());

    let rehashed = managers.users.get_user("dave").await.unwrap();
    assert_ne!(weak, rehashed.password_hash);
    assert!(rehashed.password_hash.starts_with("$argon2id$"));
    assert!(!rehashed.password_hash.contains("m=8,"));

    // A wrong password leaves the hash alone.
    let current = rehashed.password_hash.clone();
    assert!(!managers.users.authenticate("dave", "hunter3").await.unwrap());
    assert_eq!(
        current,
        managers.users.get_user("dave").await.unwrap().password_hash
    );
}

//! Integration tests for SqliteContactRepository.
//!
//! These tests run against a private in-memory SQLite database with the
//! real migrations applied.

mod common;

use common::TestDatabase;
use directory_core::{ContactId, DirectoryError, NewContact};
use directory_repository::{ContactRepository, DatabasePoolInterface, SqliteContactRepository};

fn new_contact(name: &str, email: &str, area_code: &str) -> NewContact {
    NewContact::new(name, email, "11987654321", area_code)
}

async fn repository() -> (TestDatabase, SqliteContactRepository) {
    let db = TestDatabase::new().await;
    let repo = SqliteContactRepository::new(db.pool());
    (db, repo)
}

#[tokio::test]
async fn test_insert_and_find_by_id() {
    let (_db, repo) = repository().await;

    let saved = repo
        .insert(&new_contact("Maria", "maria@example.com", "11"))
        .await
        .expect("Failed to insert contact");
    assert!(saved.id.into_inner() > 0);

    let found = repo
        .find_by_id(saved.id)
        .await
        .expect("Failed to find contact")
        .expect("Contact not found");

    assert_eq!(found, saved);
    assert_eq!(found.area_code, "11");
}

#[tokio::test]
async fn test_find_by_id_not_found() {
    let (_db, repo) = repository().await;

    let result = repo.find_by_id(ContactId(999)).await.expect("Query failed");
    assert!(result.is_none());
}

#[tokio::test]
async fn test_duplicate_email_is_rejected() {
    let (_db, repo) = repository().await;

    repo.insert(&new_contact("First", "dup@example.com", "11"))
        .await
        .expect("Failed to insert first contact");

    let result = repo
        .insert(&new_contact("Second", "DUP@example.com", "21"))
        .await;

    assert!(matches!(result, Err(DirectoryError::DuplicateEmail(_))));
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_exists_by_email_ignores_case() {
    let (_db, repo) = repository().await;

    repo.insert(&new_contact("Ana", "ana@example.com", "11"))
        .await
        .unwrap();

    assert!(repo.exists_by_email("ana@example.com").await.unwrap());
    assert!(repo.exists_by_email("ANA@Example.com").await.unwrap());
    assert!(!repo.exists_by_email("other@example.com").await.unwrap());
}

#[tokio::test]
async fn test_find_all_and_filter_by_area_code() {
    let (_db, repo) = repository().await;

    repo.insert(&new_contact("A", "a@example.com", "11")).await.unwrap();
    repo.insert(&new_contact("B", "b@example.com", "21")).await.unwrap();
    repo.insert(&new_contact("C", "c@example.com", "11")).await.unwrap();

    let all = repo.find_all().await.unwrap();
    assert_eq!(all.len(), 3);
    assert!(all.windows(2).all(|w| w[0].id < w[1].id));

    let sp = repo.find_by_area_code("11").await.unwrap();
    let names: Vec<&str> = sp.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["A", "C"]);

    assert!(repo.find_by_area_code("99").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_area_code_keeps_leading_zero() {
    let (_db, repo) = repository().await;

    let saved = repo.insert(&new_contact("Zero", "zero@example.com", "05")).await.unwrap();
    let found = repo.find_by_area_code("05").await.unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, saved.id);
    assert_eq!(found[0].area_code, "05");
}

#[tokio::test]
async fn test_update_replaces_every_attribute() {
    let (_db, repo) = repository().await;

    let mut contact = repo
        .insert(&new_contact("Old", "old@example.com", "11"))
        .await
        .unwrap();
    contact.replace(NewContact::new("New", "new@example.com", "2133334444", "21"));

    assert!(repo.update(&contact).await.unwrap());

    let found = repo.find_by_id(contact.id).await.unwrap().unwrap();
    assert_eq!(found, contact);
}

#[tokio::test]
async fn test_update_missing_contact_returns_false() {
    let (_db, repo) = repository().await;

    let ghost = directory_core::Contact::from_new(
        ContactId(42),
        new_contact("Ghost", "ghost@example.com", "11"),
    );
    assert!(!repo.update(&ghost).await.unwrap());
}

#[tokio::test]
async fn test_update_to_taken_email_is_duplicate() {
    let (_db, repo) = repository().await;

    repo.insert(&new_contact("A", "a@example.com", "11")).await.unwrap();
    let mut b = repo.insert(&new_contact("B", "b@example.com", "11")).await.unwrap();
    b.email = "a@example.com".to_string();

    let result = repo.update(&b).await;
    assert!(matches!(result, Err(DirectoryError::DuplicateEmail(_))));
}

#[tokio::test]
async fn test_delete_and_id_never_reused() {
    let (_db, repo) = repository().await;

    let first = repo.insert(&new_contact("A", "a@example.com", "11")).await.unwrap();
    assert!(repo.delete(first.id).await.unwrap());
    assert!(!repo.delete(first.id).await.unwrap());
    assert!(repo.find_by_id(first.id).await.unwrap().is_none());

    let second = repo.insert(&new_contact("A", "a@example.com", "11")).await.unwrap();
    assert!(second.id > first.id);
}

#[tokio::test]
async fn test_concurrent_inserts_keep_email_unique() {
    let (_db, repo) = repository().await;

    let attempts = (0..5).map(|i| {
        let repo = repo.clone();
        async move {
            repo.insert(&new_contact(&format!("Racer {i}"), "race@example.com", "11"))
                .await
        }
    });
    let results = futures::future::join_all(attempts).await;

    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    assert!(results
        .iter()
        .filter_map(|r| r.as_ref().err())
        .all(|e| matches!(e, DirectoryError::DuplicateEmail(_))));
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_health_check() {
    let db = TestDatabase::new().await;
    assert!(db.pool().health_check().await.is_ok());
}

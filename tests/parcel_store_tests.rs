//! Parcel lifecycle tests against a real SQLite database.

mod harness;

use std::sync::Arc;

use diesel::prelude::*;

use harness::temp_db::TempDb;
use parcel_tracker::adapter::outbound::sqlite::SqliteParcelRepository;
use parcel_tracker::application::parcel::ParcelStore;
use parcel_tracker::domain::{ClientId, DomainError, ParcelNumber, ParcelStatus};
use parcel_tracker::error::Error;
use parcel_tracker::testkit::InMemoryParcelRepository;
use rand::Rng;

fn store(db: &TempDb) -> ParcelStore<SqliteParcelRepository> {
    ParcelStore::new(SqliteParcelRepository::new(db.pool().clone()))
}

fn random_client() -> ClientId {
    ClientId::new(rand::thread_rng().gen_range(1..1_000_000))
}

#[tokio::test]
async fn register_then_get_round_trips() {
    let db = TempDb::create("round-trip");
    let store = store(&db);
    let client = random_client();

    let number = store.register(client, "test").await.unwrap();
    let parcel = store.get(number).await.unwrap();

    assert_ne!(number.get(), 0);
    assert_eq!(parcel.number, number);
    assert_eq!(parcel.client, client);
    assert_eq!(parcel.address, "test");
    assert_eq!(parcel.status, ParcelStatus::Registered);
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let db = TempDb::create("delete");
    let store = store(&db);
    let number = store.register(random_client(), "test").await.unwrap();

    store.delete(number).await.unwrap();

    assert!(store.get(number).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn set_address_is_gated_on_status() {
    let db = TempDb::create("set-address");
    let store = store(&db);
    let client = random_client();

    let registered = store.register(client, "test").await.unwrap();
    store.set_address(registered, "new test").await.unwrap();
    assert_eq!(store.get(registered).await.unwrap().address, "new test");

    for status in [ParcelStatus::Sent, ParcelStatus::Delivered] {
        let number = store.register(client, "test").await.unwrap();
        store.set_status(number, status).await.unwrap();

        let err = store.set_address(number, "new test").await.unwrap_err();

        assert!(err.is_invalid_state(), "{status}: {err}");
        assert_eq!(store.get(number).await.unwrap().address, "test");
    }
}

#[tokio::test]
async fn delete_is_gated_on_status() {
    let db = TempDb::create("delete-gate");
    let store = store(&db);
    let client = random_client();

    for status in [ParcelStatus::Sent, ParcelStatus::Delivered] {
        let number = store.register(client, "test").await.unwrap();
        store.set_status(number, status).await.unwrap();

        let err = store.delete(number).await.unwrap_err();

        assert!(matches!(
            err,
            Error::Domain(DomainError::DeleteLocked { status: s, .. }) if s == status
        ));
        assert_eq!(store.get(number).await.unwrap().status, status);
    }
}

#[tokio::test]
async fn set_status_overwrites_any_status() {
    let db = TempDb::create("set-status");
    let store = store(&db);
    let number = store.register(random_client(), "test").await.unwrap();

    store.set_status(number, ParcelStatus::Delivered).await.unwrap();
    store.set_status(number, ParcelStatus::Registered).await.unwrap();

    assert_eq!(
        store.get(number).await.unwrap().status,
        ParcelStatus::Registered
    );
    store.delete(number).await.unwrap();
}

#[tokio::test]
async fn list_by_client_returns_every_parcel() {
    let db = TempDb::create("list");
    let store = store(&db);
    let client = random_client();

    let mut expected = Vec::new();
    for i in 0..3 {
        let address = format!("address {i}");
        let number = store.register(client, &address).await.unwrap();
        expected.push((number, address));
    }

    let parcels = store.list_by_client(client).await.unwrap();

    assert_eq!(parcels.len(), expected.len());
    for (parcel, (number, address)) in parcels.iter().zip(&expected) {
        assert_eq!(parcel.number, *number);
        assert_eq!(&parcel.address, address);
        assert_eq!(parcel.client, client);
        assert_eq!(parcel.status, ParcelStatus::Registered);
    }
}

#[tokio::test]
async fn list_by_client_separates_clients() {
    let db = TempDb::create("list-clients");
    let store = store(&db);

    store.register(ClientId::new(42), "A").await.unwrap();
    store.register(ClientId::new(42), "B").await.unwrap();
    store.register(ClientId::new(99), "C").await.unwrap();

    let first: Vec<_> = store
        .list_by_client(ClientId::new(42))
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.address)
        .collect();
    let second = store.list_by_client(ClientId::new(99)).await.unwrap();

    assert_eq!(first, ["A", "B"]);
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].address, "C");
    assert!(store
        .list_by_client(ClientId::new(7))
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn sent_parcel_is_frozen() {
    let db = TempDb::create("frozen");
    let store = store(&db);

    let number = store.register(ClientId::new(1000), "test").await.unwrap();
    assert_eq!(number, ParcelNumber::new(1));

    store.set_status(number, ParcelStatus::Sent).await.unwrap();
    assert!(store
        .set_address(number, "new")
        .await
        .unwrap_err()
        .is_invalid_state());
    assert!(store.delete(number).await.unwrap_err().is_invalid_state());

    let parcel = store.get(number).await.unwrap();
    assert_eq!(parcel.status, ParcelStatus::Sent);
    assert_eq!(parcel.address, "test");
}

#[tokio::test]
async fn mutations_on_missing_parcel_are_not_found() {
    let db = TempDb::create("missing");
    let store = store(&db);
    let number = ParcelNumber::new(404);

    assert!(store
        .set_status(number, ParcelStatus::Sent)
        .await
        .unwrap_err()
        .is_not_found());
    assert!(store
        .set_address(number, "x")
        .await
        .unwrap_err()
        .is_not_found());
    assert!(store.delete(number).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn register_after_a_number_beyond_32_bits() {
    let db = TempDb::create("wide-numbers");
    {
        let mut conn = db.pool().get().unwrap();
        diesel::sql_query(
            "INSERT INTO parcel (number, client, status, address, created_at) \
             VALUES (4294967296, 1, 'registered', 'x', '2024-01-15T12:00:00Z')",
        )
        .execute(&mut conn)
        .unwrap();
    }
    let store = store(&db);

    let number = store.register(ClientId::new(1), "new").await.unwrap();

    assert_eq!(number, ParcelNumber::new(4_294_967_297));
    assert_eq!(store.get(number).await.unwrap().address, "new");
    let listed: Vec<_> = store
        .list_by_client(ClientId::new(1))
        .await
        .unwrap()
        .into_iter()
        .map(|p| (p.number.get(), p.address))
        .collect();
    assert_eq!(
        listed,
        [
            (4_294_967_296, "x".to_string()),
            (4_294_967_297, "new".to_string())
        ]
    );
}

#[tokio::test]
async fn data_survives_reopening_the_database() {
    let db = TempDb::create("reopen");
    let number = store(&db)
        .register(ClientId::new(5), "persisted")
        .await
        .unwrap();

    let reopened = parcel_tracker::adapter::outbound::sqlite::open(
        &parcel_tracker::adapter::outbound::sqlite::DatabaseConfig::with_url(
            db.path().display().to_string(),
        ),
    )
    .unwrap();
    let parcel = ParcelStore::new(SqliteParcelRepository::new(reopened))
        .get(number)
        .await
        .unwrap();

    assert_eq!(parcel.address, "persisted");
}

#[tokio::test]
async fn backend_failures_surface_as_persistence_errors() {
    let store = ParcelStore::new(InMemoryParcelRepository::new());
    let number = store.register(ClientId::new(1), "a").await.unwrap();
    store.repository().set_unavailable(true);

    assert!(store
        .register(ClientId::new(1), "b")
        .await
        .unwrap_err()
        .is_persistence());
    assert!(store.get(number).await.unwrap_err().is_persistence());
    assert!(store.delete(number).await.unwrap_err().is_persistence());

    store.repository().set_unavailable(false);
    assert_eq!(store.repository().len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn delete_never_removes_a_parcel_that_was_sent() {
    let db = TempDb::create("race");
    let store = Arc::new(store(&db));
    let client = random_client();

    let mut numbers = Vec::new();
    for i in 0..16 {
        numbers.push(store.register(client, &format!("#{i}")).await.unwrap());
    }

    let mut handles = Vec::new();
    for number in numbers.iter().copied() {
        let shipper = Arc::clone(&store);
        let deleter = Arc::clone(&store);
        let ship =
            tokio::spawn(async move { shipper.set_status(number, ParcelStatus::Sent).await });
        let delete = tokio::spawn(async move { deleter.delete(number).await });
        handles.push((number, ship, delete));
    }

    for (number, ship, delete) in handles {
        let shipped = ship.await.unwrap();
        let deleted = delete.await.unwrap();

        match store.get(number).await {
            Ok(parcel) => {
                shipped.unwrap();
                assert_eq!(parcel.status, ParcelStatus::Sent);
                assert!(deleted.unwrap_err().is_invalid_state());
            }
            Err(e) => {
                assert!(e.is_not_found());
                deleted.unwrap();
                assert!(shipped.unwrap_err().is_not_found());
            }
        }
    }
}

use shared::{KvStorage, MemoryStorage, Registration, RegistrationStore, StoreError};

fn ada() -> Registration {
    Registration::from_fields("Ada", "ada@example.com", "Launch").unwrap()
}

#[test]
fn absent_storage_is_empty() {
    let store = RegistrationStore::new(MemoryStorage::new(), "registrations");

    assert!(store.load().unwrap().is_empty());
}

#[test]
fn append_keeps_order_and_duplicates() {
    let store = RegistrationStore::new(MemoryStorage::new(), "registrations");

    store.append(ada()).unwrap();
    store
        .append(Registration::from_fields("Grace", "grace@example.com", "Workshop").unwrap())
        .unwrap();
    store.append(ada()).unwrap();

    let names: Vec<_> = store
        .load()
        .unwrap()
        .into_iter()
        .map(|registration| registration.name)
        .collect();

    assert_eq!(names, ["Ada", "Grace", "Ada"]);
}

#[test]
fn blob_is_a_json_array_of_records() {
    let store = RegistrationStore::new(MemoryStorage::new(), "registrations");

    store.append(ada()).unwrap();

    assert_eq!(
        store.storage().get("registrations").unwrap(),
        r#"[{"name":"Ada","email":"ada@example.com","event":"Launch"}]"#
    );
}

#[test]
fn existing_records_are_preserved() {
    let storage = MemoryStorage::with_item(
        "registrations",
        r#"[{"name":"Grace","email":"grace@example.com","event":"General"}]"#,
    );
    let store = RegistrationStore::new(&storage, "registrations");

    store.append(ada()).unwrap();

    let registrations = store.load().unwrap();
    assert_eq!(registrations.len(), 2);
    assert_eq!(registrations[1], ada());
}

#[test]
fn unknown_keys_survive_an_append() {
    let storage = MemoryStorage::with_item(
        "registrations",
        r#"[{"name":"Grace","email":"grace@example.com","event":"General","ts":1}]"#,
    );
    let store = RegistrationStore::new(&storage, "registrations");

    store.append(ada()).unwrap();

    assert_eq!(
        storage.get("registrations").unwrap(),
        concat!(
            r#"[{"name":"Grace","email":"grace@example.com","event":"General","ts":1},"#,
            r#"{"name":"Ada","email":"ada@example.com","event":"Launch"}]"#
        )
    );
}

#[test]
fn records_without_event_are_kept() {
    let storage = MemoryStorage::with_item(
        "registrations",
        r#"[{"name":"Grace","email":"grace@example.com"}]"#,
    );
    let store = RegistrationStore::new(&storage, "registrations");

    store.append(ada()).unwrap();

    assert!(storage
        .get("registrations")
        .unwrap()
        .starts_with(r#"[{"name":"Grace","email":"grace@example.com"},"#));

    let registrations = store.load().unwrap();
    assert_eq!(registrations[0].event, "");
    assert_eq!(registrations[1], ada());
}

#[test]
fn non_array_blob_is_malformed() {
    let storage = MemoryStorage::with_item("registrations", r#"{"name":"Grace"}"#);
    let store = RegistrationStore::new(&storage, "registrations");

    assert!(matches!(store.append(ada()), Err(StoreError::Malformed(_))));
    assert_eq!(storage.get("registrations").unwrap(), r#"{"name":"Grace"}"#);
}

#[test]
fn malformed_blob_is_reported_and_left_alone() {
    let storage = MemoryStorage::with_item("registrations", "{not json");
    let store = RegistrationStore::new(&storage, "registrations");

    assert!(matches!(store.append(ada()), Err(StoreError::Malformed(_))));
    assert_eq!(storage.get("registrations").unwrap(), "{not json");
}

#[test]
fn fields_are_trimmed_and_required() {
    let registration = Registration::from_fields("  Ada ", " ada@example.com\n", "Launch").unwrap();

    assert_eq!(registration.name, "Ada");
    assert_eq!(registration.email, "ada@example.com");

    assert!(Registration::from_fields("   ", "ada@example.com", "Launch").is_none());
    assert!(Registration::from_fields("Ada", "", "Launch").is_none());
}

#[test]
fn stores_sharing_a_backend_see_each_other() {
    let storage = std::rc::Rc::new(MemoryStorage::new());
    let modal_store = RegistrationStore::new(storage.clone(), "registrations");
    let form_store = RegistrationStore::new(storage.clone(), "registrations");

    modal_store.append(ada()).unwrap();
    form_store
        .append(Registration::from_fields("Grace", "grace@example.com", "General").unwrap())
        .unwrap();

    assert_eq!(modal_store.load().unwrap().len(), 2);
    assert_eq!(
        RegistrationStore::new(storage, "registrations")
            .load()
            .unwrap()[0],
        ada()
    );
}

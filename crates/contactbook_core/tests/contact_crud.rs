use contactbook_core::{
    ContactField, ContactPatch, ContactRepository, ContactStore, KvContactStore, MemoryKvStore,
    NewContact, RepoError, SearchTerm,
};

fn empty_repo() -> ContactRepository<KvContactStore<MemoryKvStore>> {
    ContactRepository::new(KvContactStore::new(MemoryKvStore::new()), Vec::new())
}

fn seeded_repo() -> ContactRepository<KvContactStore<MemoryKvStore>> {
    let mut repo = empty_repo();
    repo.add(NewContact::new("Anna Puig", "anna@example.com", "600111222", false))
        .unwrap();
    repo.add(NewContact::new("Biel Roca", "biel@example.com", "600333444", true))
        .unwrap();
    repo.add(NewContact::new("Carla Vives", "carla@mail.org", "933555666", false))
        .unwrap();
    repo
}

#[test]
fn first_add_on_empty_collection_gets_id_one() {
    let mut repo = empty_repo();
    let added = repo
        .add(NewContact::new("Al", "a@b.c", "123", false))
        .unwrap();
    assert_eq!(added.id, 1);
}

#[test]
fn add_assigns_max_plus_one_after_removals() {
    let mut repo = seeded_repo();
    repo.remove(1).unwrap();
    repo.remove(2).unwrap();

    let added = repo
        .add(NewContact::new("Dani", "dani@example.com", "1", false))
        .unwrap();
    assert_eq!(added.id, 4);
}

#[test]
fn add_then_find_returns_input_plus_id() {
    let mut repo = empty_repo();
    let added = repo
        .add(NewContact::new("Al", "a@b.c", "123", false))
        .unwrap();

    let found = repo.find_by_id(added.id).unwrap();
    assert_eq!(found.name, "Al");
    assert_eq!(found.email, "a@b.c");
    assert_eq!(found.phone, "123");
    assert!(!found.is_favorite());
    assert_eq!(found, &added);
}

#[test]
fn add_persists_whole_collection() {
    let repo = seeded_repo();
    let stored = repo.store().load().unwrap().unwrap();
    assert_eq!(stored, repo.contacts());
}

#[test]
fn short_name_is_rejected_without_mutation_or_persist() {
    let mut repo = empty_repo();
    let err = repo
        .add(NewContact::new("A", "a@b.c", "123", false))
        .unwrap_err();

    assert!(matches!(err, RepoError::Validation(ref e) if e.field() == ContactField::Name));
    assert!(repo.is_empty());
    assert!(repo.store().load().unwrap().is_none());
}

#[test]
fn name_violation_is_reported_before_email_and_phone() {
    let mut repo = empty_repo();
    let err = repo
        .add(NewContact::new("A", "no-at", "12a", false))
        .unwrap_err();
    assert!(matches!(err, RepoError::Validation(ref e) if e.field() == ContactField::Name));

    let err = repo
        .add(NewContact::new("Anna", "no-at", "12a", false))
        .unwrap_err();
    assert!(matches!(err, RepoError::Validation(ref e) if e.field() == ContactField::Email));

    let err = repo
        .add(NewContact::new("Anna", "a@b.c", "12a", false))
        .unwrap_err();
    assert!(matches!(err, RepoError::Validation(ref e) if e.field() == ContactField::Phone));
}

#[test]
fn remove_deletes_only_target_and_keeps_order() {
    let mut repo = seeded_repo();
    let removed = repo.remove(2).unwrap();

    assert_eq!(removed.name, "Biel Roca");
    let ids = repo.contacts().iter().map(|c| c.id).collect::<Vec<_>>();
    assert_eq!(ids, vec![1, 3]);
    assert_eq!(repo.store().load().unwrap().unwrap(), repo.contacts());
}

#[test]
fn remove_missing_id_is_not_found_and_changes_nothing() {
    let mut repo = seeded_repo();
    let before = repo.contacts().to_vec();

    let err = repo.remove(77).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(77)));
    assert_eq!(repo.contacts(), before.as_slice());
}

#[test]
fn update_name_changes_only_name() {
    let mut repo = seeded_repo();
    let before = repo.find_by_id(2).unwrap().clone();

    let updated = repo
        .update(
            2,
            ContactPatch {
                name: Some("X".to_string()),
                ..ContactPatch::default()
            },
        )
        .unwrap();

    assert_eq!(updated.id, before.id);
    assert_eq!(updated.name, "X");
    assert_eq!(updated.email, before.email);
    assert_eq!(updated.phone, before.phone);
    assert_eq!(updated.favorite, before.favorite);
    assert_eq!(repo.store().load().unwrap().unwrap()[1], updated);
}

#[test]
fn update_missing_id_is_not_found() {
    let mut repo = seeded_repo();
    let err = repo.update(9, ContactPatch::default()).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(9)));
}

#[test]
fn search_is_case_insensitive_on_name_and_email() {
    let repo = seeded_repo();

    let hits = repo.search(&SearchTerm::parse("ROCA").unwrap());
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 2);

    let hits = repo.search(&SearchTerm::parse("Example.COM").unwrap());
    assert_eq!(hits.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 2]);
}

#[test]
fn search_matches_phone_substrings() {
    let repo = seeded_repo();
    let hits = repo.search(&SearchTerm::parse("5556").unwrap());
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Carla Vives");
}

#[test]
fn empty_search_term_cannot_be_built() {
    assert!(SearchTerm::parse("").is_none());
    assert!(SearchTerm::parse("  ").is_none());
}

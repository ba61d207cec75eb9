//! Member repository

use crate::error::StoreResult;
use crate::store::{find_by_id, find_by_id_mut, Record, Store};
use biblio_core::{Member, MemberId};

/// Fields for a new member
#[derive(Debug, Clone)]
pub struct NewMember {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// Partial update; `None` fields keep their current value
///
/// The derived fields (`active`, `pending_fines_count`) are not updatable
/// here; they belong to the soft-delete and circulation workflows.
#[derive(Debug, Clone, Default)]
pub struct MemberUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Creates a member with a counter-assigned id
pub fn create_member(store: &Store, new: NewMember) -> StoreResult<Member> {
    let mut members: Vec<Member> = store.load();
    let id = MemberId::new(store.next_id(Member::COLLECTION)?);
    let member = Member::new(
        id,
        new.first_name,
        new.last_name,
        new.email,
        new.phone,
        new.address,
    );
    members.push(member.clone());
    store.save(&members)?;
    log::info!("Created member {} ({})", member.id, member.full_name());
    Ok(member)
}

/// Lists all members, active and deactivated
pub fn list_members(store: &Store) -> Vec<Member> {
    store.load()
}

/// Looks up one member by id
pub fn get_member(store: &Store, id: MemberId) -> Option<Member> {
    let members: Vec<Member> = store.load();
    find_by_id(&members, id.get()).cloned()
}

/// Applies a partial update; returns `Ok(false)` if the id is absent
pub fn update_member(store: &Store, id: MemberId, update: MemberUpdate) -> StoreResult<bool> {
    let mut members: Vec<Member> = store.load();
    let Some(member) = find_by_id_mut(&mut members, id.get()) else {
        return Ok(false);
    };

    if let Some(first_name) = update.first_name {
        member.first_name = first_name;
    }
    if let Some(last_name) = update.last_name {
        member.last_name = last_name;
    }
    if let Some(email) = update.email {
        member.email = email;
    }
    if let Some(phone) = update.phone {
        member.phone = phone;
    }
    if let Some(address) = update.address {
        member.address = address;
    }

    store.save(&members)?;
    Ok(true)
}

/// Soft-deletes a member; returns `Ok(false)` if the id is absent
pub fn deactivate_member(store: &Store, id: MemberId) -> StoreResult<bool> {
    let mut members: Vec<Member> = store.load();
    let Some(member) = find_by_id_mut(&mut members, id.get()) else {
        return Ok(false);
    };
    member.deactivate();
    store.save(&members)?;
    log::info!("Deactivated member {}", id);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, Store) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = Store::new(temp_dir.path().join("data")).expect("Failed to open store");
        (temp_dir, store)
    }

    fn new_member(first: &str) -> NewMember {
        NewMember {
            first_name: first.to_string(),
            last_name: "Perez".to_string(),
            email: format!("{}@example.com", first.to_lowercase()),
            phone: "12345678".to_string(),
            address: "123 Main Street".to_string(),
        }
    }

    #[test]
    fn test_create_defaults() {
        let (_temp_dir, store) = setup();
        let member = create_member(&store, new_member("Juan")).expect("Should create");

        assert_eq!(member.id.get(), 1);
        assert!(member.active);
        assert_eq!(member.pending_fines_count, 0);
    }

    #[test]
    fn test_update_partial_fields() {
        let (_temp_dir, store) = setup();
        let member = create_member(&store, new_member("Maria")).expect("Should create");

        let updated = update_member(
            &store,
            member.id,
            MemberUpdate {
                phone: Some("87654321".to_string()),
                address: Some("456 Central Avenue".to_string()),
                ..Default::default()
            },
        )
        .expect("Should update");
        assert!(updated);

        let found = get_member(&store, member.id).expect("Should find");
        assert_eq!(found.phone, "87654321");
        assert_eq!(found.address, "456 Central Avenue");
        assert_eq!(found.email, "maria@example.com");
    }

    #[test]
    fn test_deactivate_keeps_record() {
        let (_temp_dir, store) = setup();
        let member = create_member(&store, new_member("Juan")).expect("Should create");

        assert!(deactivate_member(&store, member.id).expect("Should deactivate"));

        let found = get_member(&store, member.id).expect("Record should remain");
        assert!(!found.active);
    }

    #[test]
    fn test_unknown_id() {
        let (_temp_dir, store) = setup();
        assert!(
            !update_member(&store, MemberId::new(7), MemberUpdate::default())
                .expect("Should not fail")
        );
        assert!(!deactivate_member(&store, MemberId::new(7)).expect("Should not fail"));
    }
}

//! The `Phonebook` registry: ordered contact collection with interior locking.
//!
//! A [`Phonebook`] owns the collection behind an `Arc<RwLock<..>>`, so the
//! handle is cheap to clone and every clone observes the same records. All
//! lookups are linear scans; the collection keeps insertion order.

use crate::config;
use crate::contact::Person;
use parking_lot::RwLock;
use rand::Rng;
use std::sync::Arc;
use thiserror::Error;

/// Errors surfaced by registry mutations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A contact with the same name is already listed. Checked only on
    /// insert; updates can still introduce duplicates.
    #[error("a contact named '{0}' is already listed")]
    DuplicateName(String),
}

/// Shared handle to the contact collection.
///
/// Cloning produces another handle to the same underlying records.
#[derive(Debug, Clone, Default)]
pub struct Phonebook {
    contacts: Arc<RwLock<Vec<Person>>>,
}

impl Phonebook {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry pre-populated with the four seed contacts the
    /// server starts with.
    pub fn with_seed_contacts() -> Self {
        let seed = vec![
            Person::new(1, "Arto Hellas", "040-123456"),
            Person::new(2, "Ada Lovelace", "39-44-5323523"),
            Person::new(3, "Dan Abramov", "12-43-234345"),
            Person::new(4, "Mary Poppendieck", "39-23-6423122"),
        ];
        Self {
            contacts: Arc::new(RwLock::new(seed)),
        }
    }

    /// Returns a snapshot of every contact in insertion order.
    pub fn list(&self) -> Vec<Person> {
        self.contacts.read().clone()
    }

    /// Returns the number of contacts.
    pub fn len(&self) -> usize {
        self.contacts.read().len()
    }

    /// Returns `true` when no contacts are listed.
    pub fn is_empty(&self) -> bool {
        self.contacts.read().is_empty()
    }

    /// Finds a contact by id.
    pub fn find(&self, id: u32) -> Option<Person> {
        self.contacts.read().iter().find(|p| p.id == id).cloned()
    }

    /// Appends a new contact with a generated id.
    ///
    /// Rejects names that are already listed. The generated id is a random
    /// draw in `[0, GENERATED_ID_BOUND)` with no collision check against
    /// existing ids.
    pub fn add(&self, name: String, number: String) -> Result<Person, RegistryError> {
        let mut contacts = self.contacts.write();
        if contacts.iter().any(|p| p.name == name) {
            return Err(RegistryError::DuplicateName(name));
        }
        let person = Person {
            id: generate_id(),
            name,
            number,
        };
        contacts.push(person.clone());
        Ok(person)
    }

    /// Replaces the name and number of the contact with the given id,
    /// keeping the id. Returns the updated record, or `None` if no contact
    /// has that id.
    pub fn update(&self, id: u32, name: String, number: String) -> Option<Person> {
        let mut contacts = self.contacts.write();
        let person = contacts.iter_mut().find(|p| p.id == id)?;
        person.name = name;
        person.number = number;
        Some(person.clone())
    }

    /// Removes the contact with the given id. Removal does not report
    /// whether the id existed.
    pub fn remove(&self, id: u32) {
        self.contacts.write().retain(|p| p.id != id);
    }
}

fn generate_id() -> u32 {
    rand::thread_rng().gen_range(0..config::GENERATED_ID_BOUND)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_contacts_keep_insertion_order() {
        let book = Phonebook::with_seed_contacts();
        let names: Vec<String> = book.list().into_iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            vec![
                "Arto Hellas",
                "Ada Lovelace",
                "Dan Abramov",
                "Mary Poppendieck"
            ]
        );
    }

    #[test]
    fn add_appends_and_generates_id_in_range() {
        let book = Phonebook::new();
        let person = book
            .add("Katariina".to_string(), "555-1234".to_string())
            .unwrap();
        assert!(person.id < config::GENERATED_ID_BOUND);
        assert_eq!(book.len(), 1);
        assert_eq!(book.list()[0], person);
    }

    #[test]
    fn add_rejects_duplicate_name() {
        let book = Phonebook::with_seed_contacts();
        let err = book
            .add("Arto Hellas".to_string(), "1".to_string())
            .unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateName(_)));
        assert_eq!(book.len(), 4);
    }

    #[test]
    fn find_returns_matching_record() {
        let book = Phonebook::with_seed_contacts();
        let person = book.find(3).unwrap();
        assert_eq!(person.name, "Dan Abramov");
        assert!(book.find(4321).is_none());
    }

    #[test]
    fn update_replaces_fields_and_keeps_id() {
        let book = Phonebook::with_seed_contacts();
        let updated = book
            .update(3, "Dan A.".to_string(), "000".to_string())
            .unwrap();
        assert_eq!(updated, Person::new(3, "Dan A.", "000"));

        let with_id_3: Vec<Person> = book.list().into_iter().filter(|p| p.id == 3).collect();
        assert_eq!(with_id_3, vec![Person::new(3, "Dan A.", "000")]);
    }

    #[test]
    fn update_unknown_id_leaves_collection_unchanged() {
        let book = Phonebook::with_seed_contacts();
        let before = book.list();
        assert!(book
            .update(4321, "Nobody".to_string(), "0".to_string())
            .is_none());
        assert_eq!(book.list(), before);
    }

    #[test]
    fn update_can_introduce_duplicate_name() {
        // Name uniqueness is only checked on insert.
        let book = Phonebook::with_seed_contacts();
        book.update(2, "Arto Hellas".to_string(), "39-44-5323523".to_string())
            .unwrap();
        let artos = book
            .list()
            .into_iter()
            .filter(|p| p.name == "Arto Hellas")
            .count();
        assert_eq!(artos, 2);
    }

    #[test]
    fn remove_is_idempotent() {
        let book = Phonebook::with_seed_contacts();
        book.remove(2);
        assert_eq!(book.len(), 3);
        assert!(book.find(2).is_none());

        book.remove(2);
        assert_eq!(book.len(), 3);
    }

    #[test]
    fn clones_share_the_same_collection() {
        let book = Phonebook::new();
        let handle = book.clone();
        handle
            .add("Katariina".to_string(), "555-1234".to_string())
            .unwrap();
        assert_eq!(book.len(), 1);
    }
}

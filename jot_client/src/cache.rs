use jot::Note;
use std::collections::HashMap;
use uuid::Uuid;

/// Cache key made of a resource kind and the resource's ID.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum CacheKey {
    /// A single note by ID.
    Note(Uuid),
    /// All notes belonging to an owner.
    Notes(String),
}

#[derive(Clone, Debug)]
enum Snapshot {
    Note(Note),
    Notes(Vec<Note>),
}

/// A successful write against the notes server.
#[derive(Clone, Copy, Debug)]
pub enum Mutation<'a> {
    Created { owner: &'a str },
    Updated { owner: &'a str, id: Uuid },
    Deleted { owner: &'a str, id: Uuid },
    SummaryPersisted { owner: &'a str, id: Uuid },
}

impl Mutation<'_> {
    /// Keys whose snapshots are stale once this mutation succeeds.
    pub fn stale_keys(&self) -> Vec<CacheKey> {
        match *self {
            Self::Created { owner } => vec![CacheKey::Notes(owner.to_string())],
            Self::Updated { owner, id }
            | Self::Deleted { owner, id }
            | Self::SummaryPersisted { owner, id } => {
                vec![CacheKey::Notes(owner.to_string()), CacheKey::Note(id)]
            }
        }
    }
}

/// Snapshots of remote notes, dropped whenever a write makes them stale.
#[derive(Debug, Default)]
pub struct QueryCache {
    snapshots: HashMap<CacheKey, Snapshot>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn note(&self, id: Uuid) -> Option<&Note> {
        match self.snapshots.get(&CacheKey::Note(id)) {
            Some(Snapshot::Note(note)) => Some(note),
            _ => None,
        }
    }

    pub fn notes(&self, owner: &str) -> Option<&[Note]> {
        match self.snapshots.get(&CacheKey::Notes(owner.to_string())) {
            Some(Snapshot::Notes(notes)) => Some(notes),
            _ => None,
        }
    }

    pub fn put_note(&mut self, note: Note) {
        self.snapshots
            .insert(CacheKey::Note(note.id), Snapshot::Note(note));
    }

    pub fn put_notes(&mut self, owner: &str, notes: Vec<Note>) {
        self.snapshots
            .insert(CacheKey::Notes(owner.to_string()), Snapshot::Notes(notes));
    }

    pub fn contains(&self, key: &CacheKey) -> bool {
        self.snapshots.contains_key(key)
    }

    pub fn invalidate(&mut self, key: &CacheKey) {
        self.snapshots.remove(key);
    }

    pub fn apply(&mut self, mutation: Mutation<'_>) {
        for key in mutation.stale_keys() {
            self.invalidate(&key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn note(owner: &str) -> Note {
        let now = Utc::now();
        Note {
            id: Uuid::new_v4(),
            title: "T".to_string(),
            content: "C".to_string(),
            summary: None,
            created_at: now,
            updated_at: now,
            user_id: owner.to_string(),
        }
    }

    #[test]
    fn create_only_invalidates_owner_list() {
        let mut cache = QueryCache::new();
        let alice_note = note("alice");
        let id = alice_note.id;
        cache.put_note(alice_note.clone());
        cache.put_notes("alice", vec![alice_note]);
        cache.put_notes("bob", vec![]);

        cache.apply(Mutation::Created { owner: "alice" });
        assert!(cache.notes("alice").is_none());
        assert!(cache.notes("bob").is_some());
        assert!(cache.note(id).is_some());
    }

    #[test]
    fn writes_to_a_note_invalidate_it_and_its_list() {
        let mutations: [fn(&str, Uuid) -> Mutation<'_>; 3] = [
            |owner, id| Mutation::Updated { owner, id },
            |owner, id| Mutation::Deleted { owner, id },
            |owner, id| Mutation::SummaryPersisted { owner, id },
        ];
        for make in mutations {
            let mut cache = QueryCache::new();
            let first = note("alice");
            let second = note("alice");
            cache.put_note(first.clone());
            cache.put_note(second.clone());
            cache.put_notes("alice", vec![first.clone(), second.clone()]);

            cache.apply(make("alice", first.id));
            assert!(!cache.contains(&CacheKey::Note(first.id)));
            assert!(!cache.contains(&CacheKey::Notes("alice".to_string())));
            assert_eq!(cache.note(second.id), Some(&second));
        }
    }
}

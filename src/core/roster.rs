use crate::core::{Result, Storage, Student};

/// Encodes a roster as a pretty-printed JSON array of records.
///
/// This pair defines the persisted file format, decoupled from the in-memory
/// representation: self-describing, stable for this crate, no version tag.
pub fn encode_roster(students: &[Student]) -> Result<Vec<u8>> {
    let data = serde_json::to_vec_pretty(students)?;
    Ok(data)
}

/// Decodes a roster previously written by [`encode_roster`].
pub fn decode_roster(data: &[u8]) -> Result<Vec<Student>> {
    let students = serde_json::from_slice(data)?;
    Ok(students)
}

/// Owns the ordered roster and its storage backend.
///
/// Insertion order is preserved and duplicate ids are allowed. The store is
/// the sole owner of its records; callers inspect them through
/// [`RosterStore::list_all`] or [`RosterStore::snapshot`].
pub struct RosterStore<S: Storage> {
    storage: S,
    students: Vec<Student>,
}

impl<S: Storage> RosterStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            students: Vec::new(),
        }
    }

    /// Appends a record to the end of the roster. An absent record is a
    /// no-op. Returns whether a record was added.
    pub fn add(&mut self, student: Option<Student>) -> bool {
        match student {
            Some(student) => {
                tracing::debug!("adding student {}", student.id);
                self.students.push(student);
                true
            }
            None => false,
        }
    }

    /// All records in insertion order, or `None` when the roster is empty.
    pub fn list_all(&self) -> Option<&[Student]> {
        if self.students.is_empty() {
            None
        } else {
            Some(&self.students)
        }
    }

    /// Linear scan, case-insensitive exact match on id. Duplicate ids
    /// resolve to the first-inserted record.
    pub fn find_by_id(&self, id: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.id.eq_ignore_ascii_case(id))
    }

    /// Writes the whole roster to `path`, overwriting any existing file.
    /// Returns the number of records written. The in-memory roster is
    /// unchanged whether or not the write succeeds.
    pub fn save_to_file(&self, path: &str) -> Result<usize> {
        let data = encode_roster(&self.students)?;
        self.storage.write_file(path, &data)?;
        tracing::debug!("saved {} records to {}", self.students.len(), path);
        Ok(self.students.len())
    }

    /// Replaces the whole roster with the contents of `path`. Load is
    /// all-or-nothing: on any error the current roster is left unchanged.
    pub fn load_from_file(&mut self, path: &str) -> Result<usize> {
        let data = self.storage.read_file(path)?;
        let loaded = decode_roster(&data)?;
        tracing::debug!("loaded {} records from {}", loaded.len(), path);
        self.students = loaded;
        Ok(self.students.len())
    }

    /// Copy of the roster for read-only inspection. Mutating the copy never
    /// touches the store.
    pub fn snapshot(&self) -> Vec<Student> {
        self.students.clone()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

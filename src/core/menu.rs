use std::io::{BufRead, Write};

use crate::core::roster::RosterStore;
use crate::core::{ConfigProvider, Result, Storage, Student};
use crate::utils::error::RosterError;

/// Menu-driven operator interface over a [`RosterStore`].
///
/// Generic over the reader/writer pair so whole sessions can be scripted in
/// tests. All presentation happens here; the store only returns data, and
/// save/load failures are recovered at this boundary without ending the
/// session or touching the roster.
pub struct MenuShell<S: Storage, C: ConfigProvider, R: BufRead, W: Write> {
    store: RosterStore<S>,
    config: C,
    reader: R,
    writer: W,
}

impl<S: Storage, C: ConfigProvider, R: BufRead, W: Write> MenuShell<S, C, R, W> {
    pub fn new(store: RosterStore<S>, config: C, reader: R, writer: W) -> Self {
        Self {
            store,
            config,
            reader,
            writer,
        }
    }

    /// Runs the menu loop until the operator quits or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;
            let choice = match self.read_line()? {
                Some(line) => line,
                None => break,
            };

            match choice.trim() {
                "1" => self.add_student()?,
                "2" => self.display_all()?,
                "3" => self.search_by_id()?,
                "4" => self.save()?,
                "5" => self.load()?,
                "6" => {
                    writeln!(self.writer, "Exiting...")?;
                    break;
                }
                _ => writeln!(self.writer, "Invalid choice. Please try again.")?,
            }
        }
        Ok(())
    }

    /// Read-only view of the underlying store.
    pub fn store(&self) -> &RosterStore<S> {
        &self.store
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "== Student Record Manager ==")?;
        writeln!(self.writer, "1. Add Student")?;
        writeln!(self.writer, "2. Display All Students")?;
        writeln!(self.writer, "3. Search Student by ID")?;
        writeln!(self.writer, "4. Save to File")?;
        writeln!(self.writer, "5. Load from File")?;
        writeln!(self.writer, "6. Exit")?;
        write!(self.writer, "Enter your choice: ")?;
        self.writer.flush()?;
        Ok(())
    }

    /// Next input line without its trailing newline, or `None` at EOF.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;
        self.read_line()
    }

    fn add_student(&mut self) -> Result<()> {
        let Some(id) = self.prompt("Enter ID: ")? else {
            return Ok(());
        };
        let Some(name) = self.prompt("Enter Name: ")? else {
            return Ok(());
        };
        let Some(major) = self.prompt("Enter Major: ")? else {
            return Ok(());
        };
        let Some(raw_gpa) = self.prompt("Enter GPA: ")? else {
            return Ok(());
        };

        // A malformed GPA is a caller-input error: report it and hand the
        // store nothing, leaving the roster untouched.
        let student = match raw_gpa.trim().parse::<f64>() {
            Ok(gpa) => Some(Student::new(id, name, major, gpa)),
            Err(_) => {
                let err = RosterError::InputError {
                    message: format!("GPA must be a number, got '{}'", raw_gpa.trim()),
                };
                writeln!(self.writer, "{}. Student not added.", err)?;
                None
            }
        };

        if self.store.add(student) {
            writeln!(self.writer, "Student added successfully!")?;
        }
        Ok(())
    }

    fn display_all(&mut self) -> Result<()> {
        match self.store.list_all() {
            None => writeln!(self.writer, "No students in the system.")?,
            Some(students) => {
                writeln!(self.writer, "\n=== All Students ===")?;
                for student in students {
                    writeln!(self.writer, "{}", student)?;
                }
            }
        }
        Ok(())
    }

    fn search_by_id(&mut self) -> Result<()> {
        let Some(id) = self.prompt("Enter ID to search: ")? else {
            return Ok(());
        };
        match self.store.find_by_id(&id) {
            Some(student) => writeln!(self.writer, "{}", student)?,
            None => writeln!(self.writer, "Student not found.")?,
        }
        Ok(())
    }

    fn save(&mut self) -> Result<()> {
        let path = self.config.data_file().to_string();
        match self.store.save_to_file(&path) {
            Ok(count) => {
                tracing::info!("saved {} records to {}", count, path);
                writeln!(self.writer, "Student data saved to {}", path)?;
            }
            Err(e) => {
                tracing::error!("save to {} failed: {}", path, e);
                writeln!(self.writer, "Error saving student data: {}", e)?;
            }
        }
        Ok(())
    }

    fn load(&mut self) -> Result<()> {
        let path = self.config.data_file().to_string();
        match self.store.load_from_file(&path) {
            Ok(count) => {
                tracing::info!("loaded {} records from {}", count, path);
                writeln!(self.writer, "Student data loaded from {}", path)?;
            }
            Err(e) => {
                tracing::error!("load from {} failed: {}", path, e);
                writeln!(self.writer, "Error loading student data: {}", e)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::io::Cursor;
    use std::rc::Rc;

    #[derive(Clone)]
    struct MockStorage {
        files: Rc<RefCell<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Rc::new(RefCell::new(HashMap::new())),
            }
        }

        fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            self.files.borrow().get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            self.files.borrow().get(path).cloned().ok_or_else(|| {
                RosterError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            self.files
                .borrow_mut()
                .insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct MockConfig {
        data_dir: String,
        data_file: String,
    }

    impl MockConfig {
        fn new() -> Self {
            Self {
                data_dir: ".".to_string(),
                data_file: "students.dat".to_string(),
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn data_dir(&self) -> &str {
            &self.data_dir
        }

        fn data_file(&self) -> &str {
            &self.data_file
        }

        fn verbose(&self) -> bool {
            false
        }
    }

    fn run_session(storage: MockStorage, script: &str) -> String {
        let store = RosterStore::new(storage);
        let mut output = Vec::new();
        let mut shell = MenuShell::new(
            store,
            MockConfig::new(),
            Cursor::new(script.to_string()),
            &mut output,
        );
        shell.run().unwrap();
        drop(shell);
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_full_session_add_display_search_save() {
        let storage = MockStorage::new();
        let script = "1\nS1\nAnn\nCS\n3.9\n1\nS2\nBo\nMath\n3.2\n2\n3\ns2\n4\n6\n";

        let output = run_session(storage.clone(), script);

        assert_eq!(output.matches("Student added successfully!").count(), 2);
        assert!(output.contains("=== All Students ==="));

        let first = output.find("ID: S1 | Name: Ann | Major: CS | GPA: 3.90").unwrap();
        let second = output.find("ID: S2 | Name: Bo | Major: Math | GPA: 3.20").unwrap();
        assert!(first < second);

        // The search for "s2" prints Bo's record a second time.
        assert_eq!(
            output.matches("ID: S2 | Name: Bo | Major: Math | GPA: 3.20").count(),
            2
        );

        assert!(output.contains("Student data saved to students.dat"));
        assert!(output.contains("Exiting..."));

        let saved = storage.get_file("students.dat").unwrap();
        let roster = crate::core::roster::decode_roster(&saved).unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].id, "S1");
        assert_eq!(roster[1].id, "S2");
    }

    #[test]
    fn test_load_replaces_roster_in_new_session() {
        let storage = MockStorage::new();
        run_session(storage.clone(), "1\nS1\nAnn\nCS\n3.9\n4\n6\n");

        let output = run_session(storage, "5\n2\n6\n");

        assert!(output.contains("Student data loaded from students.dat"));
        assert!(output.contains("ID: S1 | Name: Ann | Major: CS | GPA: 3.90"));
    }

    #[test]
    fn test_invalid_gpa_aborts_add() {
        let output = run_session(MockStorage::new(), "1\nS1\nAnn\nCS\nabc\n2\n6\n");

        assert!(output
            .contains("Invalid input: GPA must be a number, got 'abc'. Student not added."));
        assert!(!output.contains("Student added successfully!"));
        assert!(output.contains("No students in the system."));
    }

    #[test]
    fn test_display_empty_roster() {
        let output = run_session(MockStorage::new(), "2\n6\n");
        assert!(output.contains("No students in the system."));
    }

    #[test]
    fn test_search_not_found() {
        let output = run_session(MockStorage::new(), "3\nS9\n6\n");
        assert!(output.contains("Student not found."));
    }

    #[test]
    fn test_invalid_choice_reprompts() {
        let output = run_session(MockStorage::new(), "9\n6\n");
        assert!(output.contains("Invalid choice. Please try again."));
        assert!(output.contains("Exiting..."));
    }

    #[test]
    fn test_load_error_is_recovered_and_roster_kept() {
        let output = run_session(MockStorage::new(), "1\nS1\nAnn\nCS\n3.9\n5\n2\n6\n");

        assert!(output.contains("Error loading student data:"));
        assert!(output.contains("ID: S1 | Name: Ann | Major: CS | GPA: 3.90"));
    }

    #[test]
    fn test_eof_ends_session() {
        let output = run_session(MockStorage::new(), "");
        assert!(output.contains("== Student Record Manager =="));
    }

    #[test]
    fn test_eof_mid_add_is_harmless() {
        let output = run_session(MockStorage::new(), "1\nS1\n");
        assert!(output.contains("Enter Name: "));
        assert!(!output.contains("Student added successfully!"));
    }
}

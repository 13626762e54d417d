//! Domain model: validated value types, persons, modules and the book.

pub mod module;
pub mod person;
pub mod sample;
pub mod tag;
pub mod user_prefs;

pub use module::{Module, ModuleCode, ModuleName};
pub use person::{Email, Name, Office, Person, Phone, Professor, Student};
pub use tag::Tag;
pub use user_prefs::UserPrefs;

use std::fmt;

/// Rejection of a candidate value by a value type's format predicate.
///
/// Carries the type's fixed constraint message so every layer reports the
/// same wording for the same field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct InvalidValue(pub &'static str);

/// Violation of a book-level invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookError {
    #[error("A module with code {0} already exists in the book")]
    DuplicateModule(ModuleCode),
    #[error("A person named {0} already exists in the book")]
    DuplicatePerson(Name),
    #[error("No module with code {0} exists in the book")]
    UnknownModule(ModuleCode),
}

/// The contact book: a master list of persons plus the modules they belong
/// to.
///
/// Invariants:
/// - at most one module per [`ModuleCode`];
/// - at most one person per [`Name`];
/// - every code in a person's module set names a module in the book, and
///   that module's member lists contain the person.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UniBook {
    persons: Vec<Person>,
    modules: Vec<Module>,
}

impl UniBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn has_module(&self, code: &ModuleCode) -> bool {
        self.modules.iter().any(|module| module.code() == code)
    }

    pub fn has_person(&self, name: &Name) -> bool {
        self.persons.iter().any(|person| person.name() == name)
    }

    /// Adds a module, rejecting a second module with the same code.
    pub fn add_module(&mut self, module: Module) -> Result<(), BookError> {
        if self.has_module(module.code()) {
            return Err(BookError::DuplicateModule(module.code().clone()));
        }
        self.modules.push(module);
        Ok(())
    }

    /// Adds a person to the master list and to the member lists of every
    /// module in the person's module set.
    ///
    /// All codes are checked before anything is mutated, so a failed add
    /// leaves the book unchanged.
    pub fn add_person(&mut self, person: Person) -> Result<(), BookError> {
        if self.has_person(person.name()) {
            return Err(BookError::DuplicatePerson(person.name().clone()));
        }
        if let Some(code) = person
            .modules()
            .iter()
            .find(|code| !self.has_module(code))
        {
            return Err(BookError::UnknownModule(code.clone()));
        }

        for module in self
            .modules
            .iter_mut()
            .filter(|module| person.modules().contains(module.code()))
        {
            match &person {
                Person::Professor(professor) => module.add_professor(professor.clone()),
                Person::Student(student) => module.add_student(student.clone()),
            }
        }
        self.persons.push(person);
        Ok(())
    }

    /// Removes the person at `index` of the master list, and from every
    /// module member list. Returns `None` if the index is out of bounds.
    pub fn remove_person(&mut self, index: usize) -> Option<Person> {
        if index >= self.persons.len() {
            return None;
        }
        let person = self.persons.remove(index);
        for module in &mut self.modules {
            module.remove_member(person.name());
        }
        Some(person)
    }
}

impl fmt::Display for UniBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} persons, {} modules",
            self.persons.len(),
            self.modules.len()
        )
    }
}

/// The in-memory application model: the book, the active user preferences
/// and the current person filter.
#[derive(Debug)]
pub struct ModelManager {
    book: UniBook,
    user_prefs: UserPrefs,
    name_filter: Option<Vec<String>>,
}

impl ModelManager {
    pub fn new(book: UniBook, user_prefs: UserPrefs) -> Self {
        log::info!("Initializing model with {book}");
        Self {
            book,
            user_prefs,
            name_filter: None,
        }
    }

    pub fn book(&self) -> &UniBook {
        &self.book
    }

    pub fn user_prefs(&self) -> &UserPrefs {
        &self.user_prefs
    }

    pub fn add_person(&mut self, person: Person) -> Result<(), BookError> {
        self.book.add_person(person)
    }

    pub fn add_module(&mut self, module: Module) -> Result<(), BookError> {
        self.book.add_module(module)
    }

    /// Restricts the displayed person list to names containing any of the
    /// given keywords (full-word, case-insensitive).
    pub fn set_name_filter(&mut self, keywords: Vec<String>) {
        self.name_filter = Some(
            keywords
                .into_iter()
                .map(|keyword| keyword.to_lowercase())
                .collect(),
        );
    }

    pub fn clear_name_filter(&mut self) {
        self.name_filter = None;
    }

    /// The persons currently visible, in master-list order with the filter
    /// applied.
    pub fn displayed_persons(&self) -> Vec<&Person> {
        self.book
            .persons()
            .iter()
            .filter(|person| self.matches_filter(person))
            .collect()
    }

    /// Deletes the person at the given index *of the displayed list* and
    /// returns it, or `None` if the index exceeds the displayed list.
    pub fn delete_displayed_person(&mut self, index: crate::index::Index) -> Option<Person> {
        let underlying = self
            .book
            .persons()
            .iter()
            .enumerate()
            .filter(|(_, person)| self.matches_filter(person))
            .map(|(position, _)| position)
            .nth(index.zero_based())?;
        self.book.remove_person(underlying)
    }

    fn matches_filter(&self, person: &Person) -> bool {
        match &self.name_filter {
            None => true,
            Some(keywords) => person
                .name()
                .as_str()
                .split_whitespace()
                .any(|word| keywords.iter().any(|keyword| word.eq_ignore_ascii_case(keyword))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::Index;
    use crate::testutil::{ModuleBuilder, ProfessorBuilder, StudentBuilder};
    use claims::{assert_err, assert_ok};

    fn book_with_module() -> UniBook {
        let mut book = UniBook::new();
        assert_ok!(book.add_module(ModuleBuilder::new().build_empty()));
        book
    }

    #[test]
    fn duplicate_module_codes_are_rejected() {
        let mut book = book_with_module();
        let duplicate = ModuleBuilder::new()
            .with_module_name("Another Title")
            .build_empty();
        assert_eq!(
            book.add_module(duplicate),
            Err(BookError::DuplicateModule(
                ModuleCode::new("CS2103").expect("valid")
            ))
        );
    }

    #[test]
    fn add_person_attaches_to_module_lists() {
        let mut book = book_with_module();
        let student = StudentBuilder::new().with_module("CS2103").build();
        assert_ok!(book.add_person(Person::Student(student)));

        assert_eq!(book.persons().len(), 1);
        assert_eq!(book.modules()[0].students().len(), 1);
    }

    #[test]
    fn add_person_with_unknown_module_leaves_book_unchanged() {
        let mut book = book_with_module();
        let student = StudentBuilder::new()
            .with_module("CS2103")
            .with_module("CS9999")
            .build();
        assert_err!(book.add_person(Person::Student(student)));
        assert!(book.persons().is_empty());
        assert_eq!(book.modules()[0].students().len(), 0);
    }

    #[test]
    fn duplicate_person_names_are_rejected() {
        let mut book = UniBook::new();
        assert_ok!(book.add_person(Person::Student(StudentBuilder::new().build())));
        assert_err!(book.add_person(Person::Student(StudentBuilder::new().build())));
    }

    #[test]
    fn remove_person_clears_module_membership() {
        let mut book = book_with_module();
        let professor = ProfessorBuilder::new()
            .with_name("Aaron Tan")
            .with_module("CS2103")
            .build();
        assert_ok!(book.add_person(Person::Professor(professor)));

        let removed = book.remove_person(0).expect("person exists");
        assert_eq!(removed.name().as_str(), "Aaron Tan");
        assert_eq!(book.modules()[0].member_count(), 0);
    }

    #[test]
    fn filter_narrows_displayed_persons_case_insensitively() {
        let mut model = ModelManager::new(UniBook::new(), UserPrefs::default());
        assert_ok!(
            model.add_person(Person::Student(
                StudentBuilder::new().with_name("Alex Yeoh").build()
            ))
        );
        assert_ok!(
            model.add_person(Person::Student(
                StudentBuilder::new().with_name("Bernice Yu").build()
            ))
        );

        model.set_name_filter(vec!["alex".to_string()]);
        let displayed = model.displayed_persons();
        assert_eq!(displayed.len(), 1);
        assert_eq!(displayed[0].name().as_str(), "Alex Yeoh");

        model.clear_name_filter();
        assert_eq!(model.displayed_persons().len(), 2);
    }

    #[test]
    fn delete_uses_displayed_positions_not_master_positions() {
        let mut model = ModelManager::new(UniBook::new(), UserPrefs::default());
        assert_ok!(
            model.add_person(Person::Student(
                StudentBuilder::new().with_name("Alex Yeoh").build()
            ))
        );
        assert_ok!(
            model.add_person(Person::Student(
                StudentBuilder::new().with_name("Bernice Yu").build()
            ))
        );

        model.set_name_filter(vec!["bernice".to_string()]);
        let deleted = model
            .delete_displayed_person(Index::from_one_based(1).expect("valid"))
            .expect("one person displayed");
        assert_eq!(deleted.name().as_str(), "Bernice Yu");
        assert_eq!(model.book().persons().len(), 1);
    }
}

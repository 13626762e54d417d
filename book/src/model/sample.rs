//! Bundled starter data used when no data file exists yet.

use std::collections::BTreeSet;

use crate::model::{
    Email, Module, ModuleCode, ModuleName, Name, Office, Person, Phone, Professor, Student, Tag,
    UniBook,
};

/// Returns the sample book shown on first launch.
pub fn sample_book() -> UniBook {
    let mut book = UniBook::new();
    for (name, code) in [
        ("Software Engineering", "CS2103"),
        ("Effective Communication", "CS2101"),
        ("Programming Methodology", "CS1101S"),
    ] {
        let module = Module::new(module_name(name), module_code(code));
        if let Err(e) = book.add_module(module) {
            log::warn!("Skipping sample module {code}: {e}");
        }
    }

    let professors = [
        ("Damith Rajapakse", "98765432", "damith@nus.edu.sg", "COM2 02-57", &["CS2103"][..]),
        ("Aaron Tan", "91234567", "aaron@nus.edu.sg", "COM1 03-12", &["CS1101S"][..]),
    ];
    for (name, phone, email, office, codes) in professors {
        let person = Person::Professor(Professor::new(
            person_name(name),
            phone_number(phone),
            email_address(email),
            Office::new(office).expect("sample office is well-formed"),
            BTreeSet::new(),
            module_codes(codes),
        ));
        if let Err(e) = book.add_person(person) {
            log::warn!("Skipping sample professor {name}: {e}");
        }
    }

    let students = [
        ("Alex Yeoh", "87438807", "alexyeoh@example.com", &["CS2103", "CS2101"][..], &["friend"][..]),
        ("Bernice Yu", "99272758", "berniceyu@example.com", &["CS2103"][..], &[][..]),
        ("Charlotte Oliveiro", "93210283", "charlotte@example.com", &["CS1101S"][..], &["TA"][..]),
    ];
    for (name, phone, email, codes, tags) in students {
        let person = Person::Student(Student::new(
            person_name(name),
            phone_number(phone),
            email_address(email),
            tag_set(tags),
            module_codes(codes),
        ));
        if let Err(e) = book.add_person(person) {
            log::warn!("Skipping sample student {name}: {e}");
        }
    }

    book
}

fn person_name(value: &str) -> Name {
    Name::new(value).expect("sample name is well-formed")
}

fn phone_number(value: &str) -> Phone {
    Phone::new(value).expect("sample phone is well-formed")
}

fn email_address(value: &str) -> Email {
    Email::new(value).expect("sample email is well-formed")
}

fn module_name(value: &str) -> ModuleName {
    ModuleName::new(value).expect("sample module name is well-formed")
}

fn module_code(value: &str) -> ModuleCode {
    ModuleCode::new(value).expect("sample module code is well-formed")
}

fn module_codes(values: &[&str]) -> BTreeSet<ModuleCode> {
    values.iter().map(|value| module_code(value)).collect()
}

fn tag_set(values: &[&str]) -> BTreeSet<Tag> {
    values
        .iter()
        .map(|value| Tag::new(*value).expect("sample tag is well-formed"))
        .collect()
}

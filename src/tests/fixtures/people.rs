// Shared test fixture for Person records.

use crate::modules::people::core::person::{Person, PersonId};

pub struct PersonBuilder {
    inner: Person,
}

impl Default for PersonBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl PersonBuilder {
    pub fn new() -> Self {
        Self {
            inner: Person {
                id: 0,
                first_name: "Teddy".to_string(),
                last_name: "Test".to_string(),
                age: 30,
            },
        }
    }

    pub fn id(mut self, v: PersonId) -> Self {
        self.inner.id = v;
        self
    }

    pub fn first_name(mut self, v: impl Into<String>) -> Self {
        self.inner.first_name = v.into();
        self
    }

    pub fn last_name(mut self, v: impl Into<String>) -> Self {
        self.inner.last_name = v.into();
        self
    }

    pub fn age(mut self, v: i32) -> Self {
        self.inner.age = v;
        self
    }

    pub fn build(self) -> Person {
        self.inner
    }
}

#[cfg(test)]
mod person_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let person = PersonBuilder::new()
            .id(12)
            .first_name("Bob")
            .last_name("Barker")
            .age(53)
            .build();

        assert_eq!(person.id, 12);
        assert_eq!(person.first_name, "Bob");
        assert_eq!(person.last_name, "Barker");
        assert_eq!(person.age, 53);
    }
}

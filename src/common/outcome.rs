use crate::common::error::StoreError;

/// A best-effort result: the value is always usable, the errors say what was
/// skipped to produce it.
#[derive(Debug)]
pub struct Outcome<T> {
    pub value: T,
    pub errors: Vec<StoreError>,
}

impl<T> Outcome<T> {
    pub fn clean(value: T) -> Self {
        Self {
            value,
            errors: Vec::new(),
        }
    }

    pub fn with_error(value: T, error: StoreError) -> Self {
        Self {
            value,
            errors: vec![error],
        }
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Moves the errors of `other` into `self` and returns its value.
    pub fn absorb<U>(&mut self, other: Outcome<U>) -> U {
        self.errors.extend(other.errors);
        other.value
    }

    pub fn into_parts(self) -> (T, Vec<StoreError>) {
        (self.value, self.errors)
    }
}

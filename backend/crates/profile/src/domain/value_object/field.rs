//! Field - a write-side value that is either supplied or not
//!
//! Sparse updates only touch [`Field::Set`] values. Using an explicit enum
//! instead of `Option` keeps "not supplied" distinct from "stored as empty"
//! in every signature that builds an update.

/// A single field of a sparse update.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Field<T> {
    /// Not supplied; the stored value is left as is.
    #[default]
    Unset,
    /// Supplied; overwrites the stored value.
    Set(T),
}

impl<T> Field<T> {
    pub fn as_set(&self) -> Option<&T> {
        match self {
            Field::Set(value) => Some(value),
            Field::Unset => None,
        }
    }

    pub fn into_set(self) -> Option<T> {
        match self {
            Field::Set(value) => Some(value),
            Field::Unset => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Field<U> {
        match self {
            Field::Set(value) => Field::Set(f(value)),
            Field::Unset => Field::Unset,
        }
    }

    /// Overwrite `target` when set.
    pub fn apply_to(&self, target: &mut Option<T>)
    where
        T: Clone,
    {
        if let Field::Set(value) = self {
            *target = Some(value.clone());
        }
    }
}

impl Field<String> {
    /// Text input: absent, empty, or whitespace-only input counts as not supplied.
    pub fn from_text(raw: Option<String>) -> Self {
        match raw {
            Some(text) if !text.trim().is_empty() => Field::Set(text),
            _ => Field::Unset,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        self.as_set().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text_treats_blank_as_unset() {
        assert_eq!(Field::from_text(None), Field::Unset);
        assert_eq!(Field::from_text(Some(String::new())), Field::Unset);
        assert_eq!(Field::from_text(Some("   ".into())), Field::Unset);
        assert_eq!(
            Field::from_text(Some("Acme".into())),
            Field::Set("Acme".to_string())
        );
    }

    #[test]
    fn test_apply_to_only_overwrites_when_set() {
        let mut stored = Some("old".to_string());
        Field::<String>::Unset.apply_to(&mut stored);
        assert_eq!(stored.as_deref(), Some("old"));

        Field::Set("new".to_string()).apply_to(&mut stored);
        assert_eq!(stored.as_deref(), Some("new"));
    }
}

//! Field names and the canonical column-name mapping.
//!
//! A [`Name`] is the case-preserving identifier a record declares
//! (`FirstName`). Its external form is the lowercase, underscore-delimited
//! column name (`first_name`). An underscore goes before every uppercase
//! letter except the first, so acronyms spell out letter by letter
//! (`UserID` maps to `user_i_d`) and every name starting with an uppercase
//! letter or digit maps back to itself.

use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;

/// The declared name of a mapped field.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    /// Create a name from its declared form.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Recover a declared name from its external column form.
    ///
    /// Each underscore-delimited segment gets its first character
    /// uppercased: `first_name` becomes `FirstName`, `id` becomes `Id`.
    pub fn from_snake_case(column: &str) -> Self {
        let mut out = String::with_capacity(column.len());
        for segment in column.split('_').filter(|s| !s.is_empty()) {
            let mut chars = segment.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.push_str(chars.as_str());
            }
        }
        Self(out)
    }

    /// The declared form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The external column form.
    pub fn snake_case(&self) -> String {
        let mut out = String::with_capacity(self.0.len() + 4);
        for (i, c) in self.0.chars().enumerate() {
            if i > 0 && c.is_uppercase() {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        }
        out
    }

    /// Whether this is a usable identifier: non-empty, starting with a
    /// letter or underscore, continuing with alphanumerics or underscores.
    pub fn is_identifier(&self) -> bool {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(c) if c.is_alphabetic() || c == '_' => {}
            _ => return false,
        }
        chars.all(|c| c.is_alphanumeric() || c == '_')
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Name {
    fn from(v: &str) -> Self {
        Self(v.to_owned())
    }
}

impl From<String> for Name {
    fn from(v: String) -> Self {
        Self(v)
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Name {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Name {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Name {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// An ordered list of field names.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Names(Vec<Name>);

impl Names {
    /// An empty list.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a name.
    pub fn push(&mut self, name: impl Into<Name>) {
        self.0.push(name.into());
    }

    /// Whether `name` is present (declared form).
    pub fn contains_name(&self, name: &str) -> bool {
        self.0.iter().any(|n| n.as_str() == name)
    }

    /// Whether every name in `self` also appears in `other`.
    pub fn is_subset(&self, other: &Names) -> bool {
        self.0.iter().all(|n| other.contains_name(n.as_str()))
    }

    /// External column forms, in order.
    pub fn snake_case(&self) -> Vec<String> {
        self.0.iter().map(Name::snake_case).collect()
    }

    /// Consume into the underlying vector.
    pub fn into_vec(self) -> Vec<Name> {
        self.0
    }
}

impl Deref for Names {
    type Target = [Name];

    fn deref(&self) -> &[Name] {
        &self.0
    }
}

impl fmt::Display for Names {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, name) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(name.as_str())?;
        }
        f.write_str("]")
    }
}

impl From<Vec<Name>> for Names {
    fn from(v: Vec<Name>) -> Self {
        Self(v)
    }
}

impl<N: Into<Name>> FromIterator<N> for Names {
    fn from_iter<I: IntoIterator<Item = N>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl IntoIterator for Names {
    type Item = Name;
    type IntoIter = std::vec::IntoIter<Name>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Names {
    type Item = &'a Name;
    type IntoIter = std::slice::Iter<'a, Name>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn snake_case_examples() {
        assert_eq!(Name::from("FirstName").snake_case(), "first_name");
        assert_eq!(Name::from("Id").snake_case(), "id");
        assert_eq!(Name::from("AGoodIdea").snake_case(), "a_good_idea");
        assert_eq!(Name::from("Field2Name").snake_case(), "field2_name");
    }

    #[test]
    fn acronyms_round_trip() {
        for declared in ["ID", "UserID", "HTTPServer", "A1B"] {
            let snake = Name::from(declared).snake_case();
            assert_eq!(Name::from_snake_case(&snake), declared, "via {snake}");
        }
        assert_eq!(Name::from("UserID").snake_case(), "user_i_d");
    }

    #[test]
    fn from_snake_case_examples() {
        assert_eq!(Name::from_snake_case("first_name"), "FirstName");
        assert_eq!(Name::from_snake_case("id"), "Id");
        assert_eq!(Name::from_snake_case("a_good_idea"), "AGoodIdea");
        assert_eq!(Name::from_snake_case("not_a_field"), "NotAField");
    }

    #[test]
    fn names_snake_case_preserves_order() {
        let names: Names = ["Id", "FirstName"].into_iter().collect();
        assert_eq!(names.snake_case(), vec!["id", "first_name"]);
        assert_eq!(names.to_string(), "[Id FirstName]");
    }

    #[test]
    fn identifier_check() {
        assert!(Name::from("FirstName").is_identifier());
        assert!(Name::from("_x1").is_identifier());
        assert!(!Name::from("").is_identifier());
        assert!(!Name::from("1st").is_identifier());
        assert!(!Name::from("first name").is_identifier());
    }

    fn arb_name() -> impl Strategy<Value = String> {
        "[A-Z][A-Za-z0-9]{0,12}"
    }

    proptest! {
        #[test]
        fn snake_round_trip(name in arb_name()) {
            let n = Name::from(name.as_str());
            prop_assert_eq!(Name::from_snake_case(&n.snake_case()), n);
        }

        #[test]
        fn snake_case_is_lowercase(name in arb_name()) {
            let snake = Name::from(name.as_str()).snake_case();
            prop_assert!(snake.chars().all(|c| !c.is_uppercase()));
        }
    }
}

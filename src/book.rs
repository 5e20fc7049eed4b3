//! The book record and its lenient JSON decoding.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

/// A single book on the shelf.
///
/// Wire shape:
///
/// ```text
/// { "id": "2", "title": "…", "author": "…",
///   "published_date": "…", "coverImageUrl": "…" }
/// ```
///
/// `id` and `published_date` are left out of the JSON when empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Book {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,

    pub title: String,

    pub author: String,

    #[serde(rename = "published_date", skip_serializing_if = "String::is_empty")]
    pub published_date: String,

    #[serde(rename = "coverImageUrl")]
    pub cover_image_url: String,
}

impl Book {
    /// Decodes a request body into a book, never failing.
    ///
    /// Only the first JSON value in `body` is read; anything after it is
    /// ignored. Object keys match the wire names case-insensitively and the
    /// last matching key wins. A field whose value is not a string (`null`,
    /// a number, …) is skipped while the other fields are still filled.
    ///
    /// An empty body, malformed JSON, or a first value that is not an
    /// object produce [`Book::default()`].
    pub fn from_json_lenient(body: &[u8]) -> Self {
        let mut values = serde_json::Deserializer::from_slice(body).into_iter::<Entries>();
        let entries = match values.next() {
            Some(Ok(Entries(entries))) => entries,
            Some(Err(e)) => {
                warn!(error = %e, "discarding undecodable book body");
                return Book::default();
            }
            None => return Book::default(),
        };

        let mut book = Book::default();
        for (key, value) in entries {
            if let (Some(field), serde_json::Value::String(s)) = (book.field_mut(&key), value) {
                *field = s;
            }
        }
        book
    }

    fn field_mut(&mut self, key: &str) -> Option<&mut String> {
        let field = if key.eq_ignore_ascii_case("id") {
            &mut self.id
        } else if key.eq_ignore_ascii_case("title") {
            &mut self.title
        } else if key.eq_ignore_ascii_case("author") {
            &mut self.author
        } else if key.eq_ignore_ascii_case("published_date") {
            &mut self.published_date
        } else if key.eq_ignore_ascii_case("coverImageUrl") {
            &mut self.cover_image_url
        } else {
            return None;
        };
        Some(field)
    }
}

/// Members of a JSON object in document order, duplicate keys included.
struct Entries(Vec<(String, serde_json::Value)>);

impl<'de> Deserialize<'de> for Entries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = Entries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Entries, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, serde_json::Value>()? {
                    entries.push(entry);
                }
                Ok(Entries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fields_are_omitted() {
        let book = Book { title: "A".into(), author: "B".into(), ..Book::default() };
        let json = serde_json::to_string(&book).unwrap();
        assert_eq!(json, r#"{"title":"A","author":"B","coverImageUrl":""}"#);
    }

    #[test]
    fn full_book_uses_wire_names() {
        let book = Book {
            id: "7".into(),
            title: "T".into(),
            author: "A".into(),
            published_date: "2015-10-26".into(),
            cover_image_url: "http://x/y.jpg".into(),
        };
        let value = serde_json::to_value(&book).unwrap();
        assert_eq!(value["published_date"], "2015-10-26");
        assert_eq!(value["coverImageUrl"], "http://x/y.jpg");
        assert_eq!(value["id"], "7");
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let book = Book::from_json_lenient(br#"{"title":"Dune"}"#);
        assert_eq!(book.title, "Dune");
        assert_eq!(book.author, "");
        assert_eq!(book.cover_image_url, "");
    }

    #[test]
    fn null_fields_default_to_empty() {
        let book = Book::from_json_lenient(br#"{"title":null,"author":"Herbert"}"#);
        assert_eq!(book.title, "");
        assert_eq!(book.author, "Herbert");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let book = Book::from_json_lenient(br#"{"title":"Dune","description":"sand"}"#);
        assert_eq!(book.title, "Dune");
    }

    #[test]
    fn malformed_json_yields_zero_value() {
        assert_eq!(Book::from_json_lenient(b"{not json"), Book::default());
        assert_eq!(Book::from_json_lenient(br#"{"title":"A","author":"#), Book::default());
        assert_eq!(Book::from_json_lenient(b""), Book::default());
    }

    #[test]
    fn non_object_values_yield_zero_value() {
        assert_eq!(Book::from_json_lenient(br#"[1,2,3]"#), Book::default());
        assert_eq!(Book::from_json_lenient(br#""title""#), Book::default());
        assert_eq!(Book::from_json_lenient(b"null"), Book::default());
    }

    #[test]
    fn duplicate_keys_keep_the_last_value() {
        let book = Book::from_json_lenient(br#"{"title":"a","title":"b","author":"X"}"#);
        assert_eq!(book.title, "b");
        assert_eq!(book.author, "X");
    }

    #[test]
    fn wrong_typed_fields_are_skipped() {
        let book = Book::from_json_lenient(br#"{"title":42,"author":"B","id":["x"]}"#);
        assert_eq!(book.title, "");
        assert_eq!(book.author, "B");
        assert_eq!(book.id, "");
    }

    #[test]
    fn null_does_not_clear_an_earlier_value() {
        let book = Book::from_json_lenient(br#"{"title":"A","title":null}"#);
        assert_eq!(book.title, "A");
    }

    #[test]
    fn keys_match_case_insensitively() {
        let book = Book::from_json_lenient(br#"{"Title":"A","AUTHOR":"B","coverimageurl":"C"}"#);
        assert_eq!(book.title, "A");
        assert_eq!(book.author, "B");
        assert_eq!(book.cover_image_url, "C");
    }

    #[test]
    fn differently_cased_duplicates_keep_the_last() {
        let book = Book::from_json_lenient(br#"{"title":"lower","TITLE":"upper"}"#);
        assert_eq!(book.title, "upper");
    }

    #[test]
    fn trailing_data_after_first_value_is_ignored() {
        let book = Book::from_json_lenient(br#"{"title":"Dune"} trailing"#);
        assert_eq!(book.title, "Dune");
    }
}

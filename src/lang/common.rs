//! Common source-unit abstractions shared by the loader, the Go adapter and
//! the tag checker.

use std::ops::Range;
use std::path::PathBuf;

/// Source location information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// File identity as printed in diagnostics
    pub file_path: String,

    /// Line (1-based)
    pub line: usize,

    /// Column (1-based, in bytes)
    pub column: usize,

    /// Byte range of the token within the file
    pub byte_range: Range<usize>,
}

/// Shape of a method receiver as written in the source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Receiver {
    /// Free function
    None,
    /// `func (t T) ...`
    Value(String),
    /// `func (t *T) ...`
    Pointer(String),
    /// Anything the naming convention does not cover
    Unsupported(String),
}

impl Receiver {
    /// Whether this declaration is a method of any shape
    pub fn is_method(&self) -> bool {
        !matches!(self, Receiver::None)
    }
}

/// Structural identity of a function or method declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationIdentity {
    /// Name from the file's package clause
    pub package: String,
    /// File identity of the owning unit
    pub file_path: String,
    /// Declared function or method name
    pub name: String,
    /// Receiver descriptor
    pub receiver: Receiver,
    /// 1-based line of the declaration keyword
    pub line: usize,
}

/// A tag literal found in a declaration body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRecord {
    /// Literal value with delimiters stripped
    pub value: String,
    /// Location of the literal token
    pub location: SourceLocation,
}

/// A top-level function or method declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Structural identity
    pub identity: DeclarationIdentity,
    /// Declared tag, if the body has one
    pub tag: Option<TagRecord>,
}

/// One parsed source file
#[derive(Debug, Clone)]
pub struct SourceUnit {
    /// Path used to read and rewrite the file
    pub path: PathBuf,
    /// Cleaned path printed in diagnostics
    pub display_path: String,
    /// Package name from the package clause
    pub package: String,
    /// Full source text
    pub source: String,
    /// Function and method declarations in source order
    pub declarations: Vec<Declaration>,
}

impl SourceUnit {
    /// Declarations that carry a tag
    pub fn tagged(&self) -> impl Iterator<Item = (&DeclarationIdentity, &TagRecord)> {
        self.declarations
            .iter()
            .filter_map(|decl| decl.tag.as_ref().map(|tag| (&decl.identity, tag)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(line: usize) -> SourceLocation {
        SourceLocation {
            file_path: "./a.go".to_string(),
            line,
            column: 8,
            byte_range: 0..3,
        }
    }

    fn declaration(name: &str, tag: Option<&str>) -> Declaration {
        Declaration {
            identity: DeclarationIdentity {
                package: "a".to_string(),
                file_path: "./a.go".to_string(),
                name: name.to_string(),
                receiver: Receiver::None,
                line: 1,
            },
            tag: tag.map(|value| TagRecord {
                value: value.to_string(),
                location: location(2),
            }),
        }
    }

    #[test]
    fn test_receiver_is_method() {
        assert!(!Receiver::None.is_method());
        assert!(Receiver::Value("T".into()).is_method());
        assert!(Receiver::Pointer("T".into()).is_method());
        assert!(Receiver::Unsupported("generic_type".into()).is_method());
    }

    #[test]
    fn test_tagged_skips_untagged_declarations() {
        let unit = SourceUnit {
            path: PathBuf::from("a.go"),
            display_path: "./a.go".to_string(),
            package: "a".to_string(),
            source: String::new(),
            declarations: vec![
                declaration("First", Some("a.a.First")),
                declaration("Second", None),
                declaration("Third", Some("wrong")),
            ],
        };

        let names: Vec<_> = unit.tagged().map(|(id, _)| id.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Third"]);
    }
}

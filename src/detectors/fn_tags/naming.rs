//! Fn tag naming schemes.
//!
//! The convention has changed over time. Each version is a pure function
//! from a declaration's identity to a tag; the newest version gives the
//! canonical tag and every older version's output stays acceptable so that
//! existing tags are not churned.

use std::path::Path;

use crate::core::errors::{FnTagError, Result};
use crate::lang::common::{DeclarationIdentity, Receiver};

/// Receiver of a method the naming schemes can describe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodReceiver<'a> {
    /// `func (t T)`
    Value(&'a str),
    /// `func (t *T)`
    Pointer(&'a str),
}

/// The parts of a declaration a naming scheme is allowed to look at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagSubject<'a> {
    /// Package name
    pub package: &'a str,
    /// Source file name without its extension
    pub file_stem: &'a str,
    /// Function or method name
    pub name: &'a str,
    /// Receiver, for methods
    pub receiver: Option<MethodReceiver<'a>>,
}

impl<'a> TagSubject<'a> {
    /// Build a subject from a declaration, rejecting receivers the schemes cannot describe.
    pub fn from_identity(identity: &'a DeclarationIdentity) -> Result<Self> {
        let receiver = match &identity.receiver {
            Receiver::None => None,
            Receiver::Value(ty) => Some(MethodReceiver::Value(ty)),
            Receiver::Pointer(ty) => Some(MethodReceiver::Pointer(ty)),
            Receiver::Unsupported(shape) => {
                return Err(FnTagError::unsupported_receiver(
                    identity.name.as_str(),
                    identity.file_path.as_str(),
                    identity.line,
                    shape.as_str(),
                ))
            }
        };

        Ok(Self {
            package: &identity.package,
            file_stem: file_stem(&identity.file_path),
            name: &identity.name,
            receiver,
        })
    }
}

/// One version of the naming convention
#[derive(Clone, Copy)]
pub struct NamingScheme {
    /// Short version label used in logs
    pub version: &'static str,
    /// Derivation function
    pub derive: fn(&TagSubject<'_>) -> String,
}

/// Every scheme, oldest first. The last entry is canonical.
pub const NAMING_SCHEMES: &[NamingScheme] = &[
    NamingScheme {
        version: "v1",
        derive: receiver_agnostic,
    },
    NamingScheme {
        version: "v2",
        derive: receiver_aware,
    },
];

/// `{package}.{file}.{name}`
fn receiver_agnostic(subject: &TagSubject<'_>) -> String {
    format!("{}.{}.{}", subject.package, subject.file_stem, subject.name)
}

/// `{package}.{file}.{name}` for functions, `{package}.{file}.[*]{Type}-{name}` for methods
fn receiver_aware(subject: &TagSubject<'_>) -> String {
    match subject.receiver {
        None => receiver_agnostic(subject),
        Some(MethodReceiver::Value(ty)) => {
            format!("{}.{}.{}-{}", subject.package, subject.file_stem, ty, subject.name)
        }
        Some(MethodReceiver::Pointer(ty)) => {
            format!("{}.{}.*{}-{}", subject.package, subject.file_stem, ty, subject.name)
        }
    }
}

/// Canonical tag plus the older forms still accepted for a declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalTag {
    /// Version label of the scheme that produced `primary`
    pub scheme: &'static str,
    /// Output of the newest scheme
    pub primary: String,
    /// Distinct outputs of older schemes that differ from `primary`
    pub legacy: Vec<String>,
}

impl CanonicalTag {
    /// Derive the canonical tag for a declaration using [`NAMING_SCHEMES`]
    pub fn derive(identity: &DeclarationIdentity) -> Result<Self> {
        Self::derive_with(identity, NAMING_SCHEMES)
    }

    /// Derive the canonical tag using an explicit scheme list (oldest first)
    pub fn derive_with(identity: &DeclarationIdentity, schemes: &[NamingScheme]) -> Result<Self> {
        let subject = TagSubject::from_identity(identity)?;

        let Some((newest, older)) = schemes.split_last() else {
            return Err(FnTagError::internal("no naming schemes configured"));
        };

        let primary = (newest.derive)(&subject);
        let mut legacy: Vec<String> = Vec::new();
        for scheme in older.iter().rev() {
            let tag = (scheme.derive)(&subject);
            if tag != primary && !legacy.contains(&tag) {
                legacy.push(tag);
            }
        }

        Ok(Self {
            scheme: newest.version,
            primary,
            legacy,
        })
    }

    /// Whether `tag` is the primary form
    pub fn is_primary(&self, tag: &str) -> bool {
        self.primary == tag
    }

    /// Whether `tag` is the primary form or any legacy form
    pub fn accepts(&self, tag: &str) -> bool {
        self.is_primary(tag) || self.legacy.iter().any(|legacy| legacy == tag)
    }
}

/// Base name of a file with its final extension removed.
pub fn file_stem(file_path: &str) -> &str {
    let base = Path::new(file_path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(file_path);
    match base.rfind('.') {
        Some(dot) => &base[..dot],
        None => base,
    }
}

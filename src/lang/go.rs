//! Go language adapter with tree-sitter integration.
//!
//! Turns Go source text into a [`SourceUnit`]: the package name, every
//! top-level function and method declaration, the receiver shape of each
//! method, and the fn tag literal declared at the top of each body.

use std::path::PathBuf;

use tree_sitter::{Language, Node, Parser, Tree};

use super::common::{
    Declaration, DeclarationIdentity, Receiver, SourceLocation, SourceUnit, TagRecord,
};
use crate::core::errors::{FnTagError, Result};

const LANGUAGE_NAME: &str = "go";

/// Go-specific parsing
pub struct GoAdapter {
    /// Tree-sitter parser for Go
    parser: Parser,

    /// Name of the local variable holding the tag
    tag_variable: String,
}

impl GoAdapter {
    /// Create a new Go adapter looking for tags assigned to `fn`
    pub fn new() -> Result<Self> {
        Self::with_tag_variable("fn")
    }

    /// Create a new Go adapter looking for tags assigned to `tag_variable`
    pub fn with_tag_variable(tag_variable: impl Into<String>) -> Result<Self> {
        let language: Language = tree_sitter_go::LANGUAGE.into();
        let mut parser = Parser::new();
        parser.set_language(&language).map_err(|e| {
            FnTagError::parse(LANGUAGE_NAME, format!("Failed to set parser language: {e}"))
        })?;

        Ok(Self {
            parser,
            tag_variable: tag_variable.into(),
        })
    }

    /// Parse source text, rejecting anything tree-sitter could only recover from.
    pub fn parse_tree(&mut self, source_code: &str, file_path: &str) -> Result<Tree> {
        let tree = self.parser.parse(source_code, None).ok_or_else(|| {
            FnTagError::parse(LANGUAGE_NAME, "Failed to parse Go source code")
                .with_context(file_path)
        })?;

        if let Some(bad) = first_syntax_error(tree.root_node()) {
            let position = bad.start_position();
            let message = if bad.is_missing() {
                format!("missing {}", bad.kind())
            } else {
                "syntax error".to_string()
            };
            return Err(FnTagError::parse_with_location(
                LANGUAGE_NAME,
                message,
                file_path,
                Some(position.row + 1),
                Some(position.column + 1),
            ));
        }

        Ok(tree)
    }

    /// Parse one Go file into a source unit
    pub fn parse_unit(
        &mut self,
        source: String,
        path: PathBuf,
        display_path: String,
    ) -> Result<SourceUnit> {
        let tree = self.parse_tree(&source, &display_path)?;
        let root = tree.root_node();

        let package = Self::package_name(&root, &source)?.ok_or_else(|| {
            FnTagError::parse_with_location(
                LANGUAGE_NAME,
                "missing package clause",
                display_path.as_str(),
                None,
                None,
            )
        })?;

        let mut declarations = Vec::new();
        let mut cursor = root.walk();
        for child in root.named_children(&mut cursor) {
            if !matches!(child.kind(), "function_declaration" | "method_declaration") {
                continue;
            }
            declarations.push(self.declaration(&child, &source, &package, &display_path)?);
        }

        tracing::debug!(
            file = %display_path,
            package = %package,
            declarations = declarations.len(),
            "parsed source unit"
        );

        Ok(SourceUnit {
            path,
            display_path,
            package,
            source,
            declarations,
        })
    }

    fn package_name(root: &Node, source_code: &str) -> Result<Option<String>> {
        let Some(clause) = find_child_by_kind(root, "package_clause") else {
            return Ok(None);
        };
        let Some(name) = find_child_by_kind(&clause, "package_identifier")
            .or_else(|| clause.named_child(0))
        else {
            return Ok(None);
        };
        Ok(Some(name.utf8_text(source_code.as_bytes())?.to_string()))
    }

    fn declaration(
        &self,
        node: &Node,
        source_code: &str,
        package: &str,
        file_path: &str,
    ) -> Result<Declaration> {
        let name = match node.child_by_field_name("name") {
            Some(name) => name.utf8_text(source_code.as_bytes())?.to_string(),
            None => {
                return Err(FnTagError::parse_with_location(
                    LANGUAGE_NAME,
                    "function declaration without a name",
                    file_path,
                    Some(node.start_position().row + 1),
                    None,
                ))
            }
        };

        let receiver = match node.child_by_field_name("receiver") {
            Some(params) if node.kind() == "method_declaration" => {
                classify_receiver(&params, source_code)?
            }
            _ => Receiver::None,
        };

        let tag = match node.child_by_field_name("body") {
            Some(body) => self.extract_tag(&body, source_code, file_path)?,
            None => None,
        };

        Ok(Declaration {
            identity: DeclarationIdentity {
                package: package.to_string(),
                file_path: file_path.to_string(),
                name,
                receiver,
                line: node.start_position().row + 1,
            },
            tag,
        })
    }

    /// Find the first top-level `fn := "..."` (or `fn = "..."`) statement of a body.
    ///
    /// Nested blocks are not entered: a tag buried in a branch is not a tag.
    pub fn extract_tag(
        &self,
        body: &Node,
        source_code: &str,
        file_path: &str,
    ) -> Result<Option<TagRecord>> {
        for statement in top_level_statements(body) {
            if !matches!(
                statement.kind(),
                "short_var_declaration" | "assignment_statement"
            ) {
                continue;
            }

            let (Some(left), Some(right)) = (
                statement.child_by_field_name("left"),
                statement.child_by_field_name("right"),
            ) else {
                continue;
            };

            let (Some(target), Some(value)) = (single_operand(&left), single_operand(&right))
            else {
                continue;
            };

            if target.kind() != "identifier"
                || target.utf8_text(source_code.as_bytes())? != self.tag_variable
            {
                continue;
            }

            if !matches!(
                value.kind(),
                "interpreted_string_literal" | "raw_string_literal"
            ) {
                continue;
            }

            let text = value.utf8_text(source_code.as_bytes())?;
            let position = value.start_position();
            return Ok(Some(TagRecord {
                value: strip_delimiters(text).to_string(),
                location: SourceLocation {
                    file_path: file_path.to_string(),
                    line: position.row + 1,
                    column: position.column + 1,
                    byte_range: value.byte_range(),
                },
            }));
        }

        Ok(None)
    }
}

/// Classify a receiver parameter list into the shapes the convention knows.
fn classify_receiver(params: &Node, source_code: &str) -> Result<Receiver> {
    let mut cursor = params.walk();
    let fields: Vec<Node> = params
        .named_children(&mut cursor)
        .filter(|child| {
            matches!(
                child.kind(),
                "parameter_declaration" | "variadic_parameter_declaration"
            )
        })
        .collect();

    let receivers: usize = fields
        .iter()
        .map(|field| {
            let mut names = field.walk();
            field.children_by_field_name("name", &mut names).count().max(1)
        })
        .sum();

    if receivers != 1 {
        return Ok(Receiver::Unsupported(format!(
            "method declared with {receivers} receivers"
        )));
    }

    let Some(ty) = fields[0].child_by_field_name("type") else {
        return Ok(Receiver::Unsupported("receiver without a type".to_string()));
    };

    Ok(match ty.kind() {
        "type_identifier" => Receiver::Value(ty.utf8_text(source_code.as_bytes())?.to_string()),
        "pointer_type" => match ty.named_child(0) {
            Some(inner) if inner.kind() == "type_identifier" => {
                Receiver::Pointer(inner.utf8_text(source_code.as_bytes())?.to_string())
            }
            Some(inner) => Receiver::Unsupported(format!(
                "pointer receiver of kind {} ({})",
                inner.kind(),
                ty.utf8_text(source_code.as_bytes())?
            )),
            None => Receiver::Unsupported("empty pointer receiver".to_string()),
        },
        other => Receiver::Unsupported(format!(
            "receiver type of kind {other} ({})",
            ty.utf8_text(source_code.as_bytes())?
        )),
    })
}

/// Statements directly inside a block, flattening the grammar's statement list node.
fn top_level_statements<'a>(body: &Node<'a>) -> Vec<Node<'a>> {
    let mut statements = Vec::new();
    let mut cursor = body.walk();
    for child in body.named_children(&mut cursor) {
        match child.kind() {
            "statement_list" => {
                let mut inner = child.walk();
                statements.extend(
                    child
                        .named_children(&mut inner)
                        .filter(|stmt| stmt.kind() != "comment"),
                );
            }
            "comment" => {}
            _ => statements.push(child),
        }
    }
    statements
}

/// The only expression of an expression list, if it has exactly one.
fn single_operand<'a>(list: &Node<'a>) -> Option<Node<'a>> {
    if list.kind() != "expression_list" {
        return Some(*list);
    }
    let mut cursor = list.walk();
    let mut operands = list
        .named_children(&mut cursor)
        .filter(|child| child.kind() != "comment");
    match (operands.next(), operands.next()) {
        (Some(only), None) => Some(only),
        _ => None,
    }
}

fn strip_delimiters(literal: &str) -> &str {
    if literal.len() >= 2 {
        &literal[1..literal.len() - 1]
    } else {
        literal
    }
}

/// Find immediate child by kind
fn find_child_by_kind<'a>(node: &Node<'a>, kind: &str) -> Option<Node<'a>> {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).find(|child| child.kind() == kind);
    found
}

/// Depth-first search for the first error or missing node.
fn first_syntax_error(node: Node) -> Option<Node> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(bad) = first_syntax_error(child) {
            return Some(bad);
        }
    }
    Some(node)
}

#[cfg(test)]
#[path = "go_tests.rs"]
mod tests;

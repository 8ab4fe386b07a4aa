//! Import extraction using tree-sitter for JavaScript/TypeScript.
//!
//! Parses source text with a real grammar rather than regex scanning, so
//! import-shaped text inside strings or comments never produces edges.

use std::path::Path;

use thiserror::Error;
use tree_sitter::{Language, Node, Parser, Tree, TreeCursor};

/// Errors that can occur during import extraction.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Failed to parse file: {path}")]
    Parse { path: String },

    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("Tree-sitter language initialization failed")]
    LanguageInit,
}

/// Result type for parser operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// The syntactic form an import specifier came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportKind {
    /// Static declaration: `import ... from 'module'`
    Static,
    /// Re-export with a source: `export ... from 'module'`
    Reexport,
    /// Dynamic call expression: `import('module')`
    Dynamic,
    /// CommonJS call: `require('module')`
    Require,
}

/// A single import found in a source file, before resolution.
///
/// Whether the specifier is relative or a package import is decided during
/// resolution, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawImport {
    /// The module specifier as written (e.g. "./utils", "react").
    pub specifier: String,
    /// Which syntactic form produced it.
    pub kind: ImportKind,
}

/// Source language, determined from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceLanguage {
    JavaScript,
    Jsx,
    TypeScript,
    Tsx,
}

impl SourceLanguage {
    /// Determine language from a file extension (without the dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "js" | "mjs" | "cjs" => Some(SourceLanguage::JavaScript),
            "jsx" => Some(SourceLanguage::Jsx),
            "ts" | "mts" | "cts" => Some(SourceLanguage::TypeScript),
            "tsx" => Some(SourceLanguage::Tsx),
            _ => None,
        }
    }

    /// Get the tree-sitter grammar for this language.
    pub fn tree_sitter_language(&self) -> Language {
        match self {
            SourceLanguage::JavaScript | SourceLanguage::Jsx => {
                tree_sitter_javascript::LANGUAGE.into()
            }
            SourceLanguage::TypeScript => {
                tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into()
            }
            SourceLanguage::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }
}

/// Extracts import specifiers from JavaScript/TypeScript source files.
///
/// Holds one configured parser per grammar; reusable across files.
pub struct ImportParser {
    js_parser: Parser,
    ts_parser: Parser,
    tsx_parser: Parser,
}

impl ImportParser {
    /// Create a new parser with all grammars configured.
    pub fn new() -> ParseResult<Self> {
        let mut js_parser = Parser::new();
        js_parser
            .set_language(&tree_sitter_javascript::LANGUAGE.into())
            .map_err(|_| ParseError::LanguageInit)?;

        let mut ts_parser = Parser::new();
        ts_parser
            .set_language(&tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into())
            .map_err(|_| ParseError::LanguageInit)?;

        let mut tsx_parser = Parser::new();
        tsx_parser
            .set_language(&tree_sitter_typescript::LANGUAGE_TSX.into())
            .map_err(|_| ParseError::LanguageInit)?;

        Ok(Self {
            js_parser,
            ts_parser,
            tsx_parser,
        })
    }

    /// Extract every import specifier from `source`, choosing the grammar
    /// from the file extension of `path`.
    pub fn extract(&mut self, path: &Path, source: &str) -> ParseResult<Vec<RawImport>> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let language = SourceLanguage::from_extension(ext)
            .ok_or_else(|| ParseError::UnsupportedFileType(ext.to_string()))?;
        self.extract_source(source, language, path)
    }

    /// Extract imports from source text with an explicit language.
    pub fn extract_source(
        &mut self,
        source: &str,
        language: SourceLanguage,
        path: &Path,
    ) -> ParseResult<Vec<RawImport>> {
        let parser = match language {
            SourceLanguage::JavaScript | SourceLanguage::Jsx => &mut self.js_parser,
            SourceLanguage::TypeScript => &mut self.ts_parser,
            SourceLanguage::Tsx => &mut self.tsx_parser,
        };

        let tree = parser.parse(source, None).ok_or_else(|| ParseError::Parse {
            path: path.display().to_string(),
        })?;

        Ok(collect_imports(&tree, source))
    }
}

/// Walk the parse tree and collect every import-like node.
fn collect_imports(tree: &Tree, source: &str) -> Vec<RawImport> {
    let mut imports = Vec::new();
    let mut cursor = tree.root_node().walk();
    visit_node(&mut cursor, source, &mut imports);
    imports
}

fn visit_node(cursor: &mut TreeCursor, source: &str, imports: &mut Vec<RawImport>) {
    let node = cursor.node();

    match node.kind() {
        "import_statement" => {
            if let Some(specifier) = import_source(&node, source) {
                imports.push(RawImport {
                    specifier,
                    kind: ImportKind::Static,
                });
            }
        }
        "export_statement" => {
            // Only `export ... from 'x'` has a source; plain exports don't.
            if let Some(specifier) = node
                .child_by_field_name("source")
                .and_then(|child| string_value(&child, source))
            {
                imports.push(RawImport {
                    specifier,
                    kind: ImportKind::Reexport,
                });
            }
        }
        "call_expression" => {
            if let Some(import) = call_import(&node, source) {
                imports.push(import);
            }
        }
        _ => {}
    }

    if cursor.goto_first_child() {
        loop {
            visit_node(cursor, source, imports);
            if !cursor.goto_next_sibling() {
                break;
            }
        }
        cursor.goto_parent();
    }
}

/// The string source of a static import statement.
fn import_source(node: &Node, source: &str) -> Option<String> {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.kind() == "string" {
            return string_value(&child, source);
        }
    }
    None
}

/// `require('x')` or dynamic `import('x')`.
fn call_import(node: &Node, source: &str) -> Option<RawImport> {
    let func_node = node.child_by_field_name("function")?;
    let kind = match node_text(&func_node, source)? {
        "require" => ImportKind::Require,
        "import" => ImportKind::Dynamic,
        _ => return None,
    };

    let args_node = node.child_by_field_name("arguments")?;
    let mut cursor = args_node.walk();
    for child in args_node.children(&mut cursor) {
        // Only string literals; template or computed specifiers are ignored.
        if child.kind() == "string" {
            let specifier = string_value(&child, source)?;
            return Some(RawImport { specifier, kind });
        }
    }

    None
}

fn node_text<'a>(node: &Node, source: &'a str) -> Option<&'a str> {
    source.get(node.start_byte()..node.end_byte())
}

/// Extract string value (removes quotes).
fn string_value(node: &Node, source: &str) -> Option<String> {
    let text = node_text(node, source)?;
    let trimmed = text
        .trim_start_matches(['"', '\'', '`'])
        .trim_end_matches(['"', '\'', '`']);
    Some(trimmed.to_string())
}

//! Parser module for cyclescope.
//!
//! Import extraction is grammar-based (tree-sitter) so string literals and
//! comments never produce false imports, and resolution maps relative
//! specifiers to files on disk.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use cyclescope::parser::{ImportParser, resolve};
//!
//! let mut parser = ImportParser::new().unwrap();
//! let imports = parser.extract(Path::new("a.ts"), "import { b } from './b';").unwrap();
//!
//! for import in &imports {
//!     if let Some(target) = resolve(&import.specifier, Path::new("/project/a.ts")) {
//!         println!("depends on {}", target.display());
//!     }
//! }
//! ```

pub mod imports;
pub mod resolve;

pub use imports::{ImportKind, ImportParser, ParseError, ParseResult, RawImport, SourceLanguage};
pub use resolve::{normalize, resolve};

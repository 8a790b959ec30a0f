//! Cross-platform font discovery, matching, and text-to-font resolution.
//!
//! Given a system's installed fonts plus caller-supplied in-memory fonts,
//! this crate answers two questions: which font best matches a declarative
//! [`Pattern`], and which font(s) should render a given piece of text,
//! producing a sequence of [`ResolvedFontRun`]s that follow a CSS-style
//! font-family fallback stack with per-codepoint coverage fallback.
//!
//! The moving pieces:
//! - [`Cache`] scans font directories (or accepts in-memory fonts),
//!   parses every face in parallel, and owns the resulting font table.
//! - [`matcher::match_pattern`] scores and filters the cache against a
//!   [`Pattern`], returning a primary match, ranked fallbacks, and a trace.
//! - [`ChainResolver`] expands a CSS font-family stack (through
//!   [`css::generic_expansion`]) into a memoized [`FontChain`].
//! - [`segment::query_for_text`] walks a chain over a string, emitting
//!   [`ResolvedFontRun`]s.

mod cache;
mod chain;
mod config;
mod css;
mod error;
mod id;
mod matcher;
mod metadata;
mod parser;
mod pattern;
mod range;
mod record;
mod segment;
mod source;
mod style;
mod trace;

pub use cache::Cache;
pub use chain::{ChainResolver, CssFallbackGroup, FontChain};
pub use config::BuildConfig;
pub use css::generic_expansion;
pub use error::ParseError;
pub use id::FontId;
pub use matcher::{match_pattern, FontMatch, FontMatchNoFallback};
pub use metadata::FontMetadata;
pub use pattern::Pattern;
pub use range::{Coverage, UnicodeRange};
pub use record::{FontRecord, FontSource};
pub use segment::{query_for_text, ResolvedFontRun};
pub use source::{default_font_dirs, Candidate};
pub use style::{Stretch, StyleFlags, TriState, Weight};
pub use trace::{Trace, TraceLevel, TraceMsg, TraceReason};

//! Connection-string URL splitting and printable quoting.
//!
//! This crate provides the two text-processing primitives that wire-level
//! diagnostics need:
//!
//! * a destructive, zero-allocation splitter that tokenizes a caller-owned
//!   buffer holding a connection-string-shaped URL into its
//!   scheme/user/password/host/port/path components
//!   ([`components::UrlComponents::split`]), and
//! * a printable-quoting encoder that renders arbitrary bytes as
//!   truncation-safe ASCII for logs ([`quote`]).
//!
//! # URL grammar
//!
//! The splitter accepts the restricted grammar
//!
//! ```text
//! [ scheme "://" ] [ user [ ":" password ] "@" ] host [ ":" port ] [ "/" path ]
//! ```
//!
//! where `scheme`, `user`, `password` and `port` cannot contain `@`, `:` or
//! `/`; `host` cannot either, unless written as a bracketed IPv6 literal
//! `[...]` in which case it may contain `:`; `path` is unconstrained.
//! `user` and `password` are percent-decoded in place after splitting;
//! no other component is.
//!
//! This is deliberately **not** RFC 3986. There is no query, no fragment,
//! no validation and no normalization; the grammar is exactly what
//! connection strings use, and unparseable inputs degrade into host/path
//! splits instead of errors.
//!
//! # Quoting format
//!
//! Printable bytes (`0x20..=0x7e`) render verbatim; every other byte
//! renders as `\xhh` with exactly two lowercase hex digits. The encoding is
//! one-way: it exists so binary payloads can be pasted into a log line, not
//! so they can be parsed back.
//!
//! # `std` and `alloc` support
//!
//! This crate supports `no_std` usage.
//!
//! * `alloc` feature:
//!     + Std library or `alloc` crate is required.
//!     + Enables the growable quoting destination, [`buffer::QuoteBuf`] and
//!       [`quote::quote`].
//! * `std` feature (**enabled by default**):
//!     + Std library is required, and automatically enables `alloc`.
//!     + Enables `std::error::Error` impls, [`quote::write_quoted`] and
//!       [`env::env_bool`].
//! * Without either, the splitter, the in-place percent-decoder and the
//!   fixed-buffer quoting pass remain available.
//!
//! # Rationale
//!
//! ## A leading `/` never starts a scheme
//!
//! The first `/` of the input is the pivot of the whole split. A scheme
//! exists only when the character directly before that slash is `:` and the
//! character directly after it is another `/` — i.e. when `://` sits exactly
//! at the first slash. Anything else, including a `://` appearing *later*
//! in the string (`a/b://c`), is not a scheme delimiter; the slash then acts
//! purely as the path separator. An input starting with `/` therefore has
//! an empty host and everything after the slash as its path.
//!
//! ## `host` is always present
//!
//! Every input has a host, though it may be the empty string: `""`,
//! `"/path"` and `"user@"` all yield `host == ""`. The other five
//! components are absent (`None`) when their delimiters are absent.
//!
//! ## Malformed percent-escapes decode silently
//!
//! A `%` followed by any two bytes consumes all three and emits the value
//! those bytes parse to as hex — including when they are not hex at all
//! (`%zz` decodes to the zero byte, `%4g` to `0x04`). Downstream credential
//! handling has historically depended on this silent acceptance, so it is
//! preserved as a documented policy rather than "fixed"; see
//! [`percent::decode_in_place`].
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
pub mod buffer;
pub mod components;
#[cfg(feature = "std")]
pub mod env;
pub(crate) mod parser;
pub mod percent;
pub mod quote;

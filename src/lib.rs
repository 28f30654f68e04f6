//! # qrgrid
//!
//! A pure Rust encoder for QR Code Model 2 symbols.
//!
//! `qrgrid` turns a payload and an error correction preference into the
//! finished module grid: version selection, byte-mode bit stream assembly,
//! Reed-Solomon error correction over GF(256), block interleaving, function
//! patterns, zig-zag data placement, penalty-scored masking and the
//! BCH-protected format and version information. The result is a plain data
//! structure, a square grid of booleans plus its version, ready for any
//! renderer to turn into pixels, vectors or terminal characters.
//!
//! ## Features
//!
//! - **Versions 1 to 40** with automatic selection of the smallest symbol
//!   that fits the payload.
//! - **Four error correction levels** (Low, Medium, Quartile, High).
//! - **Byte mode**: any `&str` or `&[u8]` payload; text is encoded as its
//!   UTF-8 bytes.
//! - **Deterministic output**: the same payload and level always produce
//!   the same grid.
//! - **No dependencies, no unsafe code, no I/O**: the encoder is a pure
//!   function from payload to grid and is freely shareable across threads.
//!
//! ## Usage
//!
//! ```rust
//! use qrgrid::{EcLevel, QrCode};
//!
//! let qr = QrCode::encode_text("Hello, World!", EcLevel::Medium).unwrap();
//! for y in 0..qr.size() as i32 {
//!     for x in 0..qr.size() as i32 {
//!         print!("{}", if qr.get_module(x, y) { "##" } else { "  " });
//!     }
//!     println!();
//! }
//! ```
//!
//! Renderers must add the light quiet zone (4 modules on every side)
//! themselves; [`QrCode::get_module`] returns light for all out-of-bounds
//! coordinates to make that painless.
//!
//! ## Error Handling
//!
//! Encoding fails only for an empty payload or one that exceeds the
//! capacity of version 40 at the requested level; both cases are reported
//! through [`EncodeError`]. Everything else is a total function of its
//! inputs.
//!
//! ## Limitations
//!
//! Numeric, alphanumeric and Kanji compaction, ECI, structured append and
//! Micro QR are out of scope, as is decoding. Digit-heavy payloads
//! therefore produce somewhat larger symbols than a multi-mode encoder
//! would.

#![forbid(unsafe_code)]

mod bits;
mod encode;
mod format;
mod gf;
mod mask;
mod matrix;
pub mod qrcode;
mod reed_solomon;
mod tables;

pub use crate::qrcode::{EcLevel, EncodeError, Mask, QrCode, Version};

//! Runtime bindings for the native SDL2_image library, plus the SDL scancode
//! set from the USB HID keyboard usage page.
//!
//! The native libraries are opened at runtime ([`ImageLib::load`]); every
//! entry point is resolved up front, so a missing symbol fails at load time
//! rather than mid-call.

// ── Safety policy ─────────────────────────────────────────────────────────────
// Unsafe code is forbidden everywhere except:
//   • `image::entry` – native entry-point signatures and handle types
//   • `image`        – calls through the resolved entry points
// Each unsafe block in those modules MUST carry a `// SAFETY:` comment.
#![deny(unsafe_code)]

pub mod error;
pub mod image;
pub mod scancode;

pub use error::{Error, Result};
pub use image::{ImageLib, InitFlags, Surface, Texture, Version};
pub use scancode::{Scancode, NUM_SCANCODES};

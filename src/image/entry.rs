// ── Native entry-point surface ────────────────────────────────────────────────
//
// Source of truth: SDL_image.h (https://wiki.libsdl.org/SDL2_image) plus the
// handful of SDL2 core calls needed to fetch error text and release handles.
// Only the entry points the wrapper actually dispatches are listed here.
// All symbols are resolved once, at `ImageLib::load` time.

#![allow(unsafe_code)]

use libc::{c_char, c_int};

// ── Opaque native handles ─────────────────────────────────────────────────────
//
// Owned and managed entirely by the native libraries.  This crate holds and
// forwards pointers to them but never reads through one.

/// CPU-accessible pixel buffer (`SDL_Surface`).
#[repr(C)]
pub struct SdlSurface {
    _opaque: [u8; 0],
}

/// GPU-resident image (`SDL_Texture`).
#[repr(C)]
pub struct SdlTexture {
    _opaque: [u8; 0],
}

/// 2D rendering context (`SDL_Renderer`).
#[repr(C)]
pub struct SdlRenderer {
    _opaque: [u8; 0],
}

/// Seekable data source (`SDL_RWops`).
#[repr(C)]
pub struct SdlRwOps {
    _opaque: [u8; 0],
}

// ── Version ───────────────────────────────────────────────────────────────────

/// A native library version, laid out exactly like `SDL_version`.
///
/// Derived ordering is field order (major, minor, patch), so plain
/// comparisons work for at-least checks.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u8,
    pub minor: u8,
    pub patch: u8,
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

// ── Entry-point signatures ────────────────────────────────────────────────────

/// `IMG_Linked_Version` — pointer into static storage, never freed.
pub(super) type LinkedVersionFn = unsafe extern "C" fn() -> *const Version;
/// `IMG_Init` — returns the cumulative set of initialized codec flags.
pub(super) type InitFn = unsafe extern "C" fn(c_int) -> c_int;
/// `IMG_Quit` — unloads every codec; calls do not need to pair with init.
pub(super) type QuitFn = unsafe extern "C" fn();
/// `IMG_Load` — decode a file path into a new surface, or null.
pub(super) type LoadFileFn = unsafe extern "C" fn(*const c_char) -> *mut SdlSurface;
/// `IMG_Load_RW` — decode a data source; nonzero second arg closes it.
pub(super) type LoadRwFn = unsafe extern "C" fn(*mut SdlRwOps, c_int) -> *mut SdlSurface;
/// `IMG_LoadTyped_RW` — like `IMG_Load_RW` with a format-hint string (or null).
pub(super) type LoadTypedRwFn =
    unsafe extern "C" fn(*mut SdlRwOps, c_int, *const c_char) -> *mut SdlSurface;
/// `IMG_LoadTexture` — decode a file path straight into a GPU texture.
pub(super) type LoadTextureFileFn =
    unsafe extern "C" fn(*mut SdlRenderer, *const c_char) -> *mut SdlTexture;
/// `IMG_LoadTexture_RW` — decode a data source into a GPU texture.
pub(super) type LoadTextureRwFn =
    unsafe extern "C" fn(*mut SdlRenderer, *mut SdlRwOps, c_int) -> *mut SdlTexture;
/// `IMG_LoadTextureTyped_RW` — data source to texture with a format hint.
pub(super) type LoadTextureTypedRwFn =
    unsafe extern "C" fn(*mut SdlRenderer, *mut SdlRwOps, c_int, *const c_char) -> *mut SdlTexture;
/// `IMG_ReadXPMFromArray` / `IMG_ReadXPMFromArrayToRGB888` — declared
/// `char **` in the header; the rows are read, never written.
pub(super) type ReadXpmFn = unsafe extern "C" fn(*mut *mut c_char) -> *mut SdlSurface;
/// `IMG_SavePNG` — 0 on success, negative on error.
pub(super) type SavePngFn = unsafe extern "C" fn(*mut SdlSurface, *const c_char) -> c_int;
/// `IMG_SavePNG_RW` — nonzero third arg closes the destination.
pub(super) type SavePngRwFn = unsafe extern "C" fn(*mut SdlSurface, *mut SdlRwOps, c_int) -> c_int;
/// `IMG_SaveJPG` — last arg is quality, 0–100.
pub(super) type SaveJpgFn = unsafe extern "C" fn(*mut SdlSurface, *const c_char, c_int) -> c_int;
/// `IMG_SaveJPG_RW`.
pub(super) type SaveJpgRwFn =
    unsafe extern "C" fn(*mut SdlSurface, *mut SdlRwOps, c_int, c_int) -> c_int;

// SDL2 core — error text and handle release.
/// `SDL_GetError` — pointer to thread-local static storage.
pub(super) type GetErrorFn = unsafe extern "C" fn() -> *const c_char;
/// `SDL_ClearError`.
pub(super) type ClearErrorFn = unsafe extern "C" fn();
/// `SDL_FreeSurface`.
pub(super) type FreeSurfaceFn = unsafe extern "C" fn(*mut SdlSurface);
/// `SDL_DestroyTexture`.
pub(super) type DestroyTextureFn = unsafe extern "C" fn(*mut SdlTexture);

// ── Symbol names ──────────────────────────────────────────────────────────────
//
// NUL-terminated, as the resolver requires.

pub(super) const IMG_LINKED_VERSION: &[u8] = b"IMG_Linked_Version\0";
pub(super) const IMG_INIT: &[u8] = b"IMG_Init\0";
pub(super) const IMG_QUIT: &[u8] = b"IMG_Quit\0";
pub(super) const IMG_LOAD: &[u8] = b"IMG_Load\0";
pub(super) const IMG_LOAD_RW: &[u8] = b"IMG_Load_RW\0";
pub(super) const IMG_LOAD_TYPED_RW: &[u8] = b"IMG_LoadTyped_RW\0";
pub(super) const IMG_LOAD_TEXTURE: &[u8] = b"IMG_LoadTexture\0";
pub(super) const IMG_LOAD_TEXTURE_RW: &[u8] = b"IMG_LoadTexture_RW\0";
pub(super) const IMG_LOAD_TEXTURE_TYPED_RW: &[u8] = b"IMG_LoadTextureTyped_RW\0";
pub(super) const IMG_READ_XPM_FROM_ARRAY: &[u8] = b"IMG_ReadXPMFromArray\0";
pub(super) const IMG_READ_XPM_FROM_ARRAY_TO_RGB888: &[u8] = b"IMG_ReadXPMFromArrayToRGB888\0";
pub(super) const IMG_SAVE_PNG: &[u8] = b"IMG_SavePNG\0";
pub(super) const IMG_SAVE_PNG_RW: &[u8] = b"IMG_SavePNG_RW\0";
pub(super) const IMG_SAVE_JPG: &[u8] = b"IMG_SaveJPG\0";
pub(super) const IMG_SAVE_JPG_RW: &[u8] = b"IMG_SaveJPG_RW\0";

pub(super) const SDL_GET_ERROR: &[u8] = b"SDL_GetError\0";
pub(super) const SDL_CLEAR_ERROR: &[u8] = b"SDL_ClearError\0";
pub(super) const SDL_FREE_SURFACE: &[u8] = b"SDL_FreeSurface\0";
pub(super) const SDL_DESTROY_TEXTURE: &[u8] = b"SDL_DestroyTexture\0";

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const ALL_SYMBOLS: &[&[u8]] = &[
        IMG_LINKED_VERSION,
        IMG_INIT,
        IMG_QUIT,
        IMG_LOAD,
        IMG_LOAD_RW,
        IMG_LOAD_TYPED_RW,
        IMG_LOAD_TEXTURE,
        IMG_LOAD_TEXTURE_RW,
        IMG_LOAD_TEXTURE_TYPED_RW,
        IMG_READ_XPM_FROM_ARRAY,
        IMG_READ_XPM_FROM_ARRAY_TO_RGB888,
        IMG_SAVE_PNG,
        IMG_SAVE_PNG_RW,
        IMG_SAVE_JPG,
        IMG_SAVE_JPG_RW,
        SDL_GET_ERROR,
        SDL_CLEAR_ERROR,
        SDL_FREE_SURFACE,
        SDL_DESTROY_TEXTURE,
    ];

    // Every symbol name must end with b'\0' so the resolver reads it safely,
    // and must contain no interior NUL.
    #[test]
    fn symbol_names_are_null_terminated() {
        for sym in ALL_SYMBOLS {
            assert_eq!(sym.last(), Some(&b'\0'), "{sym:?} is not NUL-terminated");
            assert!(
                !sym[..sym.len() - 1].contains(&b'\0'),
                "{sym:?} has an interior NUL"
            );
        }
    }

    #[test]
    fn symbol_names_are_unique() {
        let mut seen = HashSet::new();
        for sym in ALL_SYMBOLS {
            assert!(seen.insert(*sym), "duplicate symbol {sym:?}");
        }
    }

    #[test]
    fn version_display() {
        let v = Version { major: 2, minor: 0, patch: 28 };
        assert_eq!(v.to_string(), "2.0.28");
    }

    #[test]
    fn version_ordering_is_field_order() {
        let old = Version { major: 2, minor: 0, patch: 5 };
        let new = Version { major: 2, minor: 6, patch: 0 };
        assert!(old < new);
        assert!(new > Version { major: 2, minor: 0, patch: 28 });
        assert!(Version { major: 1, minor: 9, patch: 9 } < old);
    }
}

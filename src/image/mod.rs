// ── SDL2_image hosting ────────────────────────────────────────────────────────
//
// This is one of exactly two modules where `unsafe` is permitted.
// Every `unsafe` block MUST carry a `// SAFETY:` comment.
//
// ── Library ownership model ───────────────────────────────────────────────────
//
// `ImageLib` owns the single pair of runtime loads for the SDL2 core and
// SDL2_image shared libraries.  Every entry point is resolved eagerly at
// load time into a plain function-pointer table, so a missing symbol is a
// load-time error rather than a call-time panic.  `Surface` and `Texture`
// hold only a native handle plus a borrow of the `ImageLib` that produced
// them; the borrow keeps the entry points alive until the handle is released.
//
// Drop order inside `ImageLib` (Rust drops fields in declaration order):
//   1. Drop body — `IMG_Quit` unloads codecs while both libraries are loaded
//   2. `_image`  — SDL2_image unloads
//   3. `_core`   — the SDL2 core it depends on unloads last ✓
//
// ── Library lookup ────────────────────────────────────────────────────────────
//
// The `FERRULE_SDL2_LIBRARY` / `FERRULE_SDL2_IMAGE_LIBRARY` environment
// variables override the search; otherwise the platform's conventional
// shared-library names are tried in order via the system loader.

#![allow(unsafe_code)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod entry;

use std::env;
use std::ffi::{CStr, CString};
use std::path::Path;
use std::ptr::{self, NonNull};

use bitflags::bitflags;
use libc::{c_char, c_int};
use libloading::Library;

use crate::error::{Error, Result};
use entry::{
    ClearErrorFn, DestroyTextureFn, FreeSurfaceFn, GetErrorFn, InitFn, LinkedVersionFn,
    LoadFileFn, LoadRwFn, LoadTextureFileFn, LoadTextureRwFn, LoadTextureTypedRwFn,
    LoadTypedRwFn, QuitFn, ReadXpmFn, SaveJpgFn, SaveJpgRwFn, SavePngFn, SavePngRwFn,
};

pub use entry::{SdlRenderer, SdlRwOps, SdlSurface, SdlTexture, Version};

// ── Library identity ──────────────────────────────────────────────────────────

#[cfg(target_os = "windows")]
const CORE_LIB_NAMES: &[&str] = &["SDL2.dll"];
#[cfg(target_os = "windows")]
const IMAGE_LIB_NAMES: &[&str] = &["SDL2_image.dll"];

#[cfg(target_os = "macos")]
const CORE_LIB_NAMES: &[&str] = &["libSDL2-2.0.0.dylib", "libSDL2.dylib"];
#[cfg(target_os = "macos")]
const IMAGE_LIB_NAMES: &[&str] = &["libSDL2_image-2.0.0.dylib", "libSDL2_image.dylib"];

#[cfg(all(unix, not(target_os = "macos")))]
const CORE_LIB_NAMES: &[&str] = &["libSDL2-2.0.so.0", "libSDL2.so"];
#[cfg(all(unix, not(target_os = "macos")))]
const IMAGE_LIB_NAMES: &[&str] = &["libSDL2_image-2.0.so.0", "libSDL2_image.so"];

const CORE_LIB_ENV: &str = "FERRULE_SDL2_LIBRARY";
const IMAGE_LIB_ENV: &str = "FERRULE_SDL2_IMAGE_LIBRARY";

/// The SDL2_image release these bindings were written against.
///
/// Compare with [`ImageLib::linked_version`] to detect a mismatched
/// installation before relying on newer entry points.
pub const COMPILED_VERSION: Version = Version { major: 2, minor: 0, patch: 28 };

// ── InitFlags ─────────────────────────────────────────────────────────────────

bitflags! {
    /// Codec selection for [`ImageLib::init`], OR'd together.
    ///
    /// Formats not listed here (BMP, GIF, PNM, …) need no dynamic codec and
    /// are always available.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct InitFlags: c_int {
        const JPG  = 0x0000_0001;
        const PNG  = 0x0000_0002;
        const TIF  = 0x0000_0004;
        const WEBP = 0x0000_0008;
    }
}

// ── Entry-point table ─────────────────────────────────────────────────────────

/// Resolved native entry points.  Plain copied function pointers; validity
/// is tied to the `Library` fields of `ImageLib` outliving this table.
struct Api {
    linked_version: LinkedVersionFn,
    init: InitFn,
    quit: QuitFn,
    load: LoadFileFn,
    load_rw: LoadRwFn,
    load_typed_rw: LoadTypedRwFn,
    load_texture: LoadTextureFileFn,
    load_texture_rw: LoadTextureRwFn,
    load_texture_typed_rw: LoadTextureTypedRwFn,
    read_xpm: ReadXpmFn,
    read_xpm_rgb888: ReadXpmFn,
    save_png: SavePngFn,
    save_png_rw: SavePngRwFn,
    save_jpg: SaveJpgFn,
    save_jpg_rw: SaveJpgRwFn,
    get_error: GetErrorFn,
    clear_error: ClearErrorFn,
    free_surface: FreeSurfaceFn,
    destroy_texture: DestroyTextureFn,
}

impl Api {
    /// Resolve every entry point up front.  Any missing symbol fails the
    /// whole load with the symbol's name in the error.
    fn resolve(core: &Library, image: &Library) -> Result<Self> {
        Ok(Self {
            linked_version: resolve(image, entry::IMG_LINKED_VERSION)?,
            init: resolve(image, entry::IMG_INIT)?,
            quit: resolve(image, entry::IMG_QUIT)?,
            load: resolve(image, entry::IMG_LOAD)?,
            load_rw: resolve(image, entry::IMG_LOAD_RW)?,
            load_typed_rw: resolve(image, entry::IMG_LOAD_TYPED_RW)?,
            load_texture: resolve(image, entry::IMG_LOAD_TEXTURE)?,
            load_texture_rw: resolve(image, entry::IMG_LOAD_TEXTURE_RW)?,
            load_texture_typed_rw: resolve(image, entry::IMG_LOAD_TEXTURE_TYPED_RW)?,
            read_xpm: resolve(image, entry::IMG_READ_XPM_FROM_ARRAY)?,
            read_xpm_rgb888: resolve(image, entry::IMG_READ_XPM_FROM_ARRAY_TO_RGB888)?,
            save_png: resolve(image, entry::IMG_SAVE_PNG)?,
            save_png_rw: resolve(image, entry::IMG_SAVE_PNG_RW)?,
            save_jpg: resolve(image, entry::IMG_SAVE_JPG)?,
            save_jpg_rw: resolve(image, entry::IMG_SAVE_JPG_RW)?,
            get_error: resolve(core, entry::SDL_GET_ERROR)?,
            clear_error: resolve(core, entry::SDL_CLEAR_ERROR)?,
            free_surface: resolve(core, entry::SDL_FREE_SURFACE)?,
            destroy_texture: resolve(core, entry::SDL_DESTROY_TEXTURE)?,
        })
    }
}

/// Copy one typed entry point out of a loaded library.
fn resolve<T: Copy>(lib: &Library, name: &'static [u8]) -> Result<T> {
    // SAFETY: `name` is one of the NUL-terminated constants in `entry`, and
    // `T` is the matching signature alias defined next to it.  Resolution
    // itself calls nothing in the target library.
    let sym = unsafe { lib.get::<T>(name) }.map_err(|source| Error::Library {
        library: symbol_display(name),
        source,
    })?;
    Ok(*sym)
}

/// Render a NUL-terminated symbol-name constant for error messages.
fn symbol_display(name: &[u8]) -> String {
    String::from_utf8_lossy(&name[..name.len().saturating_sub(1)]).into_owned()
}

/// Open one shared library: explicit environment override first, then the
/// platform's conventional names in order.
fn open_library(env_key: &str, names: &[&str]) -> Result<Library> {
    if let Some(path) = env::var_os(env_key) {
        // SAFETY: loading a shared object runs its initializers; that is the
        // documented contract of pointing the override variable at an SDL
        // library.
        return unsafe { Library::new(&path) }.map_err(|source| Error::Library {
            library: Path::new(&path).display().to_string(),
            source,
        });
    }

    // SAFETY: as above, for the conventional platform names.
    let mut result = unsafe { Library::new(names[0]) };
    for name in &names[1..] {
        if result.is_ok() {
            break;
        }
        // SAFETY: as above.
        result = unsafe { Library::new(name) };
    }
    result.map_err(|source| Error::Library {
        library: names.join(", "),
        source,
    })
}

// ── Marshalling helpers ───────────────────────────────────────────────────────

/// Convert a filesystem path to the NUL-terminated UTF-8 the native side
/// expects.  Non-UTF-8 paths are converted lossily; an interior NUL is an
/// error.
fn path_to_cstring(path: &Path) -> Result<CString> {
    Ok(CString::new(path.to_string_lossy().into_owned().into_bytes())?)
}

/// Marshal an optional format-hint string ("PNG", "JPG", …).  `None` becomes
/// a null pointer at the call site.
fn format_hint(format: Option<&str>) -> Result<Option<CString>> {
    format.map(CString::new).transpose().map_err(Error::from)
}

/// Build the `char **` image of an XPM row array: the owned C strings plus a
/// pointer table with a terminating null entry.  The pointer table is only
/// valid while the returned storage is alive.
fn xpm_to_c_array(rows: &[&str]) -> Result<(Vec<CString>, Vec<*mut c_char>)> {
    if rows.is_empty() {
        return Err(Error::InvalidArgument {
            param: "xpm",
            reason: "row array is empty".to_owned(),
        });
    }
    let storage = rows
        .iter()
        .map(|row| CString::new(*row))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    let mut pointers: Vec<*mut c_char> = storage
        .iter()
        .map(|row| row.as_ptr() as *mut c_char)
        .collect();
    pointers.push(ptr::null_mut());
    Ok((storage, pointers))
}

/// JPEG quality must be 0–100.
fn check_quality(quality: i32) -> Result<()> {
    if (0..=100).contains(&quality) {
        Ok(())
    } else {
        Err(Error::InvalidArgument {
            param: "quality",
            reason: format!("must be between 0 and 100 (got {quality})"),
        })
    }
}

// ── ImageLib ──────────────────────────────────────────────────────────────────

/// RAII handle to the loaded SDL2 core and SDL2_image libraries.
///
/// Dropping it deinitializes every codec (`IMG_Quit`) and unloads both
/// libraries, after all borrowed [`Surface`]s and [`Texture`]s are gone.
pub struct ImageLib {
    api: Api,
    version: Version,
    _image: Library,
    _core: Library,
}

impl ImageLib {
    /// Open the native libraries and resolve the full entry-point set.
    ///
    /// This performs no codec initialization; call [`ImageLib::init`] for
    /// that.  Fails if either library cannot be found or an expected entry
    /// point is missing.
    pub fn load() -> Result<Self> {
        let core = open_library(CORE_LIB_ENV, CORE_LIB_NAMES)?;
        let image = open_library(IMAGE_LIB_ENV, IMAGE_LIB_NAMES)?;
        let api = Api::resolve(&core, &image)?;

        // SAFETY: IMG_Linked_Version returns a pointer into the library's
        // static storage; it is read once while the library is loaded.
        let version_ptr = unsafe { (api.linked_version)() };
        let version = match NonNull::new(version_ptr.cast_mut()) {
            // SAFETY: non-null, and the pointee layout is the SDL_version
            // triple that `Version` mirrors.
            Some(v) => unsafe { *v.as_ref() },
            None => {
                return Err(Error::Native {
                    function: "IMG_Linked_Version",
                    message: "returned a null version".to_owned(),
                })
            }
        };
        log::debug!("loaded SDL2_image {version} (bindings written against {COMPILED_VERSION})");

        Ok(Self { api, version, _image: image, _core: core })
    }

    // ── Codec lifecycle ───────────────────────────────────────────────────────

    /// Initialize codec support for the given formats.
    ///
    /// Returns the full set of initialized codecs, which includes any
    /// initialized by earlier calls.  A zero result for a nonempty request
    /// is an error; a partial result is returned as-is (with a logged
    /// warning), so callers that require a specific codec should check the
    /// returned set.
    pub fn init(&self, flags: InitFlags) -> Result<InitFlags> {
        self.clear_error();
        // SAFETY: entry point resolved at load time; any InitFlags bit
        // pattern is a valid IMG_INIT_* mask.
        let got = InitFlags::from_bits_truncate(unsafe { (self.api.init)(flags.bits()) });
        if got.is_empty() && !flags.is_empty() {
            return Err(self.native_error("IMG_Init"));
        }
        if !got.contains(flags) {
            log::warn!("requested codecs {flags:?} but only {got:?} are available");
        }
        Ok(got)
    }

    /// The set of codecs currently initialized, without changing state.
    pub fn initialized_codecs(&self) -> InitFlags {
        // SAFETY: IMG_Init with zero flags only queries.
        InitFlags::from_bits_truncate(unsafe { (self.api.init)(0) })
    }

    /// Deinitialize every codec.
    ///
    /// Calls do not stack against [`ImageLib::init`]; one call unloads
    /// everything, and repeating it is harmless.  Codecs can be
    /// reinitialized afterwards.  Dropping the `ImageLib` also quits.
    pub fn quit(&self) {
        // SAFETY: IMG_Quit takes no parameters and tolerates repeat calls.
        unsafe { (self.api.quit)() }
    }

    /// Version of the dynamically loaded SDL2_image library.
    pub fn linked_version(&self) -> Version {
        self.version
    }

    // ── Surface loading ───────────────────────────────────────────────────────

    /// Load an image from a filesystem path into a CPU surface.
    ///
    /// The format is detected from the file contents (falling back to the
    /// extension).  The surface's pixel format is whatever most closely
    /// matches the file; convert afterwards if a specific layout is needed.
    pub fn load_surface(&self, path: impl AsRef<Path>) -> Result<Surface<'_>> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::MissingFile(path.to_path_buf()));
        }
        let c_path = path_to_cstring(path)?;
        self.clear_error();
        // SAFETY: c_path is NUL-terminated and outlives the call.
        let raw = unsafe { (self.api.load)(c_path.as_ptr()) };
        self.surface_from("IMG_Load", raw)
    }

    /// Load an image from a data source into a CPU surface.
    ///
    /// If `free_src` is true the source is closed before returning, whether
    /// or not the load succeeds; the caller must not touch it again.
    ///
    /// # Safety
    ///
    /// `src` must be a live `SDL_RWops`.  When `free_src` is false it
    /// remains owned by the caller.
    pub unsafe fn load_surface_rw(
        &self,
        src: *mut SdlRwOps,
        free_src: bool,
    ) -> Result<Surface<'_>> {
        if src.is_null() {
            return Err(Error::NullPointer { param: "src" });
        }
        self.clear_error();
        // SAFETY: src is non-null and live per the caller's contract.
        let raw = unsafe { (self.api.load_rw)(src, free_src as c_int) };
        self.surface_from("IMG_Load_RW", raw)
    }

    /// Load an image from a data source into a CPU surface, with an explicit
    /// format hint ("BMP", "GIF", "PNG", …) for data the library cannot
    /// autodetect.  `None` relies on autodetection alone.
    ///
    /// # Safety
    ///
    /// Same contract as [`ImageLib::load_surface_rw`].
    pub unsafe fn load_surface_typed_rw(
        &self,
        src: *mut SdlRwOps,
        free_src: bool,
        format: Option<&str>,
    ) -> Result<Surface<'_>> {
        if src.is_null() {
            return Err(Error::NullPointer { param: "src" });
        }
        let hint = format_hint(format)?;
        let hint_ptr = hint.as_ref().map_or(ptr::null(), |s| s.as_ptr());
        self.clear_error();
        // SAFETY: src is non-null and live per the caller's contract; the
        // hint is either null or NUL-terminated and outlives the call.
        let raw = unsafe { (self.api.load_typed_rw)(src, free_src as c_int, hint_ptr) };
        self.surface_from("IMG_LoadTyped_RW", raw)
    }

    // ── Texture loading ───────────────────────────────────────────────────────

    /// Load an image from a filesystem path straight into a GPU texture.
    ///
    /// More efficient than going through a surface when the pixels are not
    /// manipulated after loading.
    ///
    /// # Safety
    ///
    /// `renderer` must be a live `SDL_Renderer`, and this must be called on
    /// the thread that owns it.
    pub unsafe fn load_texture(
        &self,
        renderer: *mut SdlRenderer,
        path: impl AsRef<Path>,
    ) -> Result<Texture<'_>> {
        if renderer.is_null() {
            return Err(Error::NullPointer { param: "renderer" });
        }
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::MissingFile(path.to_path_buf()));
        }
        let c_path = path_to_cstring(path)?;
        self.clear_error();
        // SAFETY: renderer is non-null and live per the caller's contract;
        // c_path is NUL-terminated and outlives the call.
        let raw = unsafe { (self.api.load_texture)(renderer, c_path.as_ptr()) };
        self.texture_from("IMG_LoadTexture", raw)
    }

    /// Load an image from a data source into a GPU texture.
    ///
    /// # Safety
    ///
    /// `renderer` must be a live `SDL_Renderer` owned by this thread, and
    /// `src` a live `SDL_RWops` (closed before returning when `free_src`).
    pub unsafe fn load_texture_rw(
        &self,
        renderer: *mut SdlRenderer,
        src: *mut SdlRwOps,
        free_src: bool,
    ) -> Result<Texture<'_>> {
        if renderer.is_null() {
            return Err(Error::NullPointer { param: "renderer" });
        }
        if src.is_null() {
            return Err(Error::NullPointer { param: "src" });
        }
        self.clear_error();
        // SAFETY: both handles are non-null and live per the caller's
        // contract.
        let raw = unsafe { (self.api.load_texture_rw)(renderer, src, free_src as c_int) };
        self.texture_from("IMG_LoadTexture_RW", raw)
    }

    /// Load an image from a data source into a GPU texture, with an explicit
    /// format hint.
    ///
    /// # Safety
    ///
    /// Same contract as [`ImageLib::load_texture_rw`].
    pub unsafe fn load_texture_typed_rw(
        &self,
        renderer: *mut SdlRenderer,
        src: *mut SdlRwOps,
        free_src: bool,
        format: Option<&str>,
    ) -> Result<Texture<'_>> {
        if renderer.is_null() {
            return Err(Error::NullPointer { param: "renderer" });
        }
        if src.is_null() {
            return Err(Error::NullPointer { param: "src" });
        }
        let hint = format_hint(format)?;
        let hint_ptr = hint.as_ref().map_or(ptr::null(), |s| s.as_ptr());
        self.clear_error();
        // SAFETY: handles are non-null and live per the caller's contract;
        // the hint is either null or NUL-terminated and outlives the call.
        let raw = unsafe {
            (self.api.load_texture_typed_rw)(renderer, src, free_src as c_int, hint_ptr)
        };
        self.texture_from("IMG_LoadTextureTyped_RW", raw)
    }

    // ── XPM ───────────────────────────────────────────────────────────────────

    /// Decode an in-memory XPM row array.
    ///
    /// The result is an 8bpp indexed surface when the palette allows it,
    /// 32bpp otherwise; use [`ImageLib::read_xpm_rgb888`] to always get
    /// 32-bit data.
    pub fn read_xpm(&self, rows: &[&str]) -> Result<Surface<'_>> {
        let (storage, mut pointers) = xpm_to_c_array(rows)?;
        self.clear_error();
        // SAFETY: pointers addresses NUL-terminated rows owned by `storage`
        // and ends with a null entry; both live past the call.  The native
        // side only reads the rows.
        let raw = unsafe { (self.api.read_xpm)(pointers.as_mut_ptr()) };
        drop(storage);
        self.surface_from("IMG_ReadXPMFromArray", raw)
    }

    /// Decode an in-memory XPM row array into a surface that is always
    /// 32-bit RGB.
    pub fn read_xpm_rgb888(&self, rows: &[&str]) -> Result<Surface<'_>> {
        let (storage, mut pointers) = xpm_to_c_array(rows)?;
        self.clear_error();
        // SAFETY: as in `read_xpm`.
        let raw = unsafe { (self.api.read_xpm_rgb888)(pointers.as_mut_ptr()) };
        drop(storage);
        self.surface_from("IMG_ReadXPMFromArrayToRGB888", raw)
    }

    // ── Saving ────────────────────────────────────────────────────────────────

    /// Encode a surface as PNG at `path`, overwriting any existing file.
    pub fn save_png(&self, surface: &Surface<'_>, path: impl AsRef<Path>) -> Result<()> {
        let c_path = path_to_cstring(path.as_ref())?;
        self.clear_error();
        // SAFETY: the surface handle is live (enforced by the borrow) and
        // c_path is NUL-terminated, outliving the call.
        let rc = unsafe { (self.api.save_png)(surface.as_ptr(), c_path.as_ptr()) };
        self.check_rc("IMG_SavePNG", rc)
    }

    /// Encode a surface as PNG into a data source.
    ///
    /// If `free_dst` is true the destination is closed before returning,
    /// whether or not the save succeeds.
    ///
    /// # Safety
    ///
    /// `dst` must be a live, writable `SDL_RWops`.
    pub unsafe fn save_png_rw(
        &self,
        surface: &Surface<'_>,
        dst: *mut SdlRwOps,
        free_dst: bool,
    ) -> Result<()> {
        if dst.is_null() {
            return Err(Error::NullPointer { param: "dst" });
        }
        self.clear_error();
        // SAFETY: dst is non-null and live per the caller's contract; the
        // surface handle is live via its borrow.
        let rc = unsafe { (self.api.save_png_rw)(surface.as_ptr(), dst, free_dst as c_int) };
        self.check_rc("IMG_SavePNG_RW", rc)
    }

    /// Encode a surface as JPEG at `path`, overwriting any existing file.
    ///
    /// `quality` is 0–100, where 0–33 is low, 34–66 medium, 67–100 high.
    pub fn save_jpg(
        &self,
        surface: &Surface<'_>,
        path: impl AsRef<Path>,
        quality: i32,
    ) -> Result<()> {
        check_quality(quality)?;
        let c_path = path_to_cstring(path.as_ref())?;
        self.clear_error();
        // SAFETY: as in `save_png`.
        let rc = unsafe { (self.api.save_jpg)(surface.as_ptr(), c_path.as_ptr(), quality) };
        self.check_rc("IMG_SaveJPG", rc)
    }

    /// Encode a surface as JPEG into a data source.
    ///
    /// # Safety
    ///
    /// Same contract as [`ImageLib::save_png_rw`].
    pub unsafe fn save_jpg_rw(
        &self,
        surface: &Surface<'_>,
        dst: *mut SdlRwOps,
        free_dst: bool,
        quality: i32,
    ) -> Result<()> {
        check_quality(quality)?;
        if dst.is_null() {
            return Err(Error::NullPointer { param: "dst" });
        }
        self.clear_error();
        // SAFETY: as in `save_png_rw`.
        let rc =
            unsafe { (self.api.save_jpg_rw)(surface.as_ptr(), dst, free_dst as c_int, quality) };
        self.check_rc("IMG_SaveJPG_RW", rc)
    }

    // ── Sentinel translation ──────────────────────────────────────────────────

    fn surface_from(&self, function: &'static str, raw: *mut SdlSurface) -> Result<Surface<'_>> {
        match NonNull::new(raw) {
            Some(ptr) => Ok(Surface { ptr, lib: self }),
            None => Err(self.native_error(function)),
        }
    }

    fn texture_from(&self, function: &'static str, raw: *mut SdlTexture) -> Result<Texture<'_>> {
        match NonNull::new(raw) {
            Some(ptr) => Ok(Texture { ptr, lib: self }),
            None => Err(self.native_error(function)),
        }
    }

    fn check_rc(&self, function: &'static str, rc: c_int) -> Result<()> {
        if rc == 0 {
            Ok(())
        } else {
            Err(self.native_error(function))
        }
    }

    /// Build an error for `function` from the native error text.
    fn native_error(&self, function: &'static str) -> Error {
        // SAFETY: SDL_GetError returns a pointer into thread-local static
        // storage, valid until the next SDL call on this thread; it is
        // copied out immediately.
        let message = unsafe {
            let raw = (self.api.get_error)();
            if raw.is_null() {
                String::new()
            } else {
                CStr::from_ptr(raw).to_string_lossy().into_owned()
            }
        };
        Error::Native { function, message }
    }

    /// Clear stale native error state so a failure reports its own message.
    fn clear_error(&self) {
        // SAFETY: SDL_ClearError takes no parameters.
        unsafe { (self.api.clear_error)() }
    }
}

impl Drop for ImageLib {
    fn drop(&mut self) {
        // SAFETY: the entry points stay valid until the Library fields drop,
        // which happens after this body.  All Surface/Texture borrows are
        // gone (drop requires exclusive ownership), and IMG_Quit tolerates
        // never-initialized and repeated calls.
        unsafe { (self.api.quit)() }
    }
}

// ── Surface ───────────────────────────────────────────────────────────────────

/// An owned CPU-side pixel buffer, released with `SDL_FreeSurface` on drop.
pub struct Surface<'lib> {
    ptr: NonNull<SdlSurface>,
    lib: &'lib ImageLib,
}

impl<'lib> Surface<'lib> {
    /// Adopt a surface obtained from other SDL code.
    ///
    /// # Safety
    ///
    /// `raw` must be a valid `SDL_Surface` not owned elsewhere; this takes
    /// over releasing it.
    pub unsafe fn from_raw(lib: &'lib ImageLib, raw: *mut SdlSurface) -> Result<Self> {
        match NonNull::new(raw) {
            Some(ptr) => Ok(Self { ptr, lib }),
            None => Err(Error::NullPointer { param: "raw" }),
        }
    }

    /// The native handle, for passing to other SDL calls.  Ownership is
    /// unchanged; the pointer is valid while `self` is alive.
    pub fn as_ptr(&self) -> *mut SdlSurface {
        self.ptr.as_ptr()
    }

    /// Release ownership without freeing.  The caller becomes responsible
    /// for `SDL_FreeSurface`.
    pub fn into_raw(self) -> *mut SdlSurface {
        let raw = self.ptr.as_ptr();
        std::mem::forget(self);
        raw
    }
}

impl Drop for Surface<'_> {
    fn drop(&mut self) {
        // SAFETY: ptr came from a successful native load (or the from_raw
        // contract) and has not been released; the ImageLib borrow keeps the
        // entry point loaded.
        unsafe { (self.lib.api.free_surface)(self.ptr.as_ptr()) }
    }
}

// ── Texture ───────────────────────────────────────────────────────────────────

/// An owned GPU-side image, released with `SDL_DestroyTexture` on drop.
///
/// Must be dropped on the thread that owns the renderer it was created
/// with, like every SDL texture.
pub struct Texture<'lib> {
    ptr: NonNull<SdlTexture>,
    lib: &'lib ImageLib,
}

impl<'lib> Texture<'lib> {
    /// Adopt a texture obtained from other SDL code.
    ///
    /// # Safety
    ///
    /// `raw` must be a valid `SDL_Texture` not owned elsewhere; this takes
    /// over destroying it.
    pub unsafe fn from_raw(lib: &'lib ImageLib, raw: *mut SdlTexture) -> Result<Self> {
        match NonNull::new(raw) {
            Some(ptr) => Ok(Self { ptr, lib }),
            None => Err(Error::NullPointer { param: "raw" }),
        }
    }

    /// The native handle, for passing to the rendering API.  Ownership is
    /// unchanged; the pointer is valid while `self` is alive.
    pub fn as_ptr(&self) -> *mut SdlTexture {
        self.ptr.as_ptr()
    }

    /// Release ownership without destroying.  The caller becomes responsible
    /// for `SDL_DestroyTexture`.
    pub fn into_raw(self) -> *mut SdlTexture {
        let raw = self.ptr.as_ptr();
        std::mem::forget(self);
        raw
    }
}

impl Drop for Texture<'_> {
    fn drop(&mut self) {
        // SAFETY: ptr came from a successful native load (or the from_raw
        // contract) and has not been destroyed; the ImageLib borrow keeps
        // the entry point loaded.
        unsafe { (self.lib.api.destroy_texture)(self.ptr.as_ptr()) }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
//
// Everything below exercises the pure-Rust half of the module: flags,
// marshalling, and validation.  Nothing here opens the native libraries.

#[cfg(test)]
mod tests {
    use super::*;

    // ── InitFlags ─────────────────────────────────────────────────────────────

    #[test]
    fn init_flag_bits_match_native_constants() {
        assert_eq!(InitFlags::JPG.bits(), 0x1);
        assert_eq!(InitFlags::PNG.bits(), 0x2);
        assert_eq!(InitFlags::TIF.bits(), 0x4);
        assert_eq!(InitFlags::WEBP.bits(), 0x8);
    }

    #[test]
    fn init_flags_compose() {
        let both = InitFlags::JPG | InitFlags::PNG;
        assert_eq!(both.bits(), 0x3);
        assert!(both.contains(InitFlags::JPG));
        assert!(!both.contains(InitFlags::WEBP));
    }

    #[test]
    fn init_flags_reject_unknown_bits() {
        assert_eq!(InitFlags::from_bits(0x10), None);
        // from_bits_truncate drops bits future releases might add.
        assert_eq!(InitFlags::from_bits_truncate(0x1F), InitFlags::all());
    }

    // ── Version ───────────────────────────────────────────────────────────────

    #[test]
    fn compiled_version_is_2_0_28() {
        assert_eq!(COMPILED_VERSION.to_string(), "2.0.28");
    }

    // ── Quality validation ────────────────────────────────────────────────────

    #[test]
    fn quality_bounds() {
        assert!(check_quality(0).is_ok());
        assert!(check_quality(100).is_ok());
        assert!(check_quality(67).is_ok());
        assert!(check_quality(-1).is_err());
        assert!(check_quality(101).is_err());
    }

    #[test]
    fn quality_error_names_the_value() {
        let err = check_quality(250).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid `quality`: must be between 0 and 100 (got 250)"
        );
    }

    // ── Path marshalling ──────────────────────────────────────────────────────

    #[test]
    fn path_marshals_to_nul_terminated_utf8() {
        let c = path_to_cstring(Path::new("assets/tiles.png")).expect("marshal");
        assert_eq!(c.as_bytes(), b"assets/tiles.png");
    }

    #[test]
    fn path_with_interior_nul_is_rejected() {
        let err = path_to_cstring(Path::new("bad\0name.png")).unwrap_err();
        assert!(matches!(err, Error::Nul(_)));
    }

    // ── Format hints ──────────────────────────────────────────────────────────

    #[test]
    fn format_hint_none_passes_through() {
        assert_eq!(format_hint(None).expect("marshal"), None);
    }

    #[test]
    fn format_hint_some_marshals() {
        let hint = format_hint(Some("PNG")).expect("marshal");
        assert_eq!(hint.as_deref(), Some(c"PNG"));
    }

    // ── XPM marshalling ───────────────────────────────────────────────────────

    #[test]
    fn xpm_array_has_trailing_null_entry() {
        let rows = ["2 2 1 1", "a c #FF0000", "aa", "aa"];
        let (storage, pointers) = xpm_to_c_array(&rows).expect("marshal");
        assert_eq!(storage.len(), rows.len());
        assert_eq!(pointers.len(), rows.len() + 1);
        assert!(pointers[..rows.len()].iter().all(|p| !p.is_null()));
        assert!(pointers[rows.len()].is_null());
    }

    #[test]
    fn xpm_rows_keep_their_content() {
        let rows = ["1 1 1 1", ". c None", "."];
        let (storage, _pointers) = xpm_to_c_array(&rows).expect("marshal");
        assert_eq!(storage[1].as_bytes(), b". c None");
    }

    #[test]
    fn empty_xpm_array_is_rejected() {
        let err = xpm_to_c_array(&[]).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { param: "xpm", .. }));
    }

    #[test]
    fn xpm_row_with_interior_nul_is_rejected() {
        let err = xpm_to_c_array(&["1 1 1 1", "bad\0row"]).unwrap_err();
        assert!(matches!(err, Error::Nul(_)));
    }

    // ── Symbol display ────────────────────────────────────────────────────────

    #[test]
    fn symbol_display_strips_the_terminator() {
        assert_eq!(symbol_display(b"IMG_Load\0"), "IMG_Load");
    }
}

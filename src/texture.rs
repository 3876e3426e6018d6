//! Image decoding and RGBA texture upload.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use glow::{HasContext, PixelUnpackData};

/// GL internal format for RGBA8 textures, pre-cast to the `i32` that
/// `tex_image_2d` expects.
#[expect(clippy::cast_possible_wrap)]
const RGBA8_INTERNAL_FORMAT: i32 = glow::RGBA8 as i32;

/// Convert a `u32` dimension to the `i32` GL API calls expect.
///
/// # Panics
///
/// Panics if `value > i32::MAX`, which is unreachable for real image
/// dimensions.
fn gl_size(value: u32) -> i32 {
    i32::try_from(value).expect("dimension exceeds i32::MAX")
}

/// A decoded image uploaded as a mipmapped RGBA8 GL texture.
///
/// Owns the texture object. Teardown is explicit: call
/// [`destroy`](Self::destroy) exactly once before the context goes away.
pub struct Texture2d {
    gl: Arc<glow::Context>,
    texture: glow::Texture,
    width: u32,
    height: u32,
}

impl Texture2d {
    /// Decode encoded image bytes (PNG or JPEG) and upload them.
    ///
    /// # Safety
    ///
    /// Requires a valid, current OpenGL context.
    ///
    /// # Errors
    ///
    /// Returns an error string if decoding or GL texture creation fails.
    pub unsafe fn from_encoded(gl: Arc<glow::Context>, bytes: &[u8]) -> Result<Self, String> {
        let img = image::load_from_memory(bytes)
            .map_err(|err| format!("failed to decode image: {err}"))?
            .to_rgba8();
        let (width, height) = img.dimensions();
        unsafe { Self::from_rgba8(gl, &img.into_raw(), width, height) }
    }

    /// Read an image file and upload its decoded contents.
    ///
    /// # Safety
    ///
    /// Requires a valid, current OpenGL context.
    ///
    /// # Errors
    ///
    /// Returns an error string naming the path if the read fails, or the
    /// decode/upload error from [`from_encoded`](Self::from_encoded).
    pub unsafe fn from_file(gl: Arc<glow::Context>, path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let bytes =
            fs::read(path).map_err(|err| format!("failed to read {}: {err}", path.display()))?;
        unsafe { Self::from_encoded(gl, &bytes) }
    }

    /// Upload tightly packed RGBA8 pixels (`width × height × 4` bytes).
    ///
    /// Uses `REPEAT` wrapping and `LINEAR_MIPMAP_LINEAR` / `LINEAR`
    /// filtering, and generates the mipmap chain.
    ///
    /// # Safety
    ///
    /// Requires a valid, current OpenGL context.
    ///
    /// # Errors
    ///
    /// Returns an error string if the pixel slice length does not match the
    /// dimensions or GL texture creation fails.
    pub unsafe fn from_rgba8(
        gl: Arc<glow::Context>,
        pixels: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Self, String> {
        let expected = u64::from(width) * u64::from(height) * 4;
        if pixels.len() as u64 != expected {
            return Err(format!(
                "pixel data is {} bytes, expected {expected} for {width}x{height} RGBA",
                pixels.len()
            ));
        }

        unsafe {
            let texture = gl.create_texture()?;
            gl.bind_texture(glow::TEXTURE_2D, Some(texture));
            Self::set_default_tex_params(&gl);
            gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                RGBA8_INTERNAL_FORMAT,
                gl_size(width),
                gl_size(height),
                0,
                glow::RGBA,
                glow::UNSIGNED_BYTE,
                PixelUnpackData::Slice(Some(pixels)),
            );
            gl.generate_mipmap(glow::TEXTURE_2D);
            gl.bind_texture(glow::TEXTURE_2D, None);

            Ok(Self {
                gl,
                texture,
                width,
                height,
            })
        }
    }

    /// Set default texture wrapping and filtering parameters.
    unsafe fn set_default_tex_params(gl: &glow::Context) {
        // GL constant values are small enough that the cast is always safe.
        #[expect(clippy::cast_possible_wrap)]
        unsafe {
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_S, glow::REPEAT as i32);
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_T, glow::REPEAT as i32);
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MIN_FILTER,
                glow::LINEAR_MIPMAP_LINEAR as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MAG_FILTER,
                glow::LINEAR as i32,
            );
        }
    }

    /// Bind this texture to `TEXTURE0 + unit`.
    ///
    /// Pair with an integer sampler uniform set to the same `unit` via the
    /// program's uniform binder.
    ///
    /// # Safety
    ///
    /// Requires the creating OpenGL context to be current.
    pub unsafe fn bind(&self, unit: u32) {
        unsafe {
            self.gl.active_texture(glow::TEXTURE0 + unit);
            self.gl.bind_texture(glow::TEXTURE_2D, Some(self.texture));
        }
    }

    /// Pixel width of the uploaded image.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Pixel height of the uploaded image.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Delete the texture object.
    ///
    /// # Safety
    ///
    /// Must be called with the creating GL context current, exactly once.
    /// The texture must not be used afterwards.
    pub unsafe fn destroy(&self) {
        unsafe { self.gl.delete_texture(self.texture) };
    }
}

//! The owning handle over a linked shader program.

use std::path::Path;
use std::sync::Arc;

use glow::HasContext;

use crate::compile;
use crate::error::BuildError;
use crate::source::ShaderSource;
use crate::uniform::UniformValue;

/// An owning handle over a linked, GPU-executable shader program.
///
/// A `ShaderProgram` only ever wraps a successfully linked program: a failed
/// build releases every intermediate GL object and returns a [`BuildError`]
/// instead of producing a half-built handle, so the caller decides at the
/// construction site whether to abort.
///
/// Two sequential builds from the same source files produce functionally
/// equivalent programs (the same set of resolvable uniform names), though
/// the underlying handles differ.
///
/// # Teardown
///
/// GL resources are not released on drop — there is no guarantee the
/// creating context is current at drop time. Call [`destroy`](Self::destroy)
/// exactly once before the context goes away.
///
/// # Example
///
/// ```no_run
/// # use std::sync::Arc;
/// # unsafe fn example(gl: Arc<glow::Context>) -> Result<(), glow_program::BuildError> {
/// use glow_program::{ShaderProgram, UniformValue};
///
/// // During setup (with a current GL context):
/// let program = unsafe { ShaderProgram::from_files(gl, "cube.vert", "cube.frag") }?;
///
/// // Each frame:
/// # let mvp = [0.0_f32; 16];
/// unsafe {
///     program.activate();
///     program.set_vec3("myColor", [0.0, 1.0, 0.0]);
///     program.set_uniform(
///         "transform",
///         UniformValue::Mat4 { data: &mvp, transpose: false },
///     );
/// }
/// # unsafe { program.destroy() };
/// # Ok(()) }
/// ```
pub struct ShaderProgram {
    /// The OpenGL context, shared via [`Arc`] so the handle can live
    /// alongside other resources that reference it.
    gl: Arc<glow::Context>,
    program: glow::Program,
}

impl ShaderProgram {
    /// Build a program from a vertex and a fragment source file.
    ///
    /// # Safety
    ///
    /// Requires a valid, current OpenGL context.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::SourceRead`] if either file cannot be read,
    /// [`BuildError::Compile`] tagged with the failing stage, or
    /// [`BuildError::Link`] if the stages do not link. Compile and link
    /// diagnostics are also emitted through the [`log`] facade at the point
    /// of detection.
    pub unsafe fn from_files(
        gl: Arc<glow::Context>,
        vertex_path: impl AsRef<Path>,
        fragment_path: impl AsRef<Path>,
    ) -> Result<Self, BuildError> {
        let source = ShaderSource::load(vertex_path, fragment_path)?;
        unsafe { Self::from_sources(gl, &source) }
    }

    /// Build a program from in-memory stage sources.
    ///
    /// # Safety
    ///
    /// Requires a valid, current OpenGL context.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Compile`] or [`BuildError::Link`] on failure;
    /// every intermediate stage and program object is released before the
    /// error is returned.
    pub unsafe fn from_sources(
        gl: Arc<glow::Context>,
        source: &ShaderSource,
    ) -> Result<Self, BuildError> {
        let program = unsafe { compile::build_program(&gl, &source.vertex, &source.fragment) }?;
        Ok(Self { gl, program })
    }

    /// Make this program the target of subsequent draw calls.
    ///
    /// Idempotent: calling it twice in a row leaves the driver's
    /// bound-program state identical to calling it once. A program must be
    /// activated before a draw for prior uniform writes to take visible
    /// effect; the binder itself does not require activation.
    ///
    /// # Safety
    ///
    /// Requires the creating OpenGL context to be current.
    pub unsafe fn activate(&self) {
        unsafe { self.gl.use_program(Some(self.program)) };
    }

    /// Write a typed value to a named uniform.
    ///
    /// The name is resolved against this program on every call, whether or
    /// not the program is currently active. Returns `false` without writing
    /// if the name is not declared in the linked program or was optimized
    /// out, so renaming or removing a uniform during shader iteration never
    /// errors the host. A [`UniformValue::Mat4`] payload whose length is
    /// zero or not a multiple of 16 is rejected the same way.
    ///
    /// # Safety
    ///
    /// Requires the creating OpenGL context to be current.
    pub unsafe fn set_uniform(&self, name: &str, value: UniformValue<'_>) -> bool {
        let gl = &self.gl;
        let Some(location) = (unsafe { gl.get_uniform_location(self.program, name) }) else {
            return false;
        };

        unsafe {
            match value {
                UniformValue::Bool(v) => gl.uniform_1_i32(Some(&location), i32::from(v)),
                UniformValue::Int(v) => gl.uniform_1_i32(Some(&location), v),
                UniformValue::Float(v) => gl.uniform_1_f32(Some(&location), v),
                UniformValue::Vec3([x, y, z]) => gl.uniform_3_f32(Some(&location), x, y, z),
                UniformValue::Vec4([x, y, z, w]) => {
                    gl.uniform_4_f32(Some(&location), x, y, z, w);
                }
                UniformValue::Mat4 { data, transpose } => {
                    if value.matrix_count().is_none() {
                        return false;
                    }
                    gl.uniform_matrix_4_f32_slice(Some(&location), transpose, data);
                }
            }
        }
        true
    }

    /// Write a boolean uniform. See [`set_uniform`](Self::set_uniform).
    ///
    /// # Safety
    ///
    /// Requires the creating OpenGL context to be current.
    pub unsafe fn set_bool(&self, name: &str, value: bool) -> bool {
        unsafe { self.set_uniform(name, UniformValue::Bool(value)) }
    }

    /// Write an integer uniform (also used for sampler texture units).
    /// See [`set_uniform`](Self::set_uniform).
    ///
    /// # Safety
    ///
    /// Requires the creating OpenGL context to be current.
    pub unsafe fn set_int(&self, name: &str, value: i32) -> bool {
        unsafe { self.set_uniform(name, UniformValue::Int(value)) }
    }

    /// Write a scalar float uniform. See [`set_uniform`](Self::set_uniform).
    ///
    /// # Safety
    ///
    /// Requires the creating OpenGL context to be current.
    pub unsafe fn set_float(&self, name: &str, value: f32) -> bool {
        unsafe { self.set_uniform(name, UniformValue::Float(value)) }
    }

    /// Write a `vec3` uniform. See [`set_uniform`](Self::set_uniform).
    ///
    /// # Safety
    ///
    /// Requires the creating OpenGL context to be current.
    pub unsafe fn set_vec3(&self, name: &str, value: [f32; 3]) -> bool {
        unsafe { self.set_uniform(name, UniformValue::Vec3(value)) }
    }

    /// Write a `vec4` uniform. See [`set_uniform`](Self::set_uniform).
    ///
    /// # Safety
    ///
    /// Requires the creating OpenGL context to be current.
    pub unsafe fn set_vec4(&self, name: &str, value: [f32; 4]) -> bool {
        unsafe { self.set_uniform(name, UniformValue::Vec4(value)) }
    }

    /// Write one or more column-major 4×4 matrices (16 floats each).
    /// See [`set_uniform`](Self::set_uniform).
    ///
    /// # Safety
    ///
    /// Requires the creating OpenGL context to be current.
    pub unsafe fn set_mat4(&self, name: &str, data: &[f32], transpose: bool) -> bool {
        unsafe { self.set_uniform(name, UniformValue::Mat4 { data, transpose }) }
    }

    /// The raw program handle, for draw code outside this crate.
    #[must_use]
    pub fn raw(&self) -> glow::Program {
        self.program
    }

    /// Delete the underlying program object.
    ///
    /// # Safety
    ///
    /// Must be called with the same GL context that was used to build the
    /// program, and must be called exactly once. The handle must not be
    /// used afterwards.
    pub unsafe fn destroy(&self) {
        unsafe { self.gl.delete_program(self.program) };
    }
}

//! Shader program lifecycle and typed uniform binding for OpenGL via [glow].
//!
//! This crate owns the one stateful contract of a minimal real-time
//! rendering harness: building a GPU-resident shader program from two stage
//! sources and feeding it named, typed inputs every frame.
//!
//! - [`ShaderSource`] loads vertex and fragment stage text from disk, with
//!   a fail-soft variant that substitutes empty source for unreadable
//!   files.
//! - [`ShaderProgram`] compiles both stages, links them, and owns the
//!   resulting program. Compile and link failures carry the driver's full
//!   diagnostic log as a typed [`BuildError`] (and are also emitted through
//!   the [`log`] facade); intermediate stage objects never outlive the link
//!   step.
//! - [`UniformValue`] is the tagged value passed to the uniform binder:
//!   bool, int, float, `vec3`, `vec4`, or an array of column-major 4×4
//!   matrices. Unknown uniform names are a fail-soft `false` return, never
//!   an error — iterating on shader source must not crash the host.
//! - [`Mesh`] and [`Texture2d`] wrap the vertex-buffer and texture
//!   collaborators a draw loop needs alongside the program: interleaved
//!   position + texcoord geometry (including the classic unit cube) and
//!   mipmapped RGBA uploads decoded via [image].
//!
//! # Safety
//!
//! Every GPU-touching method is `unsafe` because it issues raw GL calls: it
//! requires a valid OpenGL context, current on the calling thread. Driver
//! state (bound program, active texture unit) is global and thread-affine,
//! so nothing here may be used from more than one thread. All operations
//! are synchronous blocking calls into the driver.
//!
//! Teardown is explicit: each owning type has a `destroy` method that must
//! be called exactly once before the context goes away. Nothing is released
//! on drop, since the context may no longer be current at that point.
//!
//! # Example
//!
//! ```no_run
//! # use std::sync::Arc;
//! # unsafe fn example(gl: Arc<glow::Context>) -> Result<(), Box<dyn std::error::Error>> {
//! use glow_program::{Mesh, ShaderProgram, Texture2d};
//!
//! // During setup (with a current GL context):
//! let program =
//!     unsafe { ShaderProgram::from_files(gl.clone(), "cube.vert", "cube.frag") }?;
//! let cube = unsafe { Mesh::cube(gl.clone()) }?;
//! let texture = unsafe { Texture2d::from_file(gl.clone(), "container.jpg") }?;
//!
//! // Each frame:
//! # let mvp = [0.0_f32; 16];
//! unsafe {
//!     program.activate();
//!     texture.bind(0);
//!     program.set_int("ourTexture0", 0);
//!     program.set_mat4("transform", &mvp, false);
//!     cube.draw();
//! }
//!
//! // Before the context is dropped:
//! unsafe {
//!     texture.destroy();
//!     cube.destroy();
//!     program.destroy();
//! }
//! # Ok(()) }
//! ```
//!
//! [glow]: https://docs.rs/glow
//! [image]: https://docs.rs/image

mod compile;
mod error;
mod mesh;
mod program;
mod source;
mod texture;
mod uniform;

pub use error::{BuildError, ShaderStage};
pub use mesh::{cube_vertices, Mesh, Vertex};
pub use program::ShaderProgram;
pub use source::ShaderSource;
pub use texture::Texture2d;
pub use uniform::UniformValue;

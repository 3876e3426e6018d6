//! Stage compilation and program linking.
//!
//! Both steps are synchronous calls into the driver. Failures are logged at
//! the point of detection and returned as typed [`BuildError`]s carrying the
//! driver's info log. Intermediate GL objects are released on every exit
//! path, success or failure.

use glow::HasContext;

use crate::error::{BuildError, ShaderStage};

/// Compile a single shader stage from source.
///
/// On a driver-reported failure the info log is captured and the stage
/// object is deleted before returning, so no stage resource outlives the
/// error path.
///
/// # Safety
///
/// Requires a valid, current OpenGL context.
pub(crate) unsafe fn compile_stage(
    gl: &glow::Context,
    stage: ShaderStage,
    source: &str,
) -> Result<glow::Shader, BuildError> {
    unsafe {
        let shader = gl.create_shader(stage.gl_type()).map_err(BuildError::Allocate)?;
        gl.shader_source(shader, source);
        gl.compile_shader(shader);

        if !gl.get_shader_compile_status(shader) {
            let log = gl.get_shader_info_log(shader);
            gl.delete_shader(shader);
            log::error!("{stage} shader compilation failed: {log}");
            return Err(BuildError::Compile { stage, log });
        }

        Ok(shader)
    }
}

/// Link two compiled stages into a new program.
///
/// Both stage objects are deleted on every path out of this function; stage
/// resources never outlive the link step. On link failure the half-built
/// program object is deleted as well.
///
/// # Safety
///
/// Requires a valid, current OpenGL context. Both stage handles must come
/// from successful [`compile_stage`] calls and must not be used afterwards.
pub(crate) unsafe fn link_program(
    gl: &glow::Context,
    vertex: glow::Shader,
    fragment: glow::Shader,
) -> Result<glow::Program, BuildError> {
    unsafe {
        let program = match gl.create_program() {
            Ok(program) => program,
            Err(msg) => {
                gl.delete_shader(vertex);
                gl.delete_shader(fragment);
                return Err(BuildError::Allocate(msg));
            }
        };

        gl.attach_shader(program, vertex);
        gl.attach_shader(program, fragment);
        gl.link_program(program);

        if !gl.get_program_link_status(program) {
            let log = gl.get_program_info_log(program);
            gl.delete_program(program);
            gl.delete_shader(vertex);
            gl.delete_shader(fragment);
            log::error!("program link failed: {log}");
            return Err(BuildError::Link { log });
        }

        // Stages can be detached and deleted after successful linking.
        gl.detach_shader(program, vertex);
        gl.detach_shader(program, fragment);
        gl.delete_shader(vertex);
        gl.delete_shader(fragment);

        Ok(program)
    }
}

/// Compile both stages and link them into a program.
///
/// A vertex compile failure skips the fragment compile; if the fragment
/// compile fails, the already-compiled vertex stage is deleted before
/// returning.
///
/// # Safety
///
/// Requires a valid, current OpenGL context.
pub(crate) unsafe fn build_program(
    gl: &glow::Context,
    vertex_src: &str,
    fragment_src: &str,
) -> Result<glow::Program, BuildError> {
    unsafe {
        let vertex = compile_stage(gl, ShaderStage::Vertex, vertex_src)?;
        let fragment = match compile_stage(gl, ShaderStage::Fragment, fragment_src) {
            Ok(fragment) => fragment,
            Err(err) => {
                gl.delete_shader(vertex);
                return Err(err);
            }
        };

        link_program(gl, vertex, fragment)
    }
}

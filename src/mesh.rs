//! Vertex buffer setup for interleaved position + texcoord meshes.

use std::sync::Arc;

use bytemuck::{Pod, Zeroable};
use glow::HasContext;

/// A vertex with a 3D position and a 2D texture coordinate, ready for the
/// GPU.
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Vertex {
    /// Position in model space.
    pub position: [f32; 3],
    /// Texture coordinate.
    pub tex_coord: [f32; 2],
}

/// A unit cube centered at the origin: 36 vertices, 6 faces of 2 triangles,
/// with per-face texture coordinates. Interleaved as `x y z  u v`.
const CUBE: [f32; 180] = [
    -0.5, -0.5, -0.5, 0.0, 0.0,
    0.5, -0.5, -0.5, 1.0, 0.0,
    0.5, 0.5, -0.5, 1.0, 1.0,
    0.5, 0.5, -0.5, 1.0, 1.0,
    -0.5, 0.5, -0.5, 0.0, 1.0,
    -0.5, -0.5, -0.5, 0.0, 0.0,
    //
    -0.5, -0.5, 0.5, 0.0, 0.0,
    0.5, -0.5, 0.5, 1.0, 0.0,
    0.5, 0.5, 0.5, 1.0, 1.0,
    0.5, 0.5, 0.5, 1.0, 1.0,
    -0.5, 0.5, 0.5, 0.0, 1.0,
    -0.5, -0.5, 0.5, 0.0, 0.0,
    //
    -0.5, 0.5, 0.5, 1.0, 0.0,
    -0.5, 0.5, -0.5, 1.0, 1.0,
    -0.5, -0.5, -0.5, 0.0, 1.0,
    -0.5, -0.5, -0.5, 0.0, 1.0,
    -0.5, -0.5, 0.5, 0.0, 0.0,
    -0.5, 0.5, 0.5, 1.0, 0.0,
    //
    0.5, 0.5, 0.5, 1.0, 0.0,
    0.5, 0.5, -0.5, 1.0, 1.0,
    0.5, -0.5, -0.5, 0.0, 1.0,
    0.5, -0.5, -0.5, 0.0, 1.0,
    0.5, -0.5, 0.5, 0.0, 0.0,
    0.5, 0.5, 0.5, 1.0, 0.0,
    //
    -0.5, -0.5, -0.5, 0.0, 1.0,
    0.5, -0.5, -0.5, 1.0, 1.0,
    0.5, -0.5, 0.5, 1.0, 0.0,
    0.5, -0.5, 0.5, 1.0, 0.0,
    -0.5, -0.5, 0.5, 0.0, 0.0,
    -0.5, -0.5, -0.5, 0.0, 1.0,
    //
    -0.5, 0.5, -0.5, 0.0, 1.0,
    0.5, 0.5, -0.5, 1.0, 1.0,
    0.5, 0.5, 0.5, 1.0, 0.0,
    0.5, 0.5, 0.5, 1.0, 0.0,
    -0.5, 0.5, 0.5, 0.0, 0.0,
    -0.5, 0.5, -0.5, 0.0, 1.0,
];

/// The unit cube's 36 vertices, for a textured-cube draw without an index
/// buffer.
#[must_use]
pub fn cube_vertices() -> &'static [Vertex] {
    bytemuck::cast_slice(&CUBE)
}

/// Interleaved vertex data uploaded once and drawn as triangles.
///
/// Owns the vertex array object and vertex buffer. Teardown is explicit:
/// call [`destroy`](Self::destroy) exactly once before the context goes
/// away.
pub struct Mesh {
    gl: Arc<glow::Context>,
    vao: glow::VertexArray,
    vbo: glow::Buffer,
    vertex_count: i32,
}

impl Mesh {
    /// Upload vertex data into a fresh VAO + VBO pair.
    ///
    /// Attribute 0 is the `vec3` position, attribute 1 the `vec2` texture
    /// coordinate.
    ///
    /// # Safety
    ///
    /// Requires a valid, current OpenGL context.
    ///
    /// # Errors
    ///
    /// Returns an error string if GL object creation fails or the vertex
    /// count exceeds `i32::MAX`.
    pub unsafe fn new(gl: Arc<glow::Context>, vertices: &[Vertex]) -> Result<Self, String> {
        let vertex_count =
            i32::try_from(vertices.len()).map_err(|_| "vertex count exceeds i32::MAX".to_owned())?;

        unsafe {
            let vao = gl.create_vertex_array()?;
            let vbo = gl.create_buffer()?;

            gl.bind_vertex_array(Some(vao));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(vertices),
                glow::STATIC_DRAW,
            );

            // Vertex is 20 bytes — well within i32 range.
            #[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
            let stride = std::mem::size_of::<Vertex>() as i32;
            #[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
            let tex_coord_offset = std::mem::offset_of!(Vertex, tex_coord) as i32;

            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, stride, 0);
            gl.enable_vertex_attrib_array(1);
            gl.vertex_attrib_pointer_f32(1, 2, glow::FLOAT, false, stride, tex_coord_offset);

            gl.bind_vertex_array(None);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);

            Ok(Self {
                gl,
                vao,
                vbo,
                vertex_count,
            })
        }
    }

    /// Upload the unit cube.
    ///
    /// # Safety
    ///
    /// Requires a valid, current OpenGL context.
    ///
    /// # Errors
    ///
    /// Returns an error string if GL object creation fails.
    pub unsafe fn cube(gl: Arc<glow::Context>) -> Result<Self, String> {
        unsafe { Self::new(gl, cube_vertices()) }
    }

    /// Draw the whole buffer as triangles.
    ///
    /// The active program and any textures must already be bound by the
    /// caller.
    ///
    /// # Safety
    ///
    /// Requires the creating OpenGL context to be current.
    pub unsafe fn draw(&self) {
        let gl = &self.gl;
        unsafe {
            gl.bind_vertex_array(Some(self.vao));
            gl.draw_arrays(glow::TRIANGLES, 0, self.vertex_count);
            gl.bind_vertex_array(None);
        }
    }

    /// Number of vertices in the buffer.
    #[must_use]
    pub fn vertex_count(&self) -> i32 {
        self.vertex_count
    }

    /// Delete the buffer objects.
    ///
    /// # Safety
    ///
    /// Must be called with the creating GL context current, exactly once.
    /// The mesh must not be used afterwards.
    pub unsafe fn destroy(&self) {
        unsafe {
            self.gl.delete_buffer(self.vbo);
            self.gl.delete_vertex_array(self.vao);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn vertex_layout_matches_interleaved_stride() {
        assert_eq!(std::mem::size_of::<Vertex>(), 20);
        assert_eq!(std::mem::offset_of!(Vertex, position), 0);
        assert_eq!(std::mem::offset_of!(Vertex, tex_coord), 12);
    }

    #[test]
    fn cube_has_36_unit_vertices() {
        let vertices = cube_vertices();
        assert_eq!(vertices.len(), 36);
        for v in vertices {
            for coord in v.position {
                assert!((-0.5..=0.5).contains(&coord));
            }
            for uv in v.tex_coord {
                assert!((0.0..=1.0).contains(&uv));
            }
        }
    }

    #[test]
    fn cube_casts_cleanly_to_bytes() {
        let bytes: &[u8] = bytemuck::cast_slice(cube_vertices());
        assert_eq!(bytes.len(), 36 * 20);
    }
}

//! Typed values for named shader inputs.

/// A typed value for a named shader uniform.
///
/// One tagged variant per supported shape keeps the write dispatch
/// exhaustive instead of leaning on overload-style method resolution.
/// Values are passed to [`ShaderProgram::set_uniform`], which resolves the
/// name and issues the matching typed GL write.
///
/// [`ShaderProgram::set_uniform`]: crate::ShaderProgram::set_uniform
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue<'a> {
    /// A boolean, written as `0` or `1`.
    Bool(bool),
    /// A signed integer (also used for sampler texture unit indices).
    Int(i32),
    /// A scalar float.
    Float(f32),
    /// A three-component float vector.
    Vec3([f32; 3]),
    /// A four-component float vector.
    Vec4([f32; 4]),
    /// One or more 4×4 float matrices in column-major order.
    ///
    /// `data` must hold 16 elements per matrix; it is only borrowed for the
    /// duration of the set call. Set `transpose` if the storage is
    /// row-major.
    Mat4 {
        /// Matrix elements, 16 per matrix.
        data: &'a [f32],
        /// Whether the driver should transpose on upload.
        transpose: bool,
    },
}

impl UniformValue<'_> {
    /// Number of matrices in a [`Mat4`](Self::Mat4) payload.
    ///
    /// Returns `None` for non-matrix shapes and for a payload whose length
    /// is zero or not a multiple of 16 (which the binder rejects).
    #[must_use]
    pub fn matrix_count(&self) -> Option<usize> {
        match self {
            UniformValue::Mat4 { data, .. } if !data.is_empty() && data.len() % 16 == 0 => {
                Some(data.len() / 16)
            }
            _ => None,
        }
    }
}

impl From<bool> for UniformValue<'_> {
    fn from(value: bool) -> Self {
        UniformValue::Bool(value)
    }
}

impl From<i32> for UniformValue<'_> {
    fn from(value: i32) -> Self {
        UniformValue::Int(value)
    }
}

impl From<f32> for UniformValue<'_> {
    fn from(value: f32) -> Self {
        UniformValue::Float(value)
    }
}

impl From<[f32; 3]> for UniformValue<'_> {
    fn from(value: [f32; 3]) -> Self {
        UniformValue::Vec3(value)
    }
}

impl From<[f32; 4]> for UniformValue<'_> {
    fn from(value: [f32; 4]) -> Self {
        UniformValue::Vec4(value)
    }
}

impl<'a> From<&'a [f32; 16]> for UniformValue<'a> {
    fn from(data: &'a [f32; 16]) -> Self {
        UniformValue::Mat4 {
            data,
            transpose: false,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn conversions_preserve_shape() {
        assert_eq!(UniformValue::from(true), UniformValue::Bool(true));
        assert_eq!(UniformValue::from(7_i32), UniformValue::Int(7));
        assert_eq!(UniformValue::from(0.5_f32), UniformValue::Float(0.5));
        assert_eq!(
            UniformValue::from([1.0, 0.0, 0.0]),
            UniformValue::Vec3([1.0, 0.0, 0.0])
        );
        assert_eq!(
            UniformValue::from([0.0, 1.0, 0.0, 1.0]),
            UniformValue::Vec4([0.0, 1.0, 0.0, 1.0])
        );
    }

    #[test]
    fn identity_matrix_converts_untransposed() {
        let mut identity = [0.0_f32; 16];
        for i in 0..4 {
            identity[i * 4 + i] = 1.0;
        }
        match UniformValue::from(&identity) {
            UniformValue::Mat4 { data, transpose } => {
                assert_eq!(data.len(), 16);
                assert!(!transpose);
            }
            other => panic!("expected Mat4, got {other:?}"),
        }
    }

    #[test]
    fn matrix_count_derives_from_payload_length() {
        let two = [0.0_f32; 32];
        let value = UniformValue::Mat4 {
            data: &two,
            transpose: false,
        };
        assert_eq!(value.matrix_count(), Some(2));

        let one = [0.0_f32; 16];
        assert_eq!(UniformValue::from(&one).matrix_count(), Some(1));
    }

    #[test]
    fn matrix_count_rejects_ragged_and_non_matrix_payloads() {
        let ragged = [0.0_f32; 15];
        let value = UniformValue::Mat4 {
            data: &ragged,
            transpose: false,
        };
        assert_eq!(value.matrix_count(), None);

        let empty: [f32; 0] = [];
        let value = UniformValue::Mat4 {
            data: &empty,
            transpose: false,
        };
        assert_eq!(value.matrix_count(), None);

        assert_eq!(UniformValue::Float(1.0).matrix_count(), None);
    }
}

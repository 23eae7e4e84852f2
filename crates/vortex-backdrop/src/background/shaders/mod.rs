mod neuro;

pub use neuro::QUAD_VERTICES;

use neuro::{ITERATIONS_PLACEHOLDER, SHADER_NEURO};

/// Shader source with the field loop count filled in
pub fn neuro_shader_source(iterations: u32) -> String {
    SHADER_NEURO.replace(ITERATIONS_PLACEHOLDER, &iterations.max(1).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iterations_substituted() {
        let source = neuro_shader_source(10);
        assert!(source.contains("const ITERATIONS: i32 = 10;"));
        assert!(!source.contains(ITERATIONS_PLACEHOLDER));
    }

    #[test]
    fn test_zero_iterations_clamped() {
        assert!(neuro_shader_source(0).contains("const ITERATIONS: i32 = 1;"));
    }

    #[test]
    fn test_entry_points_present() {
        let source = neuro_shader_source(15);
        assert!(source.contains("fn vs_main"));
        assert!(source.contains("fn fs_main"));
    }

    #[test]
    fn test_quad_covers_clip_space() {
        assert_eq!(QUAD_VERTICES.len(), 4);
        for corner in [[-1.0, -1.0], [1.0, -1.0], [-1.0, 1.0], [1.0, 1.0]] {
            assert!(QUAD_VERTICES.contains(&corner));
        }
    }
}

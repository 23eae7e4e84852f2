/// Marker replaced with the loop count before compilation
pub const ITERATIONS_PLACEHOLDER: &str = "__ITERATIONS__";

/// Full-viewport quad as a triangle strip
pub const QUAD_VERTICES: [[f32; 2]; 4] = [[-1.0, -1.0], [1.0, -1.0], [-1.0, 1.0], [1.0, 1.0]];

/// Neuro shape field - rotating sine accumulation tinted by theme and scroll
pub const SHADER_NEURO: &str = r#"
const ITERATIONS: i32 = __ITERATIONS__;

struct Uniforms {
    time: f32,
    ratio: f32,
    pointer: vec2<f32>,
    scroll_progress: f32,
    theme_blend: f32,
    _pad: vec2<f32>,
};

struct VsOut {
    @builtin(position) position: vec4<f32>,
    @location(0) uv: vec2<f32>,
};

@group(0) @binding(0) var<uniform> uniforms: Uniforms;

@vertex
fn vs_main(@location(0) position: vec2<f32>) -> VsOut {
    var out: VsOut;
    out.position = vec4<f32>(position, 0.0, 1.0);
    out.uv = 0.5 * (position + 1.0);
    return out;
}

fn rotate(uv: vec2<f32>, th: f32) -> vec2<f32> {
    return mat2x2<f32>(vec2<f32>(cos(th), sin(th)), vec2<f32>(-sin(th), cos(th))) * uv;
}

fn neuro_shape(start_uv: vec2<f32>, t: f32, p: f32) -> f32 {
    var uv = start_uv;
    var sine_acc = vec2<f32>(0.0);
    var res = vec2<f32>(0.0);
    var scale = 8.0;

    for (var j = 0; j < ITERATIONS; j++) {
        uv = rotate(uv, 1.0);
        sine_acc = rotate(sine_acc, 1.0);
        let layer = uv * scale + f32(j) + sine_acc - t;
        sine_acc += sin(layer) + 2.4 * p;
        res += (0.5 + 0.5 * cos(layer)) / scale;
        scale *= 1.2;
    }

    return res.x + res.y;
}

@fragment
fn fs_main(in: VsOut) -> @location(0) vec4<f32> {
    var uv = 0.5 * in.uv;
    uv.x *= uniforms.ratio;

    // Pointer proximity brightens the field
    var pointer = in.uv - uniforms.pointer;
    pointer.x *= uniforms.ratio;
    var p = clamp(length(pointer), 0.0, 1.0);
    p = 0.5 * pow(1.0 - p, 2.0);

    let t = 0.001 * uniforms.time;

    var noise = neuro_shape(uv, t, p);
    noise = 1.2 * pow(noise, 3.0);
    noise += pow(noise, 10.0);
    noise = max(0.0, noise - 0.5);
    noise *= 1.0 - length(in.uv - 0.5);

    let s = uniforms.scroll_progress;

    // Tactical: deep blue #00439C toward cyan #00D9FF
    var dark = vec3<f32>(0.0, 0.263, 0.612);
    dark = mix(dark, vec3<f32>(0.0, 0.851, 1.0), 0.32 + 0.16 * sin(2.0 * s + 1.2));
    dark += vec3<f32>(0.0, 0.1, 0.4) * sin(2.0 * s + 1.5);

    // Light: indigo that still reads against white
    var light = vec3<f32>(0.0, 0.18, 0.55);
    light = mix(light, vec3<f32>(0.0, 0.45, 0.75), 0.3 + 0.15 * sin(2.0 * s + 1.2));
    light += vec3<f32>(0.05, 0.0, 0.35) * sin(2.0 * s + 1.5);

    let color = mix(dark, light, uniforms.theme_blend) * noise;
    return vec4<f32>(color, noise);
}
"#;

//! GLSL ES 3.00 sources for the scene programs.
//!
//! Attribute locations are fixed with `layout(location = …)` so every
//! program shares the same vertex layout: 0 = position, 1 = uv.

pub const ATTR_POSITION: u32 = 0;
pub const ATTR_UV: u32 = 1;

/// Solid colour for the event horizon sphere and both point clouds.
pub const FLAT_VERT: &str = r#"#version 300 es
layout(location = 0) in vec3 aPosition;
uniform mat4 uModel;
uniform mat4 uViewProjection;
uniform float uPointSize;
void main() {
    gl_Position = uViewProjection * uModel * vec4(aPosition, 1.0);
    gl_PointSize = uPointSize;
}
"#;

pub const FLAT_FRAG: &str = r#"#version 300 es
precision mediump float;
uniform vec4 uColor;
uniform bool uRoundPoints;
out vec4 fragColor;
void main() {
    if (uRoundPoints && length(gl_PointCoord - 0.5) > 0.5) {
        discard;
    }
    fragColor = uColor;
}
"#;

/// Shared by the disk and the lensing overlay.
pub const SURFACE_VERT: &str = r#"#version 300 es
layout(location = 0) in vec3 aPosition;
layout(location = 1) in vec2 aUv;
uniform mat4 uModel;
uniform mat4 uViewProjection;
out vec2 vUv;
void main() {
    vUv = aUv;
    gl_Position = uViewProjection * uModel * vec4(aPosition, 1.0);
}
"#;

/// Accretion disk: temperature gradient, spiral arms, Doppler shift and
/// hash turbulence, dimmed near the horizon and brightened by scroll.
pub const DISK_FRAG: &str = r#"#version 300 es
precision highp float;
uniform float uTime;
uniform float uIntensity;
uniform float uHorizonRadius;
uniform float uOpacity;
in vec2 vUv;
out vec4 fragColor;

float hash(vec3 p) {
    return fract(sin(dot(p, vec3(12.9898, 78.233, 45.164))) * 43758.5453);
}

void main() {
    vec2 centered = vUv - 0.5;
    float dist = length(centered);

    float horizon = smoothstep(uHorizonRadius - 0.05, uHorizonRadius, dist);

    const float diskRadius = 0.3;
    const float diskThickness = 0.05;
    float diskMask = 1.0 - smoothstep(0.0, diskThickness, abs(dist - diskRadius));

    float angle = atan(centered.y, centered.x) + uTime * 2.0;
    float spiral = sin(angle * 8.0 + dist * 20.0 - uTime * 5.0) * 0.5 + 0.5;

    vec3 color = mix(vec3(1.0, 0.3, 0.1), vec3(0.8, 0.4, 1.0), dist / diskRadius);
    float turbulence = hash(vec3(vUv * 10.0, uTime * 0.5)) * 0.3;
    color *= spiral + turbulence;

    float doppler = sin(angle + uTime * 3.0) * 0.2;
    color.r += doppler;
    color.b -= doppler;

    color *= smoothstep(uHorizonRadius, uHorizonRadius + 0.1, dist);

    vec3 finalColor = mix(vec3(0.0), color * diskMask, horizon);
    float glow = 1.0 - smoothstep(0.0, 0.5, dist);
    finalColor += vec3(0.4, 0.2, 0.8) * glow * 0.3;
    finalColor *= uIntensity;

    fragColor = vec4(finalColor, uOpacity);
}
"#;

/// Concentric bands drawn additively behind the horizon.
pub const LENS_FRAG: &str = r#"#version 300 es
precision mediump float;
uniform float uTime;
uniform float uIntensity;
uniform float uOpacity;
in vec2 vUv;
out vec4 fragColor;

void main() {
    float dist = length(vUv - 0.5);
    float rings = sin(dist * 20.0 - uTime * 2.0) * 0.5 + 0.5;
    float mask = smoothstep(0.3, 0.8, dist) * (1.0 - smoothstep(0.8, 1.0, dist));
    vec3 color = vec3(0.4, 0.2, 0.8) * rings * mask * 0.3 * uIntensity;
    fragColor = vec4(color, rings * mask * 0.5 * uOpacity);
}
"#;

use std::f32::consts::FRAC_PI_2;

use glam::{Mat4, Vec3};
use js_sys::{Float32Array, Uint16Array};
use wasm_bindgen::JsCast;
use web_sys::{
    window, HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlBuffer, WebGlProgram,
    WebGlShader, WebGlUniformLocation, WebGlVertexArrayObject,
};

use super::handles::{AnimationLoop, Listener};
use super::page::scroll_fraction;
use crate::config::SceneConfig;
use crate::scene::geometry::{self, Mesh};
use crate::scene::shaders::{self, ATTR_POSITION, ATTR_UV};
use crate::scene::{camera, FrameState, ParticleHalo, SceneDriver, SceneError};

const CLEAR: [f32; 4] = [0.0, 0.0, 17.0 / 255.0, 1.0];
// #8B5CF6
const PARTICLE_COLOR: [f32; 4] = [139.0 / 255.0, 92.0 / 255.0, 246.0 / 255.0, 0.6];
const PHOTON_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 0.9];

/// Running scene. Dropping it stops the loop and detaches the resize hook.
pub struct SceneHandle {
    _resize: Listener,
    _frames: AnimationLoop,
}

/// Start the background scene on `canvas`.
pub fn start(canvas: HtmlCanvasElement, config: SceneConfig) -> Result<SceneHandle, SceneError> {
    let gl: GL = canvas
        .get_context("webgl2")
        .map_err(|e| SceneError::ContextUnavailable(format!("{e:?}")))?
        .ok_or_else(|| SceneError::ContextUnavailable("WebGL2 not supported".into()))?
        .dyn_into()
        .map_err(|_| SceneError::ContextUnavailable("unexpected context type".into()))?;

    let win = window().ok_or_else(|| SceneError::ContextUnavailable("no window".into()))?;
    fit_to_window(&canvas);

    // Resize canvas to fit window
    let resize = {
        let canvas = canvas.clone();
        Listener::new(&win, "resize", move |_| fit_to_window(&canvas))
            .map_err(|e| SceneError::ContextUnavailable(format!("{e:?}")))?
    };

    let mut driver = SceneDriver::new(config, || js_sys::Math::random() as f32);
    let renderer = SceneRenderer::new(gl, &driver)?;
    log::info!(
        "scene ready: {} particles, {} photons",
        driver.halo().len(),
        driver.config().photon_count
    );

    let frames = AnimationLoop::start(move |now| {
        let scroll = window().map(|w| scroll_fraction(&w)).unwrap_or(0.0);
        let frame = driver.tick(now, scroll);
        renderer.draw(&frame, driver.halo(), canvas.width(), canvas.height());
    })
    .map_err(|e| SceneError::ContextUnavailable(format!("{e:?}")))?;

    Ok(SceneHandle {
        _resize: resize,
        _frames: frames,
    })
}

fn fit_to_window(canvas: &HtmlCanvasElement) {
    let Some(win) = window() else { return };
    let ratio = win.device_pixel_ratio().max(1.0);
    let w = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    canvas.set_width((w * ratio) as u32);
    canvas.set_height((h * ratio) as u32);
}

struct Program {
    program: WebGlProgram,
    uniforms: Vec<(&'static str, Option<WebGlUniformLocation>)>,
}

impl Program {
    fn new(gl: &GL, vert: &str, frag: &str, uniforms: &[&'static str]) -> Result<Self, SceneError> {
        let vs = compile(gl, GL::VERTEX_SHADER, "vertex", vert)?;
        let fs = compile(gl, GL::FRAGMENT_SHADER, "fragment", frag)?;
        let program = gl.create_program().ok_or(SceneError::Allocation("shader program"))?;
        gl.attach_shader(&program, &vs);
        gl.attach_shader(&program, &fs);
        gl.link_program(&program);
        gl.delete_shader(Some(&vs));
        gl.delete_shader(Some(&fs));

        let linked = gl
            .get_program_parameter(&program, GL::LINK_STATUS)
            .as_bool()
            .unwrap_or(false);
        if !linked {
            let log = gl.get_program_info_log(&program).unwrap_or_default();
            return Err(SceneError::Link(log));
        }

        // Unused uniforms are optimised out and come back as `None`.
        let uniforms = uniforms
            .iter()
            .map(|name| (*name, gl.get_uniform_location(&program, name)))
            .collect();
        Ok(Self { program, uniforms })
    }

    fn loc(&self, name: &str) -> Option<&WebGlUniformLocation> {
        self.uniforms
            .iter()
            .find(|(n, _)| *n == name)
            .and_then(|(_, l)| l.as_ref())
    }
}

fn compile(
    gl: &GL,
    kind: u32,
    stage: &'static str,
    source: &str,
) -> Result<WebGlShader, SceneError> {
    let shader = gl.create_shader(kind).ok_or(SceneError::Allocation("shader"))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);
    let ok = gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false);
    if ok {
        Ok(shader)
    } else {
        let log = gl.get_shader_info_log(&shader).unwrap_or_default();
        gl.delete_shader(Some(&shader));
        Err(SceneError::Compile { stage, log })
    }
}

/// Indexed triangle mesh living in a vertex array.
struct Surface {
    vao: WebGlVertexArrayObject,
    index_count: i32,
}

impl Surface {
    fn upload(gl: &GL, mesh: &Mesh) -> Result<Self, SceneError> {
        let vao = gl.create_vertex_array().ok_or(SceneError::Allocation("vertex array"))?;
        gl.bind_vertex_array(Some(&vao));

        attribute(gl, ATTR_POSITION, 3, &mesh.positions, GL::STATIC_DRAW)?;
        if !mesh.uvs.is_empty() {
            attribute(gl, ATTR_UV, 2, &mesh.uvs, GL::STATIC_DRAW)?;
        }

        let ibo = gl.create_buffer().ok_or(SceneError::Allocation("index buffer"))?;
        gl.bind_buffer(GL::ELEMENT_ARRAY_BUFFER, Some(&ibo));
        gl.buffer_data_with_array_buffer_view(
            GL::ELEMENT_ARRAY_BUFFER,
            &Uint16Array::from(mesh.indices.as_slice()),
            GL::STATIC_DRAW,
        );

        gl.bind_vertex_array(None);
        Ok(Self {
            vao,
            index_count: mesh.indices.len() as i32,
        })
    }

    fn draw(&self, gl: &GL) {
        gl.bind_vertex_array(Some(&self.vao));
        gl.draw_elements_with_i32(GL::TRIANGLES, self.index_count, GL::UNSIGNED_SHORT, 0);
    }
}

/// Point cloud with a position buffer that can be rewritten per frame.
struct Points {
    vao: WebGlVertexArrayObject,
    buffer: WebGlBuffer,
    count: i32,
}

impl Points {
    fn upload(gl: &GL, positions: &[f32], usage: u32) -> Result<Self, SceneError> {
        let vao = gl.create_vertex_array().ok_or(SceneError::Allocation("vertex array"))?;
        gl.bind_vertex_array(Some(&vao));
        let buffer = attribute(gl, ATTR_POSITION, 3, positions, usage)?;
        gl.bind_vertex_array(None);
        Ok(Self {
            vao,
            buffer,
            count: (positions.len() / 3) as i32,
        })
    }

    fn update(&self, gl: &GL, positions: &[f32]) {
        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&self.buffer));
        let data = Float32Array::from(positions);
        gl.buffer_sub_data_with_i32_and_array_buffer_view(GL::ARRAY_BUFFER, 0, &data);
    }

    fn draw(&self, gl: &GL) {
        gl.bind_vertex_array(Some(&self.vao));
        gl.draw_arrays(GL::POINTS, 0, self.count);
    }
}

fn attribute(
    gl: &GL,
    location: u32,
    size: i32,
    data: &[f32],
    usage: u32,
) -> Result<WebGlBuffer, SceneError> {
    let buffer = gl.create_buffer().ok_or(SceneError::Allocation("vertex buffer"))?;
    gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));
    gl.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &Float32Array::from(data), usage);
    gl.enable_vertex_attrib_array(location);
    gl.vertex_attrib_pointer_with_i32(location, size, GL::FLOAT, false, 0, 0);
    Ok(buffer)
}

const FLAT_UNIFORMS: &[&str] = &[
    "uModel",
    "uViewProjection",
    "uPointSize",
    "uColor",
    "uRoundPoints",
];
const DISK_UNIFORMS: &[&str] = &[
    "uModel",
    "uViewProjection",
    "uTime",
    "uIntensity",
    "uHorizonRadius",
    "uOpacity",
];
const LENS_UNIFORMS: &[&str] = &["uModel", "uViewProjection", "uTime", "uIntensity", "uOpacity"];

struct SceneRenderer {
    gl: GL,
    config: SceneConfig,
    flat: Program,
    disk_program: Program,
    lens_program: Program,
    horizon: Surface,
    disk: Surface,
    lens: Surface,
    particles: Points,
    photons: Points,
}

impl SceneRenderer {
    fn new<R: FnMut() -> f32>(gl: GL, driver: &SceneDriver<R>) -> Result<Self, SceneError> {
        let config = driver.config().clone();
        let flat = Program::new(&gl, shaders::FLAT_VERT, shaders::FLAT_FRAG, FLAT_UNIFORMS)?;
        let disk_program =
            Program::new(&gl, shaders::SURFACE_VERT, shaders::DISK_FRAG, DISK_UNIFORMS)?;
        let lens_program =
            Program::new(&gl, shaders::SURFACE_VERT, shaders::LENS_FRAG, LENS_UNIFORMS)?;

        let horizon = Surface::upload(&gl, &geometry::uv_sphere(config.horizon_radius, 32, 32))?;
        let disk = Surface::upload(&gl, &geometry::ring(0.2, 1.5, 64, 32))?;
        let lens = Surface::upload(&gl, &geometry::plane(4.0, 4.0))?;
        let particles = Points::upload(&gl, driver.halo().positions(), GL::DYNAMIC_DRAW)?;
        let photons = Points::upload(&gl, driver.photon_positions(), GL::STATIC_DRAW)?;

        Ok(Self {
            gl,
            config,
            flat,
            disk_program,
            lens_program,
            horizon,
            disk,
            lens,
            particles,
            photons,
        })
    }

    fn draw(&self, frame: &FrameState, halo: &ParticleHalo, width: u32, height: u32) {
        let gl = &self.gl;
        gl.viewport(0, 0, width as i32, height as i32);
        gl.clear_color(CLEAR[0], CLEAR[1], CLEAR[2], CLEAR[3]);
        gl.clear(GL::COLOR_BUFFER_BIT | GL::DEPTH_BUFFER_BIT);

        let view_projection = camera::projection(width, height, &self.config) * frame.camera.view();
        let vp = view_projection.to_cols_array();

        // Opaque horizon first so it occludes what sits behind it.
        gl.enable(GL::DEPTH_TEST);
        gl.depth_mask(true);
        gl.disable(GL::BLEND);
        let pulse = Mat4::from_scale(Vec3::splat(frame.horizon_scale));
        self.use_flat(&vp, pulse, [0.0, 0.0, 0.0, 1.0], 1.0, false);
        self.horizon.draw(gl);

        // Translucent layers.
        gl.enable(GL::BLEND);
        gl.depth_mask(false);
        gl.blend_func(GL::SRC_ALPHA, GL::ONE_MINUS_SRC_ALPHA);

        gl.use_program(Some(&self.disk_program.program));
        let p = &self.disk_program;
        let model = Mat4::from_rotation_x(FRAC_PI_2) * Mat4::from_rotation_z(frame.disk_angle);
        gl.uniform_matrix4fv_with_f32_array(p.loc("uModel"), false, &model.to_cols_array());
        gl.uniform_matrix4fv_with_f32_array(p.loc("uViewProjection"), false, &vp);
        gl.uniform1f(p.loc("uTime"), frame.elapsed);
        gl.uniform1f(p.loc("uIntensity"), frame.disk_intensity);
        gl.uniform1f(p.loc("uHorizonRadius"), self.config.horizon_radius);
        gl.uniform1f(p.loc("uOpacity"), 1.0);
        self.disk.draw(gl);

        gl.blend_func(GL::SRC_ALPHA, GL::ONE);

        gl.use_program(Some(&self.lens_program.program));
        let p = &self.lens_program;
        let model = Mat4::from_translation(Vec3::new(0.0, 0.0, -0.1));
        gl.uniform_matrix4fv_with_f32_array(p.loc("uModel"), false, &model.to_cols_array());
        gl.uniform_matrix4fv_with_f32_array(p.loc("uViewProjection"), false, &vp);
        gl.uniform1f(p.loc("uTime"), frame.elapsed);
        gl.uniform1f(p.loc("uIntensity"), frame.lens_intensity);
        gl.uniform1f(p.loc("uOpacity"), 1.0);
        self.lens.draw(gl);

        self.particles.update(gl, halo.positions());
        self.use_flat(&vp, Mat4::IDENTITY, PARTICLE_COLOR, 1.5, true);
        self.particles.draw(gl);

        gl.blend_func(GL::SRC_ALPHA, GL::ONE_MINUS_SRC_ALPHA);
        self.use_flat(&vp, Mat4::from_rotation_z(frame.photon_angle), PHOTON_COLOR, 3.0, true);
        self.photons.draw(gl);

        gl.bind_vertex_array(None);
    }

    fn use_flat(&self, vp: &[f32; 16], model: Mat4, color: [f32; 4], point_size: f32, round: bool) {
        let gl = &self.gl;
        let p = &self.flat;
        gl.use_program(Some(&p.program));
        gl.uniform_matrix4fv_with_f32_array(p.loc("uModel"), false, &model.to_cols_array());
        gl.uniform_matrix4fv_with_f32_array(p.loc("uViewProjection"), false, vp);
        gl.uniform1f(p.loc("uPointSize"), point_size);
        gl.uniform4f(p.loc("uColor"), color[0], color[1], color[2], color[3]);
        gl.uniform1i(p.loc("uRoundPoints"), i32::from(round));
    }
}

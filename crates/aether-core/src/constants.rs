// Shared visual tuning constants used by both web and native frontends.

// Target seeking
pub const SEEK_FACTOR: f32 = 0.02; // fraction of remaining distance per rendered frame
pub const CRYSTAL_EMISSIVE_FACTOR: f32 = 0.2; // emissive seeks primary color scaled by this

// Camera projection
pub const CAMERA_FOVY_DEG: f32 = 50.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 300.0; // starfield shell must stay inside

// Centerpiece
pub const CRYSTAL_SCALE: f32 = 1.8;
pub const CRYSTAL_YAW_PER_FRAME: f32 = 0.001; // accumulated, radians
pub const CRYSTAL_ROLL_PER_FRAME: f32 = 0.0005;
pub const CRYSTAL_FLOAT_SPEED: f32 = 1.5;
pub const CRYSTAL_FLOAT_ROTATION: f32 = 0.2;
pub const CRYSTAL_FLOAT_INTENSITY: f32 = 0.2;
pub const CRYSTAL_INITIAL_EMISSIVE: u32 = 0x312e81;

// Centerpiece mesh (torus knot)
pub const KNOT_RADIUS: f32 = 1.0;
pub const KNOT_TUBE: f32 = 0.3;
pub const KNOT_TUBULAR_SEGMENTS: usize = 128;
pub const KNOT_RADIAL_SEGMENTS: usize = 16;
pub const KNOT_P: u32 = 2;
pub const KNOT_Q: u32 = 3;

// Floating shapes: rotation angle = elapsed seconds × speed × these multipliers
pub const SHAPE_SPIN_X: f32 = 0.2;
pub const SHAPE_SPIN_Y: f32 = 0.1;
pub const SHAPE_FLOAT_ROTATION: f32 = 0.5;
pub const SHAPE_FLOAT_INTENSITY: f32 = 1.0;

// Starfield shell
pub const STAR_COUNT: usize = 5000;
pub const STAR_SHELL_RADIUS: f32 = 100.0;
pub const STAR_SHELL_DEPTH: f32 = 50.0;
pub const STAR_SEED: u64 = 7;
pub const STAR_TWINKLE_SPEED: f32 = 0.5;
pub const STAR_ROTATE_PER_SEC: f32 = 0.005; // radians, rigid rotation of the whole shell

// Lighting
pub const AMBIENT_INTENSITY: f32 = 0.5;
pub const KEY_LIGHT_POSITION: [f32; 3] = [10.0, 10.0, 10.0];
pub const FILL_LIGHT_POSITION: [f32; 3] = [-10.0, -10.0, -5.0];
pub const FILL_LIGHT_COLOR: u32 = 0x6366f1;
pub const FILL_LIGHT_INTENSITY: f32 = 0.5;
pub const OVERHEAD_LIGHT_INTENSITY: f32 = 2.0;

pub const DEFAULT_SOFTENING: f64 = 1.0e-2; // added in quadrature to every pair distance
pub const DEFAULT_SIZES: [usize; 3] = [1000, 2000, 5000]; // point counts timed per run
pub const DEFAULT_SIGMA: f64 = 0.1; // spread of the gaussian point cloud
pub const REL_TOLERANCE: f64 = 1.0e-9; // allowed drift between variants
pub const NAME_WIDTH: usize = 20; // column of the variant name in a report line

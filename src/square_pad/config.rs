// Compile-time knobs for the padder. CLI defaults live on the argument parser.

/// Padding added on each side, as a fraction of the larger source side.
/// Kept as a ratio of integers so the geometry never touches floats.
pub const PADDING_RATIO_NUMERATOR: u32 = 1;
pub const PADDING_RATIO_DENOMINATOR: u32 = 5;

/// Largest RGBA canvas the padder will allocate, matching the `image`
/// crate's default decoder allocation limit (512 MiB).
pub const MAX_CANVAS_BYTES: u64 = 512 * 1024 * 1024;

/// Largest number of classes a forest accepts, class ids index dense count tables.
pub const MAX_CLASSES: usize = 1 << 16;

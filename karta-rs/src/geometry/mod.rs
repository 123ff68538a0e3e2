pub mod primitives;
pub mod projection;
pub mod simplification;

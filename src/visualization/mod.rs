#[cfg(feature = "viewer")]
pub mod vgsim_vis2d;

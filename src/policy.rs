//! Backend-free inference.
//!
//! Runtime inference needs no ML backend: trained parameters are exported
//! once and evaluated here with plain matrix code. [`LookupTablePolicy`]
//! covers the common discrete-action setup, where the network scores the
//! rows of a fixed action lookup table.
mod lookup;
mod mat;
mod mlp;
pub use lookup::LookupTablePolicy;
pub use mat::Mat;
pub use mlp::Mlp;

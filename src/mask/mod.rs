pub(crate) mod annulus;

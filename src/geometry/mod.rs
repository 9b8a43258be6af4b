pub(crate) mod arc_length;
pub(crate) mod rescale;

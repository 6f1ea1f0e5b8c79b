pub(crate) mod format;
pub(crate) mod palette;
pub(crate) mod surface;

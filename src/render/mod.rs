pub(crate) mod backend;
pub(crate) mod headless;
pub(crate) mod raster;

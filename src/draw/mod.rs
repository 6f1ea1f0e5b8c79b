pub(crate) mod copy;
pub(crate) mod flood;
pub(crate) mod image;
pub(crate) mod primitives;
pub(crate) mod text;

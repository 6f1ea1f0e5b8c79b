pub(crate) mod composite;
pub(crate) mod fader;
pub(crate) mod masks;
pub(crate) mod transitions;

pub(crate) mod canvas;
pub(crate) mod generate;
pub(crate) mod pipeline;

pub(crate) mod paths;

pub(crate) use paths::{is_hidden, lsdirs};

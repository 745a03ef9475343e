//! Handler conveniences for reaching shared state and collapsing
//! infrastructure failures into 500 responses.

mod depot;
mod result;

pub(crate) use depot::DepotExt as _;
pub(crate) use result::ResultExt as _;

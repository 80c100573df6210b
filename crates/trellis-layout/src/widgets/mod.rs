//! Stock elements built on the layout contract.

mod children;
mod column;
mod overlay;
mod padding;
mod row;
mod sized_box;
mod spacer;

pub use children::*;
pub use column::*;
pub use overlay::*;
pub use padding::*;
pub use row::*;
pub use sized_box::*;
pub use spacer::*;

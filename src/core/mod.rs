pub mod category;
pub mod label_layout;
pub mod types;

pub use category::{
    CategoryRecord, OTHER_LABEL, PieSlice, SliceExtra, SubCategory, derived_usd, project_slices,
};
pub use label_layout::{
    LabelLayout, LabelLayoutParams, LabelRect, LabelSide, apply_edge_anchor, connector_anchor_x,
    resolve_label_side,
};
pub use types::{HexColor, Viewport};

//! One renderer per navigation section.

pub mod charts;
pub mod dataframes;
pub mod layout;
pub mod media;
pub mod utilities;
pub mod widgets;

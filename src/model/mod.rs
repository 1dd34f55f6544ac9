//! Target-independent decisions behind each page enhancement. The DOM glue in
//! `frontend` only queries elements and applies what these modules decide.

pub mod email;
pub mod filter;
pub mod images;
pub mod lightbox;
pub mod links;
pub mod reveal;
pub mod scroll;
pub mod theme;
pub mod toast;
pub mod typing;

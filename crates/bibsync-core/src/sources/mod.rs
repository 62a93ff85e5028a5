//! Source adapters for fetching publication drafts from online indices

pub mod scopus;
pub mod traits;
pub mod trdizin;
pub mod wos;

pub use scopus::*;
pub use traits::*;
pub use trdizin::*;
pub use wos::*;

pub mod metric;
pub mod region;
pub mod summary;
pub mod timeline;

pub use metric::*;
pub use region::*;
pub use summary::*;
pub use timeline::*;

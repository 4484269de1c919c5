pub mod coordinates;
pub mod data;
pub mod datasource;
pub mod limits;
pub mod pixels;

// Re-export everything for compatibility
pub use coordinates::*;
pub use data::*;
pub use datasource::*;
pub use limits::*;
pub use pixels::*;

pub mod interval;
pub mod speaker;
pub mod turn;
pub mod word;

pub use interval::*;
pub use speaker::*;
pub use turn::*;
pub use word::*;

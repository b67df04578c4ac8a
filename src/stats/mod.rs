pub mod core;
pub mod dispatch;
pub mod totals;
pub mod tracker;
pub mod worker;


pub use self::core::*;
pub use self::dispatch::*;
pub use self::totals::*;
pub use self::tracker::*;
pub use self::worker::*;

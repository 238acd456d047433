mod logs;
mod metrics;
pub mod period;
mod shutdown;

pub use self::logs::Logger;
pub use self::metrics::Metrics;
pub use self::period::{Period, advance, compute_interval};
pub use self::shutdown::shutdown_signal;

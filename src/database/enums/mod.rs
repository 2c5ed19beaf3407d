pub mod interval;

pub use interval::CandleInterval;

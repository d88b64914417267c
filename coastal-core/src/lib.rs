pub mod errors;
pub mod source;
pub mod spatial;
pub mod stations;
pub mod timeseries;

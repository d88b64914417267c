mod carbonate;
mod sediment;
mod shoreline;
mod tide;

pub use carbonate::{
    CarbonateParameters, CarbonateSolution, CarbonateSystem, K1K2Parameterization,
};
pub use sediment::{SedimentParameters, SedimentTransport};
pub use shoreline::{
    validate_projection_years, ShorelineProjector, MAX_PROJECTION_YEARS, MIN_PROJECTION_YEARS,
};
pub use tide::{SyntheticTideGenerator, TideParameters};

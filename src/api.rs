mod mock;
mod octopus;
mod price_feed;

pub use self::{
    mock::Mock,
    octopus::{Api as Octopus, Config as OctopusConfig},
    price_feed::PriceFeed,
};

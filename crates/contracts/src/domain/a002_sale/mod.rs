pub mod aggregate;
pub mod explore;

pub use aggregate::{
    CreatedSale, LastSale, Sale, SaleEditPayload, SalePayload, ShipmentUpdate,
};
pub use explore::{ExploreFilter, ExplorePage, ExploreQuery};

pub mod aggregates;
pub mod catalog;
pub mod domain;
pub mod error;
pub mod lifecycle;
pub mod policy;
pub mod ports;

pub use domain::{
    Account, Actor, Application, ApplicationStatus, Contract, ContractStatus, NewOffer, Offer,
    OfferStatus, Role, TutorProfile,
};
pub use error::{DomainError, DomainResult};
pub use ports::{
    CascadeReport, IdentityProvider, MarketplaceStore, NotificationEvent, Notifier, PortError,
    PortResult,
};

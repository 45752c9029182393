mod client;
mod simulation;

pub use client::{Client, ClientPayload, ClientResponse, ClientUpdate, NewClient};
pub use simulation::{SimulationInput, SimulationPayload};

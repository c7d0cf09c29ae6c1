//! Simulated providers. Nothing here touches the network, a disk or a real
//! payment gateway; effects are reported through `tracing`.

pub mod analytics;
pub mod cdn;
pub mod channels;
pub mod databases;
pub mod documents;
pub mod email;
pub mod fraud;
pub mod in_memory;
pub mod payment_methods;
pub mod storage;

//! Parameter parsing for lazo, a command line tool that upgrades workloads
//! running on Rancher managed clusters.
pub mod helpers;
pub mod params;

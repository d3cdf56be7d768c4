// Domain layer: credential and API records plus the ports the check runs against.

pub mod model;
pub mod ports;

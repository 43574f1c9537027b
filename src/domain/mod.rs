// Domain layer: render context, template jobs and the ports the generator depends on.

pub mod model;
pub mod ports;

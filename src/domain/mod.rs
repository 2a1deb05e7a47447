// Domain layer: the ticket entity, its estimator and the urgency capability.

pub mod ports;
pub mod ticket;
pub mod variants;

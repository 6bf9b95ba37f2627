pub mod entities;
pub mod features;
pub mod model;
pub mod ports;
pub mod scaler;
pub mod services;
pub mod value_objects;

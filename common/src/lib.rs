//! Wire types shared between the asset inventory server and its clients.

pub mod model;
pub mod requests;
pub mod responses;

//! Client for the Chilean government public holidays API (apis.digital.gob.cl).

pub mod index;

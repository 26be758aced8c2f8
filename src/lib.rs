#![allow(non_snake_case)]
pub mod estimator;
pub mod evaluation;
pub mod simulator;
pub mod sensitivity;
pub mod data_parsing;
pub mod plotting;

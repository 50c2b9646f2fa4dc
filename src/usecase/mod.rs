//! Usecase layer: the extract → render → write workflow.

pub mod convert;

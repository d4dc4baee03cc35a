// Batch orchestration.

pub mod batch;

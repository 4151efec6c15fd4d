// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod columns;
pub mod ids;
pub mod model;
pub mod presentation;
pub mod sample;
pub mod state;
pub mod viewport;

pub use columns::*;
pub use ids::*;
pub use model::*;
pub use presentation::*;
pub use sample::*;
pub use state::*;
pub use viewport::*;

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runnable demos for the Understory grid surface crates.
//!
//! The demos live under `examples/`; this library is intentionally empty.

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Database backend-specific code.
//!
//! This module is limited to connection initialization, migration
//! execution and PRAGMA configuration. Item queries live in `sqlite/`.

pub mod sqlite;

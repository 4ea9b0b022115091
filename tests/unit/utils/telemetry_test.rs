// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use wikigroup::utils::telemetry;

#[test]
fn test_telemetry_initialization_is_repeatable() {
    telemetry::init_telemetry();
    telemetry::init_telemetry();

    tracing::debug!("This is a debug message");
    tracing::info!(page = "List_of_animals", column = "Habitat", "Structured message");
    tracing::warn!(url = "https://example.invalid", error = "timeout", "Request error");
}

//! Workspace-level integration tests for pical live under `tests/`.

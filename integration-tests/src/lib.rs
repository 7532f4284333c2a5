//! End-to-end tests against a deployed order intake stack live in `tests/`.

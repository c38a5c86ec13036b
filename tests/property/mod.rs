//! Property-based test modules

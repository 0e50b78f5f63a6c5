// Library exports for guestbook
// This allows integration tests and other tools to drive a run programmatically.

pub mod db;
pub mod report;
pub mod runner;
pub mod seed;

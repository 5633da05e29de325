//! Local bus agent server.
//!
//! A small web application for looking up bus timings by route name and
//! signing up for bus alerts and courses. Route search tolerates shorthand
//! ("tpt") and misspellings ("tirupsathi").

pub mod config;
pub mod domain;
pub mod matcher;
pub mod registrations;
pub mod source;
pub mod web;

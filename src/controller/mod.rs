//! Page controller and the ports it drives.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ports` declares what the controller needs from the page, `update_all`
//! owns the update-all request flow, and `page` wires everything at load.

pub mod page;
pub mod ports;
pub mod update_all;

#[cfg(test)]
mod test_support;

//! Config file generator module.

mod dialplan;
mod pjsip;

pub use dialplan::generate_dialplan;
pub use pjsip::generate_pjsip;
